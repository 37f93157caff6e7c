//! Calc Service - HTTP microservice for basic arithmetic.
//!
//! A stateless REST API exposing arithmetic operations as
//! query-parameterized GET endpoints.
//!
//! ## Endpoints
//!
//! - `GET /` - Service descriptor listing all endpoints
//! - `GET /add?num1=x&num2=y` - Addition
//! - `GET /subtract?num1=x&num2=y` - Subtraction
//! - `GET /multiply?num1=x&num2=y` - Multiplication
//! - `GET /divide?num1=x&num2=y` - Division
//! - `GET /power?base=x&exponent=y` - Exponentiation
//! - `GET /sqrt?num=x` - Square root
//! - `GET /mod?num1=x&num2=y` - Modulo
//!
//! The listening port is fixed at 3000. `RUST_LOG` tunes log verbosity
//! (default "calc_service=info,tower_http=info").

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Fixed listening port; the service contract has no port configuration.
const PORT: u16 = 3000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "calc_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = calc_service::router();

    let addr = SocketAddr::from(([0, 0, 0, 0], PORT));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Calculator microservice listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
