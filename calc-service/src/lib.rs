//! Calc Service Library
//!
//! HTTP handlers, router, and request-logging middleware for the
//! calculator microservice. This library is used by both the
//! calc-service binary and integration tests.

pub mod handlers;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

// Re-export commonly used types for convenience
pub use handlers::{ErrorResponse, ResultResponse, ServiceInfo};

/// Build the service router: the root descriptor plus the seven
/// operation endpoints, all GET. Unregistered paths and non-GET methods
/// fall through to axum's default responses.
pub fn router() -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/add", get(handlers::add))
        .route("/subtract", get(handlers::subtract))
        .route("/multiply", get(handlers::multiply))
        .route("/divide", get(handlers::divide))
        .route("/power", get(handlers::power))
        .route("/sqrt", get(handlers::sqrt))
        .route("/mod", get(handlers::modulo))
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Access-log middleware: one line per request, emitted before dispatch.
/// The subscriber's fmt layer supplies the ISO-8601 timestamp. Never
/// alters the request and never fails it.
async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!(
        method = %request.method(),
        path = %request.uri().path(),
        "request"
    );
    next.run(request).await
}
