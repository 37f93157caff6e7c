//! HTTP request handlers for the calculator service.

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use calc::{ops, parse_operand, CalcError, MAX_SAFE_INTEGER};

/// Query parameters for the two-operand endpoints
/// (add, subtract, multiply, divide, mod).
///
/// Fields are raw strings so that missing or malformed values produce
/// the operation's own 400 JSON message instead of a framework
/// rejection.
#[derive(Debug, Deserialize)]
pub struct PairQuery {
    /// First operand.
    pub num1: Option<String>,
    /// Second operand.
    pub num2: Option<String>,
}

/// Query parameters for the power endpoint.
#[derive(Debug, Deserialize)]
pub struct PowerQuery {
    /// Base operand.
    pub base: Option<String>,
    /// Exponent operand.
    pub exponent: Option<String>,
}

/// Query parameters for the sqrt endpoint.
#[derive(Debug, Deserialize)]
pub struct SqrtQuery {
    /// The operand.
    pub num: Option<String>,
}

/// Successful computation response.
#[derive(Debug, Serialize)]
pub struct ResultResponse {
    /// The computed value.
    pub result: serde_json::Value,
}

impl ResultResponse {
    /// Wrap a computed value. Whole numbers within the safe-integer
    /// range serialize as JSON integers (`4`, not `4.0`); everything
    /// else serializes as floating point. A non-finite value becomes
    /// JSON `null`.
    pub fn new(value: f64) -> Self {
        let result = if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
            serde_json::Value::from(value as i64)
        } else {
            serde_json::Value::from(value)
        };
        Self { result }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}

/// Static service descriptor returned by the root route.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub status: &'static str,
    pub message: &'static str,
    pub endpoints: EndpointIndex,
}

/// URL templates for the seven operation endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointIndex {
    pub addition: &'static str,
    pub subtraction: &'static str,
    pub multiplication: &'static str,
    pub division: &'static str,
    pub exponentiation: &'static str,
    pub square_root: &'static str,
    pub modulo: &'static str,
}

impl ServiceInfo {
    fn new() -> Self {
        Self {
            status: "success",
            message: "Welcome to the Calculator Microservice!",
            endpoints: EndpointIndex {
                addition: "/add?num1=x&num2=y",
                subtraction: "/subtract?num1=x&num2=y",
                multiplication: "/multiply?num1=x&num2=y",
                division: "/divide?num1=x&num2=y",
                exponentiation: "/power?base=x&exponent=y",
                square_root: "/sqrt?num=x",
                modulo: "/mod?num1=x&num2=y",
            },
        }
    }
}

/// Root route: static descriptor enumerating the operation endpoints.
pub async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo::new())
}

/// `GET /add?num1=x&num2=y`
pub async fn add(Query(query): Query<PairQuery>) -> Response {
    let Some((num1, num2)) = parse_pair(&query) else {
        return invalid_input("Invalid numbers provided for addition.");
    };
    ok(ops::add(num1, num2))
}

/// `GET /subtract?num1=x&num2=y`
pub async fn subtract(Query(query): Query<PairQuery>) -> Response {
    let Some((num1, num2)) = parse_pair(&query) else {
        return invalid_input("Invalid numbers provided for subtraction.");
    };
    ok(ops::subtract(num1, num2))
}

/// `GET /multiply?num1=x&num2=y`
pub async fn multiply(Query(query): Query<PairQuery>) -> Response {
    let Some((num1, num2)) = parse_pair(&query) else {
        return invalid_input("Invalid numbers provided for multiplication.");
    };
    ok(ops::multiply(num1, num2))
}

/// `GET /divide?num1=x&num2=y`
///
/// Rejects a zero divisor with 400.
pub async fn divide(Query(query): Query<PairQuery>) -> Response {
    let Some((num1, num2)) = parse_pair(&query) else {
        return invalid_input("Invalid numbers provided for division.");
    };
    match ops::divide(num1, num2) {
        Ok(result) => ok(result),
        Err(e) => operation_error(e),
    }
}

/// `GET /power?base=x&exponent=y`
///
/// Fractional and negative exponents are accepted; a non-finite result
/// is rejected with 400.
pub async fn power(Query(query): Query<PowerQuery>) -> Response {
    let (Some(base), Some(exponent)) = (
        parse_operand(query.base.as_deref()),
        parse_operand(query.exponent.as_deref()),
    ) else {
        return invalid_input("Invalid numbers provided for exponentiation.");
    };
    match ops::power(base, exponent) {
        Ok(result) => ok(result),
        Err(e) => operation_error(e),
    }
}

/// `GET /sqrt?num=x`
///
/// Rejects a negative operand with 400.
pub async fn sqrt(Query(query): Query<SqrtQuery>) -> Response {
    let Some(num) = parse_operand(query.num.as_deref()) else {
        return invalid_input("Invalid number provided for square root.");
    };
    match ops::sqrt(num) {
        Ok(result) => ok(result),
        Err(e) => operation_error(e),
    }
}

/// `GET /mod?num1=x&num2=y`
///
/// Remainder semantics: the result sign follows `num1`. Rejects a zero
/// divisor with 400.
pub async fn modulo(Query(query): Query<PairQuery>) -> Response {
    let Some((num1, num2)) = parse_pair(&query) else {
        return invalid_input("Invalid numbers provided for modulo operation.");
    };
    match ops::modulo(num1, num2) {
        Ok(result) => ok(result),
        Err(e) => operation_error(e),
    }
}

/// Parse both operands of a two-operand query. Each raw value is parsed
/// exactly once; the parsed values feed straight into the computation.
fn parse_pair(query: &PairQuery) -> Option<(f64, f64)> {
    let num1 = parse_operand(query.num1.as_deref())?;
    let num2 = parse_operand(query.num2.as_deref())?;
    Some((num1, num2))
}

fn ok(result: f64) -> Response {
    (StatusCode::OK, Json(ResultResponse::new(result))).into_response()
}

fn invalid_input(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Map an operation precondition failure to a 400 JSON response.
fn operation_error(e: CalcError) -> Response {
    tracing::debug!(error = %e, "operation rejected");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}
