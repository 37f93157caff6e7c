//! Integration tests for the HTTP API.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;

/// Create a test server running the real service router.
fn create_test_server() -> TestServer {
    TestServer::new(calc_service::router()).unwrap()
}

#[tokio::test]
async fn test_root_descriptor() {
    let server = create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "Welcome to the Calculator Microservice!");

    let endpoints = json["endpoints"].as_object().unwrap();
    assert_eq!(endpoints.len(), 7);
    assert_eq!(endpoints["addition"], "/add?num1=x&num2=y");
    assert_eq!(endpoints["squareRoot"], "/sqrt?num=x");
    assert_eq!(endpoints["modulo"], "/mod?num1=x&num2=y");
}

#[tokio::test]
async fn test_add_success() {
    let server = create_test_server();

    let response = server.get("/add?num1=2&num2=3").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["result"], 5);
}

#[tokio::test]
async fn test_add_fractional() {
    let server = create_test_server();

    let response = server.get("/add?num1=0.5&num2=0.25").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["result"].as_f64().unwrap(), 0.75);
}

#[tokio::test]
async fn test_add_non_numeric_rejected() {
    let server = create_test_server();

    let response = server.get("/add?num1=abc&num2=5").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["error"], "Invalid numbers provided for addition.");
}

#[tokio::test]
async fn test_add_missing_params() {
    let server = create_test_server();

    // Missing num2
    let response = server.get("/add?num1=5").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // Missing num1
    let response = server.get("/add?num2=5").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // No parameters at all
    let response = server.get("/add").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["error"], "Invalid numbers provided for addition.");
}

#[tokio::test]
async fn test_subtract_success() {
    let server = create_test_server();

    let response = server.get("/subtract?num1=10&num2=4").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["result"], 6);
}

#[tokio::test]
async fn test_subtract_invalid_input() {
    let server = create_test_server();

    let response = server.get("/subtract?num1=&num2=4").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["error"], "Invalid numbers provided for subtraction.");
}

#[tokio::test]
async fn test_multiply_success() {
    let server = create_test_server();

    let response = server.get("/multiply?num1=6&num2=7").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["result"], 42);
}

#[tokio::test]
async fn test_multiply_invalid_input() {
    let server = create_test_server();

    let response = server.get("/multiply?num1=6&num2=seven").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(
        json["error"],
        "Invalid numbers provided for multiplication."
    );
}

#[tokio::test]
async fn test_divide_success() {
    let server = create_test_server();

    let response = server.get("/divide?num1=10&num2=4").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["result"].as_f64().unwrap(), 2.5);
}

#[tokio::test]
async fn test_divide_by_zero() {
    let server = create_test_server();

    let response = server.get("/divide?num1=10&num2=0").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["error"], "Division by zero is not allowed.");
}

#[tokio::test]
async fn test_divide_invalid_input() {
    let server = create_test_server();

    let response = server.get("/divide?num1=x&num2=2").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["error"], "Invalid numbers provided for division.");
}

#[tokio::test]
async fn test_power_success() {
    let server = create_test_server();

    let response = server.get("/power?base=2&exponent=10").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["result"], 1024);
}

#[tokio::test]
async fn test_power_fractional_exponent() {
    let server = create_test_server();

    let response = server.get("/power?base=9&exponent=0.5").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["result"], 3);
}

#[tokio::test]
async fn test_power_overflow() {
    let server = create_test_server();

    let response = server.get("/power?base=10&exponent=1000").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["error"], "Result is too large or undefined.");
}

#[tokio::test]
async fn test_power_undefined() {
    let server = create_test_server();

    // Negative base with fractional exponent has no real result
    let response = server.get("/power?base=-8&exponent=0.5").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["error"], "Result is too large or undefined.");
}

#[tokio::test]
async fn test_power_invalid_input() {
    let server = create_test_server();

    let response = server.get("/power?base=2").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(
        json["error"],
        "Invalid numbers provided for exponentiation."
    );
}

#[tokio::test]
async fn test_sqrt_success() {
    let server = create_test_server();

    let response = server.get("/sqrt?num=16").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["result"], 4);
}

#[tokio::test]
async fn test_sqrt_negative() {
    let server = create_test_server();

    let response = server.get("/sqrt?num=-4").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(
        json["error"],
        "Cannot calculate square root of a negative number."
    );
}

#[tokio::test]
async fn test_sqrt_invalid_input() {
    let server = create_test_server();

    let response = server.get("/sqrt?num=four").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["error"], "Invalid number provided for square root.");
}

#[tokio::test]
async fn test_mod_success() {
    let server = create_test_server();

    let response = server.get("/mod?num1=10&num2=3").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["result"], 1);
}

#[tokio::test]
async fn test_mod_sign_follows_dividend() {
    let server = create_test_server();

    let response = server.get("/mod?num1=-10&num2=3").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["result"], -1);
}

#[tokio::test]
async fn test_mod_by_zero() {
    let server = create_test_server();

    let response = server.get("/mod?num1=10&num2=0").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(
        json["error"],
        "Division by zero is not allowed in modulo operation."
    );
}

#[tokio::test]
async fn test_safe_integer_boundary() {
    let server = create_test_server();

    // 2^53 - 1 is the largest accepted operand
    let response = server.get("/add?num1=9007199254740991&num2=0").await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["result"].as_f64().unwrap(), 9007199254740991.0);

    // 2^53 parses as a finite double but is out of the safe range
    let response = server.get("/add?num1=9007199254740992&num2=0").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["error"], "Invalid numbers provided for addition.");
}

#[tokio::test]
async fn test_idempotent_responses() {
    let server = create_test_server();

    let first = server.get("/divide?num1=7&num2=2").await;
    let second = server.get("/divide?num1=7&num2=2").await;

    first.assert_status_ok();
    second.assert_status_ok();
    let first: Value = first.json();
    let second: Value = second.json();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unknown_path_not_found() {
    let server = create_test_server();

    let response = server.get("/factorial?num=5").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
