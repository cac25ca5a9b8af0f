#![allow(dead_code)]

// tests/common/mod.rs
pub mod proptest_prelude;

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use backend_test_support::problem_details::{
    assert_problem_details_from_service_response, ProblemDetailsLike,
};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Assert an error response against the problem-details contract.
pub async fn assert_problem(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
) -> ProblemDetailsLike {
    let status = StatusCode::from_u16(expected_status).expect("valid status code");
    let problem =
        assert_problem_details_from_service_response(resp, expected_code, status, None).await;
    assert!(
        problem.type_.starts_with("https://postboard.dev/errors/"),
        "type should follow the expected URL format (got {})",
        problem.type_
    );
    problem
}
