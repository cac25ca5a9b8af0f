use actix_web::test;
use backend_test_support::unique_helpers::unique_username;
use postboard::auth::Role;
use postboard::state::security_config::SecurityConfig;

use crate::common::assert_problem;
use crate::support::auth::{bearer_header, mint_expired_token, mint_test_token};
use crate::support::factory::seed_user;
use crate::support::{create_test_app, test_state};

#[actix_web::test]
async fn me_without_header_is_missing_bearer() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await;

    let req = test::TestRequest::get().uri("/api/v1/auth/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 401, "UNAUTHORIZED_MISSING_BEARER").await;

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("Authorization", "Basic dXNlcjpwdw=="))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 401, "UNAUTHORIZED_MISSING_BEARER").await;
    Ok(())
}

#[actix_web::test]
async fn garbage_and_foreign_tokens_are_invalid() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await;

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(bearer_header("not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 401, "UNAUTHORIZED_INVALID_JWT").await;

    // Signed with a secret this server does not know.
    let foreign = SecurityConfig::new("some-other-secret".as_bytes());
    let token = mint_test_token("alice", Role::Regular, &foreign);
    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(bearer_header(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 401, "UNAUTHORIZED_INVALID_JWT").await;
    Ok(())
}

#[actix_web::test]
async fn expired_token_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await;
    let security = state.security.clone();
    let app = create_test_app(state).build().await;
    let user = seed_user(&app, &unique_username("exp"), None).await;

    let token = mint_expired_token(&user.username, Role::Regular, &security);
    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(bearer_header(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 401, "UNAUTHORIZED_EXPIRED_JWT").await;
    Ok(())
}

#[actix_web::test]
async fn valid_token_for_unknown_subject_is_principal_not_found(
) -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await;
    let security = state.security.clone();
    let app = create_test_app(state).build().await;

    let token = mint_test_token("nobody-by-this-name", Role::Regular, &security);
    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(bearer_header(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 401, "PRINCIPAL_NOT_FOUND").await;
    Ok(())
}

#[actix_web::test]
async fn error_responses_carry_request_trace() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await;

    let req = test::TestRequest::get().uri("/api/v1/auth/me").to_request();
    let resp = test::call_service(&app, req).await;
    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("x-request-id should be set");
    let problem = assert_problem(resp, 401, "UNAUTHORIZED_MISSING_BEARER").await;
    assert_eq!(problem.trace_id, request_id);
    Ok(())
}
