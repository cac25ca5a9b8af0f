use actix_web::test;
use postboard::config::pagination::PaginationConfig;
use postboard::state::app_state::AppState;
use postboard::state::security_config::SecurityConfig;
use serde_json::Value;

use crate::support::{create_test_app, test_state};

#[actix_web::test]
async fn health_reports_db_and_migrations() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert!(body.get("db_error").is_none());
    assert!(body["migrations"].as_str().unwrap().starts_with("m2025"));
    Ok(())
}

#[actix_web::test]
async fn health_without_db_still_answers() -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::without_db(SecurityConfig::for_tests(), PaginationConfig::default());
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["db"], "error");
    assert!(body["db_error"].is_string());
    Ok(())
}

#[actix_web::test]
async fn data_routes_without_db_are_unavailable() -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::without_db(SecurityConfig::for_tests(), PaginationConfig::default());
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/api/v1/posts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 503);
    assert_eq!(
        resp.headers().get("retry-after").and_then(|v| v.to_str().ok()),
        Some("1")
    );
    Ok(())
}
