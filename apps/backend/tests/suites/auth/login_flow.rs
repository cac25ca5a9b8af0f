use actix_web::test;
use backend_test_support::unique_helpers::unique_username;
use serde_json::{json, Value};

use crate::common::assert_problem;
use crate::support::auth::bearer_header;
use crate::support::factory::{login, register};
use crate::support::{create_test_app, test_state};

#[actix_web::test]
async fn register_login_and_me_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await;
    let username = unique_username("alice");

    let registered = register(&app, &username, "wonderland", None).await;
    assert_eq!(registered["username"], username.as_str());
    assert_eq!(registered["role"], "regular");
    assert!(registered.get("password_hash").is_none());
    assert!(registered.get("password").is_none());

    let logged_in = login(&app, &username, "wonderland").await;
    assert_eq!(logged_in["token_type"], "Bearer");
    assert_eq!(logged_in["id"], registered["id"]);
    let token = logged_in["access_token"].as_str().unwrap();
    assert_eq!(token.split('.').count(), 3, "token should be a compact JWT");

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(bearer_header(token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let me: Value = test::read_body_json(resp).await;
    assert_eq!(me["id"], registered["id"]);
    assert_eq!(me["username"], username.as_str());

    Ok(())
}

#[actix_web::test]
async fn register_as_admin_is_reflected_in_role() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await;
    let username = unique_username("root");

    let registered = register(&app, &username, "pw", Some("admin")).await;
    assert_eq!(registered["role"], "admin");

    let logged_in = login(&app, &username, "pw").await;
    assert_eq!(logged_in["role"], "admin");
    Ok(())
}

#[actix_web::test]
async fn duplicate_username_conflicts() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await;
    let username = unique_username("dup");
    register(&app, &username, "first", None).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "username": username, "password": "second" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 409, "USERNAME_TAKEN").await;
    Ok(())
}

#[actix_web::test]
async fn register_rejects_blank_username_and_unknown_role() -> Result<(), Box<dyn std::error::Error>>
{
    let app = create_test_app(test_state().await).build().await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "username": "   ", "password": "pw" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 400, "VALIDATION_ERROR").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "username": unique_username("x"), "password": "pw", "role": "owner" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 400, "BAD_REQUEST").await;
    Ok(())
}

#[actix_web::test]
async fn login_failures_are_distinguished() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await;
    let username = unique_username("bob");
    register(&app, &username, "correct", None).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "username": username, "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 401, "INVALID_CREDENTIALS").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "username": unique_username("ghost"), "password": "whatever" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 404, "USER_NOT_FOUND").await;
    Ok(())
}
