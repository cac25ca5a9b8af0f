use actix_web::test;
use backend_test_support::unique_helpers::unique_username;
use postboard::auth::Role;
use serde_json::Value;

use crate::common::assert_problem;
use crate::support::auth::{bearer_header, mint_test_token};
use crate::support::factory::seed_user;
use crate::support::{create_test_app, test_state};

#[actix_web::test]
async fn regular_user_cannot_list_users() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await;
    let user = seed_user(&app, &unique_username("reg"), None).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/users")
        .insert_header(bearer_header(&user.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 403, "INSUFFICIENT_ROLE").await;
    Ok(())
}

#[actix_web::test]
async fn admin_lists_users_with_page_metadata() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await;
    let admin = seed_user(&app, &unique_username("admin"), Some("admin")).await;
    for i in 0..4 {
        seed_user(&app, &unique_username(&format!("member{i}")), None).await;
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/users?page=2&size=2")
        .insert_header(bearer_header(&admin.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["total_results"], 5);
    assert_eq!(body["total_pages"], 3);
    assert_eq!(body["current_page"], 2);
    assert_eq!(body["current_result"], 2);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
    assert!(body["data"][0].get("password_hash").is_none());
    Ok(())
}

#[actix_web::test]
async fn admin_role_is_read_from_the_token() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await;
    let security = state.security.clone();
    let app = create_test_app(state).build().await;

    // No stored user needed: the admin gate only inspects the claims.
    let token = mint_test_token("ops", Role::Admin, &security);
    let req = test::TestRequest::get()
        .uri("/api/v1/auth/users")
        .insert_header(bearer_header(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    Ok(())
}

#[actix_web::test]
async fn deleted_user_token_stops_resolving() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await;
    let admin = seed_user(&app, &unique_username("admin"), Some("admin")).await;
    let victim = seed_user(&app, &unique_username("victim"), None).await;

    // Regular users cannot delete.
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/auth/users/{}", admin.id))
        .insert_header(bearer_header(&victim.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 403, "INSUFFICIENT_ROLE").await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/auth/users/{}", victim.id))
        .insert_header(bearer_header(&admin.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 204);

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(bearer_header(&victim.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 401, "PRINCIPAL_NOT_FOUND").await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/auth/users/{}", victim.id))
        .insert_header(bearer_header(&admin.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 404, "USER_NOT_FOUND").await;
    Ok(())
}

#[actix_web::test]
async fn get_user_by_id_requires_authentication() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await;
    let user = seed_user(&app, &unique_username("carol"), None).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/auth/users/{}", user.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 401, "UNAUTHORIZED_MISSING_BEARER").await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/auth/users/{}", user.id))
        .insert_header(bearer_header(&user.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["username"], user.username.as_str());

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/users/999999")
        .insert_header(bearer_header(&user.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 404, "USER_NOT_FOUND").await;
    Ok(())
}
