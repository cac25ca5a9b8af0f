use actix_web::test;
use backend_test_support::unique_helpers::unique_username;
use serde_json::{json, Value};

use crate::common::assert_problem;
use crate::support::auth::bearer_header;
use crate::support::factory::{create_post, seed_user};
use crate::support::{create_test_app, test_state};

#[actix_web::test]
async fn create_and_fetch_post_with_author() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await;
    let alice = seed_user(&app, &unique_username("alice"), None).await;

    let created = create_post(&app, &alice.token, "Hello", "First post").await;
    assert_eq!(created["title"], "Hello");
    assert_eq!(created["author_id"], alice.id);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/posts/{}", created["id"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let detail: Value = test::read_body_json(resp).await;
    assert_eq!(detail["content"], "First post");
    assert_eq!(detail["author_username"], alice.username.as_str());
    Ok(())
}

#[actix_web::test]
async fn creating_requires_a_token_and_a_title() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await;
    let alice = seed_user(&app, &unique_username("alice"), None).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/posts")
        .set_json(json!({ "title": "t", "content": "c" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 401, "UNAUTHORIZED_MISSING_BEARER").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/posts")
        .insert_header(bearer_header(&alice.token))
        .set_json(json!({ "title": "", "content": "c" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 400, "VALIDATION_ERROR").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/posts")
        .insert_header(bearer_header(&alice.token))
        .set_json(json!({ "title": "x".repeat(101), "content": "c" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 400, "VALIDATION_ERROR").await;
    Ok(())
}

#[actix_web::test]
async fn only_the_author_may_edit_or_delete() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await;
    let alice = seed_user(&app, &unique_username("alice"), None).await;
    let mallory = seed_user(&app, &unique_username("mallory"), None).await;
    let post = create_post(&app, &alice.token, "Mine", "hands off").await;
    let uri = format!("/api/v1/posts/{}", post["id"]);

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(bearer_header(&mallory.token))
        .set_json(json!({ "title": "Yours", "content": "now" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 403, "NOT_OWNER").await;

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer_header(&mallory.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 403, "NOT_OWNER").await;

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(bearer_header(&alice.token))
        .set_json(json!({ "title": "Edited", "content": "still mine" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["title"], "Edited");
    assert_eq!(updated["id"], post["id"]);

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer_header(&alice.token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 204);

    let req = test::TestRequest::get().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 404, "POST_NOT_FOUND").await;
    Ok(())
}

#[actix_web::test]
async fn listing_pages_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await;
    let alice = seed_user(&app, &unique_username("alice"), None).await;
    let mut ids = Vec::new();
    for i in 0..25 {
        let post = create_post(&app, &alice.token, &format!("post {i}"), "body").await;
        ids.push(post["id"].as_i64().unwrap());
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/posts?page=3&size=10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["current_page"], 3);
    assert_eq!(body["total_pages"], 3);
    assert_eq!(body["total_results"], 25);
    assert_eq!(body["current_result"], 5);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 5);
    // The oldest five land on the last page.
    assert_eq!(data[4]["id"], ids[0]);

    let req = test::TestRequest::get()
        .uri("/api/v1/posts?page=9&size=10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["current_result"], 0);
    assert_eq!(body["total_results"], 25);
    Ok(())
}

#[actix_web::test]
async fn page_far_past_the_end_is_empty() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await;
    let alice = seed_user(&app, &unique_username("alice"), None).await;
    create_post(&app, &alice.token, "one", "body").await;
    create_post(&app, &alice.token, "two", "body").await;

    // offset = (page - 1) * size lands beyond i64::MAX
    let req = test::TestRequest::get()
        .uri("/api/v1/posts?page=1000000000000000000&size=10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["current_page"], 1_000_000_000_000_000_000u64);
    assert_eq!(body["current_result"], 0);
    assert_eq!(body["total_results"], 2);
    assert_eq!(body["total_pages"], 1);
    Ok(())
}

#[actix_web::test]
async fn listing_defaults_and_bad_params() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await;

    let req = test::TestRequest::get().uri("/api/v1/posts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["current_page"], 1);
    assert_eq!(body["total_pages"], 0);
    assert_eq!(body["total_results"], 0);
    assert_eq!(body["data"], json!([]));

    for query in ["page=0", "size=0", "page=abc"] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/posts?{query}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem(resp, 400, "INVALID_PAGINATION").await;
    }
    Ok(())
}

#[actix_web::test]
async fn unknown_and_malformed_post_ids() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await;

    let req = test::TestRequest::get()
        .uri("/api/v1/posts/424242")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 404, "POST_NOT_FOUND").await;

    let req = test::TestRequest::get()
        .uri("/api/v1/posts/not-a-number")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 400, "BAD_REQUEST").await;
    Ok(())
}
