use actix_web::test;
use backend_test_support::unique_helpers::unique_username;
use serde_json::{json, Value};

use crate::common::assert_problem;
use crate::support::auth::bearer_header;
use crate::support::factory::{create_post, seed_user};
use crate::support::{create_test_app, test_state};

#[actix_web::test]
async fn vote_unvote_and_comprehensive_view() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await;
    let alice = seed_user(&app, &unique_username("alice"), None).await;
    let bob = seed_user(&app, &unique_username("bob"), None).await;
    let post = create_post(&app, &alice.token, "Vote me", "please").await;
    let post_id = post["id"].as_i64().unwrap();

    let vote = |token: String, action: &'static str| {
        test::TestRequest::post()
            .uri("/api/v1/posts/vote")
            .insert_header(bearer_header(&token))
            .set_json(json!({ "post_id": post_id, "action": action }))
            .to_request()
    };

    let resp = test::call_service(&app, vote(bob.token.clone(), "vote")).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["post_id"], post_id);
    assert_eq!(body["user_id"], bob.id);
    assert_eq!(body["message"], "voted successfully");

    let resp = test::call_service(&app, vote(bob.token.clone(), "vote")).await;
    assert_problem(resp, 400, "ALREADY_VOTED").await;

    let resp = test::call_service(&app, vote(alice.token.clone(), "vote")).await;
    assert_eq!(resp.status().as_u16(), 200);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/posts/{post_id}/comments"))
        .insert_header(bearer_header(&bob.token))
        .set_json(json!({ "content": "voted!" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 201);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/posts/{post_id}/comprehensive"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let full: Value = test::read_body_json(resp).await;
    assert_eq!(full["id"], post_id);
    assert_eq!(full["votes_count"], 2);
    assert_eq!(full["comments"].as_array().map(Vec::len), Some(1));

    let resp = test::call_service(&app, vote(bob.token.clone(), "unvote")).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "unvoted successfully");

    let resp = test::call_service(&app, vote(bob.token.clone(), "unvote")).await;
    assert_problem(resp, 400, "NOT_VOTED").await;
    Ok(())
}

#[actix_web::test]
async fn bad_vote_requests() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await;
    let alice = seed_user(&app, &unique_username("alice"), None).await;
    let post = create_post(&app, &alice.token, "p", "c").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/posts/vote")
        .insert_header(bearer_header(&alice.token))
        .set_json(json!({ "post_id": post["id"], "action": "downvote" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 400, "INVALID_VOTE_ACTION").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/posts/vote")
        .insert_header(bearer_header(&alice.token))
        .set_json(json!({ "post_id": 98765, "action": "vote" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 404, "POST_NOT_FOUND").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/posts/vote")
        .set_json(json!({ "post_id": post["id"], "action": "vote" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, 401, "UNAUTHORIZED_MISSING_BEARER").await;
    Ok(())
}
