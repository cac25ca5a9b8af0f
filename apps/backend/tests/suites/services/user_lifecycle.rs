//! Service-level flows that bypass HTTP.

use std::time::SystemTime;

use backend_test_support::unique_helpers::unique_username;
use postboard::auth::{decode_access_token, resolve_current_principal, AuthError, Role};
use postboard::db::require_db;
use postboard::errors::ErrorCode;
use postboard::services::{posts, users};

use crate::support::test_state;

#[tokio::test]
async fn login_token_resolves_to_the_registered_user() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await;
    let db = require_db(&state)?;
    let username = unique_username("alice");

    let user = users::register(db, &state.security, &username, "pw", Role::Regular).await?;
    let outcome = users::login(db, &state.security, &username, "pw", SystemTime::now()).await?;

    let claims = decode_access_token(&outcome.access_token, &state.security)?;
    assert_eq!(claims.sub, username);
    assert_eq!(claims.role, Role::Regular);
    assert_eq!(
        (claims.exp - claims.iat) as u64,
        state.security.access_token_ttl.as_secs()
    );

    let principal = resolve_current_principal(&outcome.access_token, db, &state.security).await?;
    assert_eq!(principal.id, user.id);
    assert_eq!(principal.username, user.username);
    Ok(())
}

#[tokio::test]
async fn deleting_a_user_cascades_and_orphans_the_token() -> Result<(), Box<dyn std::error::Error>>
{
    let state = test_state().await;
    let db = require_db(&state)?;
    let username = unique_username("bob");

    let user = users::register(db, &state.security, &username, "pw", Role::Regular).await?;
    let token = users::login(db, &state.security, &username, "pw", SystemTime::now())
        .await?
        .access_token;
    let post = posts::create_post(db, &user, "title", "body").await?;

    users::delete_user(db, user.id).await?;

    let err = posts::get_post_detail(db, post.id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::PostNotFound);

    let err = resolve_current_principal(&token, db, &state.security)
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::PrincipalNotFound { .. }));
    Ok(())
}

#[tokio::test]
async fn listing_validates_before_counting() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await;
    let db = require_db(&state)?;

    let err = users::list_users(db, 0, 10).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidPagination);

    let page = users::list_users(db, 1, 10).await?;
    assert_eq!(page.meta.total_results, 0);
    assert_eq!(page.meta.total_pages, 0);
    assert!(page.data.is_empty());
    Ok(())
}
