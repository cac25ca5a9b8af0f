//! Vote repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::votes_sea as votes_adapter;
use crate::errors::domain::DomainError;

pub async fn has_voted<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
    user_id: i64,
) -> Result<bool, DomainError> {
    Ok(votes_adapter::find_vote(conn, post_id, user_id)
        .await?
        .is_some())
}

/// The unique (post, user) index turns a racing second vote into `ConflictKind::DuplicateVote`.
pub async fn add_vote<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
    user_id: i64,
) -> Result<(), DomainError> {
    votes_adapter::create_vote(conn, post_id, user_id).await?;
    Ok(())
}

/// Returns whether a vote was removed.
pub async fn remove_vote<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
    user_id: i64,
) -> Result<bool, DomainError> {
    Ok(votes_adapter::delete_vote(conn, post_id, user_id).await? > 0)
}

pub async fn count_votes_for_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<u64, DomainError> {
    Ok(votes_adapter::count_votes_for_post(conn, post_id).await?)
}
