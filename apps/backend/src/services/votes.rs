use std::str::FromStr;

use sea_orm::ConnectionTrait;
use tracing::debug;

use super::posts::require_post;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::errors::ErrorCode;
use crate::repos::users::User;
use crate::repos::votes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteAction {
    Vote,
    Unvote,
}

impl FromStr for VoteAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vote" => Ok(VoteAction::Vote),
            "unvote" => Ok(VoteAction::Unvote),
            _ => Err(AppError::bad_request(
                ErrorCode::InvalidVoteAction,
                "Invalid action. Use 'vote' or 'unvote'.",
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteOutcome {
    pub post_id: i64,
    pub user_id: i64,
    pub message: &'static str,
}

fn already_voted() -> AppError {
    AppError::bad_request(
        ErrorCode::AlreadyVoted,
        "You have already voted for this post",
    )
}

/// Apply a vote or unvote. Each user holds at most one vote per post.
pub async fn cast<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    voter: &User,
    post_id: i64,
    action: VoteAction,
) -> Result<VoteOutcome, AppError> {
    require_post(conn, post_id).await?;
    let existing = votes::has_voted(conn, post_id, voter.id).await?;

    let message = match action {
        VoteAction::Vote => {
            if existing {
                return Err(already_voted());
            }
            match votes::add_vote(conn, post_id, voter.id).await {
                Ok(()) => {}
                Err(DomainError::Conflict(ConflictKind::DuplicateVote, _)) => {
                    return Err(already_voted())
                }
                Err(e) => return Err(e.into()),
            }
            "voted successfully"
        }
        VoteAction::Unvote => {
            if !existing || !votes::remove_vote(conn, post_id, voter.id).await? {
                return Err(AppError::bad_request(
                    ErrorCode::NotVoted,
                    "You haven't voted for this post",
                ));
            }
            "unvoted successfully"
        }
    };

    debug!(post_id, user_id = voter.id, action = ?action, "vote applied");
    Ok(VoteOutcome {
        post_id,
        user_id: voter.id,
        message,
    })
}
