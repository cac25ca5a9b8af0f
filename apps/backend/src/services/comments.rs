use sea_orm::ConnectionTrait;
use tracing::info;

use super::posts::require_post;
use super::require_text;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::pagination::{check_request, paginate, Paginated};
use crate::repos::comments::{self, Comment};
use crate::repos::users::User;

fn comment_not_found(comment_id: i64) -> AppError {
    AppError::not_found(
        ErrorCode::CommentNotFound,
        format!("Comment {comment_id} not found"),
    )
}

async fn require_own_comment<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    actor: &User,
    comment_id: i64,
) -> Result<Comment, AppError> {
    let comment = comments::find_comment_by_id(conn, comment_id)
        .await?
        .ok_or_else(|| comment_not_found(comment_id))?;
    if comment.author_id != actor.id {
        return Err(AppError::forbidden(
            ErrorCode::NotOwner,
            "Only the author can modify this comment",
        ));
    }
    Ok(comment)
}

pub async fn add_comment<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    author: &User,
    post_id: i64,
    content: &str,
) -> Result<Comment, AppError> {
    require_text("content", content, None)?;
    require_post(conn, post_id).await?;

    let comment = comments::create_comment(conn, post_id, author.id, content).await?;
    info!(comment_id = comment.id, post_id, "comment added");
    Ok(comment)
}

pub async fn list_comments<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
    page: u64,
    size: u64,
) -> Result<Paginated<Comment>, AppError> {
    check_request(page, size)?;
    require_post(conn, post_id).await?;

    let total = comments::count_comments_for_post(conn, post_id).await?;
    let window = paginate(total, page, size)?;
    let data = match window.fetch_bounds() {
        Some((offset, limit)) => comments::list_comments_for_post(conn, post_id, offset, limit).await?,
        None => Vec::new(),
    };
    Ok(Paginated::new(data, window.meta))
}

pub async fn update_comment<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    actor: &User,
    comment_id: i64,
    content: &str,
) -> Result<Comment, AppError> {
    require_text("content", content, None)?;
    require_own_comment(conn, actor, comment_id).await?;

    Ok(comments::update_comment(conn, comment_id, content).await?)
}

pub async fn delete_comment<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    actor: &User,
    comment_id: i64,
) -> Result<(), AppError> {
    require_own_comment(conn, actor, comment_id).await?;

    if !comments::delete_comment(conn, comment_id).await? {
        return Err(comment_not_found(comment_id));
    }
    info!(comment_id, "comment deleted");
    Ok(())
}
