//! Comment repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::comments_sea as comments_adapter;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub post_id: i64,
    pub author_id: i64,
    pub created_at: OffsetDateTime,
}

pub async fn create_comment<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
    author_id: i64,
    content: &str,
) -> Result<Comment, DomainError> {
    let comment =
        comments_adapter::create_comment(conn, post_id, author_id, content.to_string()).await?;
    Ok(Comment::from(comment))
}

pub async fn find_comment_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    comment_id: i64,
) -> Result<Option<Comment>, DomainError> {
    let comment = comments_adapter::find_comment_by_id(conn, comment_id).await?;
    Ok(comment.map(Comment::from))
}

pub async fn count_comments_for_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<u64, DomainError> {
    Ok(comments_adapter::count_comments_for_post(conn, post_id).await?)
}

pub async fn list_comments_for_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
    offset: u64,
    limit: u64,
) -> Result<Vec<Comment>, DomainError> {
    let comments =
        comments_adapter::list_comments_for_post(conn, post_id, Some(offset), Some(limit)).await?;
    Ok(comments.into_iter().map(Comment::from).collect())
}

pub async fn all_comments_for_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<Vec<Comment>, DomainError> {
    let comments = comments_adapter::list_comments_for_post(conn, post_id, None, None).await?;
    Ok(comments.into_iter().map(Comment::from).collect())
}

pub async fn update_comment<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    comment_id: i64,
    content: &str,
) -> Result<Comment, DomainError> {
    let comment = comments_adapter::update_comment(conn, comment_id, content.to_string()).await?;
    Ok(Comment::from(comment))
}

pub async fn delete_comment<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    comment_id: i64,
) -> Result<bool, DomainError> {
    Ok(comments_adapter::delete_comment(conn, comment_id).await? > 0)
}

impl From<crate::entities::comments::Model> for Comment {
    fn from(model: crate::entities::comments::Model) -> Self {
        Self {
            id: model.id,
            content: model.content,
            post_id: model.post_id,
            author_id: model.author_id,
            created_at: model.created_at,
        }
    }
}
