//! Post repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::posts_sea as posts_adapter;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

pub async fn create_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    author_id: i64,
    title: &str,
    content: &str,
) -> Result<Post, DomainError> {
    let post =
        posts_adapter::create_post(conn, posts_adapter::PostCreate::new(author_id, title, content))
            .await?;
    Ok(Post::from(post))
}

pub async fn find_post_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<Option<Post>, DomainError> {
    let post = posts_adapter::find_post_by_id(conn, post_id).await?;
    Ok(post.map(Post::from))
}

pub async fn count_posts<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(posts_adapter::count_posts(conn).await?)
}

pub async fn list_posts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<Vec<Post>, DomainError> {
    let posts = posts_adapter::list_posts(conn, offset, limit).await?;
    Ok(posts.into_iter().map(Post::from).collect())
}

pub async fn update_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
    title: &str,
    content: &str,
) -> Result<Post, DomainError> {
    let post = posts_adapter::update_post(
        conn,
        posts_adapter::PostUpdate {
            id: post_id,
            title: title.to_string(),
            content: content.to_string(),
        },
    )
    .await?;
    Ok(Post::from(post))
}

pub async fn delete_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<bool, DomainError> {
    Ok(posts_adapter::delete_post(conn, post_id).await? > 0)
}

impl From<crate::entities::posts::Model> for Post {
    fn from(model: crate::entities::posts::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            author_id: model.author_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
