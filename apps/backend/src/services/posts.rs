use sea_orm::ConnectionTrait;
use tracing::info;

use super::require_text;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::pagination::{check_request, paginate, Paginated};
use crate::repos::comments::{self, Comment};
use crate::repos::posts::{self, Post};
use crate::repos::users::{self, User};
use crate::repos::votes;

const TITLE_MAX_CHARS: usize = 100;

/// A post with its author's current username.
#[derive(Debug, Clone)]
pub struct PostDetail {
    pub post: Post,
    pub author_username: String,
}

/// A post with its vote count and every comment, oldest first.
#[derive(Debug, Clone)]
pub struct PostComprehensive {
    pub post: Post,
    pub votes_count: u64,
    pub comments: Vec<Comment>,
}

pub(crate) fn post_not_found(post_id: i64) -> AppError {
    AppError::not_found(ErrorCode::PostNotFound, format!("Post {post_id} not found"))
}

pub(crate) async fn require_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<Post, AppError> {
    posts::find_post_by_id(conn, post_id)
        .await?
        .ok_or_else(|| post_not_found(post_id))
}

fn require_author(post: &Post, actor: &User) -> Result<(), AppError> {
    if post.author_id != actor.id {
        return Err(AppError::forbidden(
            ErrorCode::NotOwner,
            "Only the author can modify this post",
        ));
    }
    Ok(())
}

pub async fn create_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    author: &User,
    title: &str,
    content: &str,
) -> Result<Post, AppError> {
    require_text("title", title, Some(TITLE_MAX_CHARS))?;
    require_text("content", content, None)?;

    let post = posts::create_post(conn, author.id, title, content).await?;
    info!(post_id = post.id, author_id = author.id, "post created");
    Ok(post)
}

pub async fn list_posts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    page: u64,
    size: u64,
) -> Result<Paginated<Post>, AppError> {
    check_request(page, size)?;
    let total = posts::count_posts(conn).await?;
    let window = paginate(total, page, size)?;
    let data = match window.fetch_bounds() {
        Some((offset, limit)) => posts::list_posts(conn, offset, limit).await?,
        None => Vec::new(),
    };
    Ok(Paginated::new(data, window.meta))
}

pub async fn get_post_detail<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<PostDetail, AppError> {
    let post = require_post(conn, post_id).await?;
    // Cascading deletes keep this in step with the post.
    let author = users::find_user_by_id(conn, post.author_id)
        .await?
        .ok_or_else(|| {
            AppError::internal(
                ErrorCode::IntegrityFailure,
                format!("post {post_id} references missing author {}", post.author_id),
            )
        })?;

    Ok(PostDetail {
        post,
        author_username: author.username,
    })
}

pub async fn update_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    actor: &User,
    post_id: i64,
    title: &str,
    content: &str,
) -> Result<Post, AppError> {
    require_text("title", title, Some(TITLE_MAX_CHARS))?;
    require_text("content", content, None)?;

    let post = require_post(conn, post_id).await?;
    require_author(&post, actor)?;

    Ok(posts::update_post(conn, post_id, title, content).await?)
}

pub async fn delete_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    actor: &User,
    post_id: i64,
) -> Result<(), AppError> {
    let post = require_post(conn, post_id).await?;
    require_author(&post, actor)?;

    if !posts::delete_post(conn, post_id).await? {
        return Err(post_not_found(post_id));
    }
    info!(post_id, "post deleted");
    Ok(())
}

pub async fn get_comprehensive<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<PostComprehensive, AppError> {
    let post = require_post(conn, post_id).await?;
    let votes_count = votes::count_votes_for_post(conn, post_id).await?;
    let comments = comments::all_comments_for_post(conn, post_id).await?;

    Ok(PostComprehensive {
        post,
        votes_count,
        comments,
    })
}
