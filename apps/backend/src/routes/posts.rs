use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::{CurrentUser, PageParams};
use crate::repos::comments::Comment;
use crate::repos::posts::Post;
use crate::services::posts::{PostComprehensive, PostDetail};
use crate::services::votes::VoteAction;
use crate::services::{comments as comment_service, posts as post_service, votes as vote_service};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct PostBody {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentBody {
    pub content: String,
}

/// `action` stays a string so an unknown verb is a domain error, not a JSON error.
#[derive(Debug, Deserialize)]
pub struct VoteBody {
    pub post_id: i64,
    pub action: String,
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author_id: post.author_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub author_username: String,
}

impl From<PostDetail> for PostDetailResponse {
    fn from(detail: PostDetail) -> Self {
        Self {
            post: detail.post.into(),
            author_username: detail.author_username,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub post_id: i64,
    pub author_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            post_id: comment.post_id,
            author_id: comment.author_id,
            created_at: comment.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostComprehensiveResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub votes_count: u64,
    pub comments: Vec<CommentResponse>,
}

impl From<PostComprehensive> for PostComprehensiveResponse {
    fn from(full: PostComprehensive) -> Self {
        Self {
            post: full.post.into(),
            votes_count: full.votes_count,
            comments: full.comments.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub post_id: i64,
    pub user_id: i64,
    pub message: &'static str,
}

async fn create_post(
    current: CurrentUser,
    body: web::Json<PostBody>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let post = post_service::create_post(db, &current.user, &body.title, &body.content).await?;
    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

async fn list_posts(
    page: PageParams,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let posts = post_service::list_posts(db, page.page, page.size).await?;
    Ok(HttpResponse::Ok().json(posts.map(PostResponse::from)))
}

async fn get_post(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let detail = post_service::get_post_detail(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PostDetailResponse::from(detail)))
}

async fn update_post(
    current: CurrentUser,
    path: web::Path<i64>,
    body: web::Json<PostBody>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let post = post_service::update_post(
        db,
        &current.user,
        path.into_inner(),
        &body.title,
        &body.content,
    )
    .await?;
    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

async fn delete_post(
    current: CurrentUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    post_service::delete_post(db, &current.user, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn add_comment(
    current: CurrentUser,
    path: web::Path<i64>,
    body: web::Json<CommentBody>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let comment =
        comment_service::add_comment(db, &current.user, path.into_inner(), &body.content).await?;
    Ok(HttpResponse::Created().json(CommentResponse::from(comment)))
}

async fn list_comments(
    path: web::Path<i64>,
    page: PageParams,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let comments =
        comment_service::list_comments(db, path.into_inner(), page.page, page.size).await?;
    Ok(HttpResponse::Ok().json(comments.map(CommentResponse::from)))
}

async fn update_comment(
    current: CurrentUser,
    path: web::Path<i64>,
    body: web::Json<CommentBody>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let comment =
        comment_service::update_comment(db, &current.user, path.into_inner(), &body.content)
            .await?;
    Ok(HttpResponse::Ok().json(CommentResponse::from(comment)))
}

async fn delete_comment(
    current: CurrentUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    comment_service::delete_comment(db, &current.user, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn vote(
    current: CurrentUser,
    body: web::Json<VoteBody>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let action: VoteAction = body.action.parse()?;
    let db = require_db(&app_state)?;
    let outcome = vote_service::cast(db, &current.user, body.post_id, action).await?;
    Ok(HttpResponse::Ok().json(VoteResponse {
        post_id: outcome.post_id,
        user_id: outcome.user_id,
        message: outcome.message,
    }))
}

async fn comprehensive(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let full = post_service::get_comprehensive(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PostComprehensiveResponse::from(full)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Literal segments first so they are not captured by "/{post_id}".
    cfg.service(
        web::resource("")
            .route(web::get().to(list_posts))
            .route(web::post().to(create_post)),
    )
    .route("/vote", web::post().to(vote))
    .service(
        web::resource("/comments/{comment_id}")
            .route(web::put().to(update_comment))
            .route(web::delete().to(delete_comment)),
    )
    .service(
        web::resource("/{post_id}")
            .route(web::get().to(get_post))
            .route(web::put().to(update_post))
            .route(web::delete().to(delete_post)),
    )
    .service(
        web::resource("/{post_id}/comments")
            .route(web::get().to(list_comments))
            .route(web::post().to(add_comment)),
    )
    .route("/{post_id}/comprehensive", web::get().to(comprehensive));
}
