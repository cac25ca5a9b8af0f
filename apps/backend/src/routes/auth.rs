use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::auth::Role;
use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::{AdminClaims, CurrentUser, PageParams};
use crate::repos::users::User;
use crate::services::users as user_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub role: Role,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    #[serde(flatten)]
    pub user: UserResponse,
}

async fn register(
    body: web::Json<RegisterRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let RegisterRequest {
        username,
        password,
        role,
    } = body.into_inner();

    let user = user_service::register(
        db,
        &app_state.security,
        &username,
        &password,
        role.unwrap_or_default(),
    )
    .await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

async fn login(
    body: web::Json<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let outcome = user_service::login(
        db,
        &app_state.security,
        &body.username,
        &body.password,
        SystemTime::now(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        access_token: outcome.access_token,
        token_type: "Bearer",
        user: outcome.user.into(),
    }))
}

async fn me(current: CurrentUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(UserResponse::from(current.user)))
}

async fn list_users(
    _admin: AdminClaims,
    page: PageParams,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let users = user_service::list_users(db, page.page, page.size).await?;
    Ok(HttpResponse::Ok().json(users.map(UserResponse::from)))
}

async fn get_user(
    _current: CurrentUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let user = user_service::get_user(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

async fn delete_user(
    _admin: AdminClaims,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    user_service::delete_user(db, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register))
        .route("/login", web::post().to(login))
        .route("/me", web::get().to(me))
        .route("/users", web::get().to(list_users))
        .service(
            web::resource("/users/{user_id}")
                .route(web::get().to(get_user))
                .route(web::delete().to(delete_user)),
        );
}
