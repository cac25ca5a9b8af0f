use actix_web::web;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod auth;
pub mod health;
pub mod posts;

/// Register every route plus the body/query/path error handlers.
///
/// `main.rs` adds the tracing and logging middleware around this; tests can
/// call it directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::bad_request(ErrorCode::BadRequest, format!("Invalid JSON body: {err}")).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::bad_request(ErrorCode::BadRequest, format!("Invalid query: {err}")).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::bad_request(ErrorCode::BadRequest, format!("Invalid path: {err}")).into()
    }));

    // Health check: /health
    cfg.configure(health::configure_routes);

    // Auth and user administration: /api/v1/auth/**
    cfg.service(web::scope("/api/v1/auth").configure(auth::configure_routes));

    // Posts, comments and votes: /api/v1/posts/**
    cfg.service(web::scope("/api/v1/posts").configure(posts::configure_routes));
}
