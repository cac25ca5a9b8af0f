use std::time::SystemTime;

use sea_orm::ConnectionTrait;
use tracing::{info, warn};

use super::require_text;
use crate::auth::{
    create_access_token, hash_password, verify_password, AccessClaims, AuthError, Role,
};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::pagination::{check_request, paginate, Paginated};
use crate::repos::users::{self, User};
use crate::state::security_config::SecurityConfig;

const USERNAME_MAX_CHARS: usize = 50;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub access_token: String,
    pub user: User,
}

/// Argon2 is deliberately slow; keep it off the async workers.
async fn run_blocking<T, F>(f: F) -> Result<T, AuthError>
where
    F: FnOnce() -> Result<T, AuthError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AuthError::Hashing(format!("hashing task failed: {e}")))?
}

pub async fn register<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    security: &SecurityConfig,
    username: &str,
    password: &str,
    role: Role,
) -> Result<User, AppError> {
    require_text("username", username, Some(USERNAME_MAX_CHARS))?;
    if password.is_empty() {
        return Err(AppError::bad_request(
            ErrorCode::ValidationError,
            "password must not be empty",
        ));
    }

    if users::find_user_by_username(conn, username).await?.is_some() {
        return Err(AppError::conflict(
            ErrorCode::UsernameTaken,
            "Username already taken",
        ));
    }

    let plaintext = password.to_string();
    let params = security.password_hashing;
    let password_hash = run_blocking(move || hash_password(&plaintext, &params)).await?;

    // A concurrent registration can still win the race; the unique index reports it.
    let user = users::create_user(conn, username, &password_hash, role).await?;
    info!(user_id = user.id, role = %user.role, "user registered");
    Ok(user)
}

/// Verify credentials and issue a token stamped with the user's current role.
pub async fn login<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    security: &SecurityConfig,
    username: &str,
    password: &str,
    now: SystemTime,
) -> Result<LoginOutcome, AppError> {
    let Some(credential) = users::find_credential_by_username(conn, username).await? else {
        return Err(AppError::not_found(ErrorCode::UserNotFound, "User not found"));
    };

    let plaintext = password.to_string();
    let stored = credential.password_hash;
    let matches = run_blocking(move || verify_password(&plaintext, &stored)).await?;
    if !matches {
        warn!(username = %Redacted(username), "login rejected: wrong password");
        return Err(AppError::unauthorized(
            ErrorCode::InvalidCredentials,
            "Authentication failed",
        ));
    }

    let user = credential.user;
    let access_token = create_access_token(
        AccessClaims {
            sub: user.username.clone(),
            role: user.role,
        },
        now,
        security,
    )?;
    info!(user_id = user.id, "login succeeded");

    Ok(LoginOutcome { access_token, user })
}

pub async fn list_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    page: u64,
    size: u64,
) -> Result<Paginated<User>, AppError> {
    check_request(page, size)?;
    let total = users::count_users(conn).await?;
    let window = paginate(total, page, size)?;
    let data = match window.fetch_bounds() {
        Some((offset, limit)) => users::list_users(conn, offset, limit).await?,
        None => Vec::new(),
    };
    Ok(Paginated::new(data, window.meta))
}

pub async fn get_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<User, AppError> {
    users::find_user_by_id(conn, user_id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::UserNotFound, "User not found"))
}

/// Posts, comments and votes go with the user through cascading foreign keys.
pub async fn delete_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<(), AppError> {
    if !users::delete_user(conn, user_id).await? {
        return Err(AppError::not_found(ErrorCode::UserNotFound, "User not found"));
    }
    info!(user_id, "user deleted");
    Ok(())
}
