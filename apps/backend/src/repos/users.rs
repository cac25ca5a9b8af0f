//! User repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::users_sea as users_adapter;
use crate::auth::Role;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// User domain model. Never carries the password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub created_at: OffsetDateTime,
}

/// A user together with their stored password hash, for login only.
#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
    pub user: User,
    pub password_hash: String,
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
    password_hash: &str,
    role: Role,
) -> Result<User, DomainError> {
    let dto = users_adapter::UserCreate::new(username, password_hash, role.as_str());
    let user = users_adapter::create_user(conn, dto).await?;
    User::try_from(user)
}

pub async fn find_user_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_user_by_username(conn, username).await?;
    user.map(User::try_from).transpose()
}

pub async fn find_credential_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Option<Credential>, DomainError> {
    let Some(model) = users_adapter::find_user_by_username(conn, username).await? else {
        return Ok(None);
    };
    let password_hash = model.password_hash.clone();
    Ok(Some(Credential {
        user: User::try_from(model)?,
        password_hash,
    }))
}

pub async fn find_user_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_user_by_id(conn, user_id).await?;
    user.map(User::try_from).transpose()
}

pub async fn count_users<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(users_adapter::count_users(conn).await?)
}

pub async fn list_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<Vec<User>, DomainError> {
    users_adapter::list_users(conn, offset, limit)
        .await?
        .into_iter()
        .map(User::try_from)
        .collect()
}

/// Returns whether a row was removed.
pub async fn delete_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<bool, DomainError> {
    Ok(users_adapter::delete_user(conn, user_id).await? > 0)
}

// Conversions between SeaORM models and domain models

impl TryFrom<crate::entities::users::Model> for User {
    type Error = DomainError;

    fn try_from(model: crate::entities::users::Model) -> Result<Self, Self::Error> {
        let role = model.role.parse::<Role>().map_err(|e| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("user {} has {e}", model.id),
            )
        })?;
        Ok(Self {
            id: model.id,
            username: model.username,
            role,
            created_at: model.created_at,
        })
    }
}
