use thiserror::Error;
use tracing::{debug, error, warn};

use super::role::Role;
use crate::error::AppError;
use crate::errors::{DomainError, ErrorCode};
use crate::logging::pii::Redacted;

/// Why a presented bearer token was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRejection {
    /// No `Authorization: Bearer` header
    Missing,
    /// Not a decodable token, or signed with an unexpected algorithm
    Malformed,
    BadSignature,
    Expired,
}

impl TokenRejection {
    fn code(self) -> ErrorCode {
        match self {
            TokenRejection::Missing => ErrorCode::UnauthorizedMissingBearer,
            TokenRejection::Malformed | TokenRejection::BadSignature => {
                ErrorCode::UnauthorizedInvalidJwt
            }
            TokenRejection::Expired => ErrorCode::UnauthorizedExpiredJwt,
        }
    }

    fn detail(self) -> &'static str {
        match self {
            TokenRejection::Missing => "Missing bearer token",
            TokenRejection::Malformed => "Invalid token",
            TokenRejection::BadSignature => "Invalid token signature",
            TokenRejection::Expired => "Token expired",
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    /// 401: the caller has not proven who they are.
    #[error("authentication required: {0:?}")]
    AuthenticationRequired(TokenRejection),
    /// 403: the caller is known but lacks the role.
    #[error("role {required} required, token carries {actual}")]
    AuthorizationDenied { required: Role, actual: Role },
    /// Token is valid but names a user that no longer exists.
    #[error("principal '{username}' not found")]
    PrincipalNotFound { username: String },
    /// Stored hash or signed claims are not in a shape we produced.
    #[error("integrity failure: {0}")]
    IntegrityFailure(String),
    #[error("password hashing failed: {0}")]
    Hashing(String),
    #[error(transparent)]
    Store(#[from] DomainError),
}

impl AuthError {
    pub fn rejected(reason: TokenRejection) -> Self {
        AuthError::AuthenticationRequired(reason)
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::AuthenticationRequired(reason) => {
                debug!(reason = ?reason, "bearer token rejected");
                AppError::unauthorized(reason.code(), reason.detail())
            }
            AuthError::AuthorizationDenied { required, actual } => {
                debug!(%required, %actual, "role check failed");
                AppError::forbidden(
                    ErrorCode::InsufficientRole,
                    format!("{required} role required"),
                )
            }
            AuthError::PrincipalNotFound { username } => {
                warn!(username = %Redacted(&username), "token subject has no matching user");
                AppError::unauthorized(ErrorCode::PrincipalNotFound, "User no longer exists")
            }
            AuthError::IntegrityFailure(detail) => {
                error!(detail = %detail, "credential integrity failure");
                AppError::internal(ErrorCode::IntegrityFailure, detail)
            }
            AuthError::Hashing(detail) => {
                error!(detail = %detail, "password hashing failed");
                AppError::internal(ErrorCode::Internal, detail)
            }
            AuthError::Store(err) => AppError::from(err),
        }
    }
}
