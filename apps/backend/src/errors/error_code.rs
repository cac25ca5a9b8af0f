//! Error codes for the Postboard API.
//!
//! Every code that can appear in a problem-details body is listed here.
//! Add new codes here; never pass ad-hoc strings as error codes.

use core::fmt;

/// Centralized error codes. Each variant maps to the SCREAMING_SNAKE_CASE
/// string that appears in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Token failed structural or signature checks
    UnauthorizedInvalidJwt,
    /// Token expired
    UnauthorizedExpiredJwt,
    /// Token subject no longer maps to a stored user
    PrincipalNotFound,
    /// Username/password pair rejected at login
    InvalidCredentials,
    /// Access denied
    Forbidden,
    /// Role claim does not grant this operation
    InsufficientRole,
    /// Caller does not own the resource
    NotOwner,

    // Request Validation
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,
    /// Page number or size out of range
    InvalidPagination,
    /// Vote action other than vote/unvote
    InvalidVoteAction,
    /// Vote on a post the user already voted for
    AlreadyVoted,
    /// Unvote on a post the user has not voted for
    NotVoted,

    // Resource Not Found
    UserNotFound,
    PostNotFound,
    CommentNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Username already registered
    UsernameTaken,
    /// Foreign key constraint violation
    FkViolation,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    /// Stored data failed an integrity check (malformed hash, unknown role)
    IntegrityFailure,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            Self::PrincipalNotFound => "PRINCIPAL_NOT_FOUND",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Forbidden => "FORBIDDEN",
            Self::InsufficientRole => "INSUFFICIENT_ROLE",
            Self::NotOwner => "NOT_OWNER",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidPagination => "INVALID_PAGINATION",
            Self::InvalidVoteAction => "INVALID_VOTE_ACTION",
            Self::AlreadyVoted => "ALREADY_VOTED",
            Self::NotVoted => "NOT_VOTED",

            Self::UserNotFound => "USER_NOT_FOUND",
            Self::PostNotFound => "POST_NOT_FOUND",
            Self::CommentNotFound => "COMMENT_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::FkViolation => "FK_VIOLATION",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::IntegrityFailure => "INTEGRITY_FAILURE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
