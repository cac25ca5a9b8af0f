//! Storage-facing error type for repositories and services.
//!
//! Carries no HTTP knowledge; `From<DomainError> for AppError` in
//! `crate::error` decides status codes.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    /// Stored row failed a domain invariant (e.g. unknown role string)
    DataCorruption,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    User,
    Post,
    Comment,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    UniqueUsername,
    /// Second vote by the same user on the same post
    DuplicateVote,
    ForeignKey,
    Other(String),
}

impl fmt::Display for InfraErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfraErrorKind::Timeout => f.write_str("timeout"),
            InfraErrorKind::DbUnavailable => f.write_str("database unavailable"),
            InfraErrorKind::DataCorruption => f.write_str("data corruption"),
            InfraErrorKind::Other(what) => write!(f, "{what}"),
        }
    }
}

impl fmt::Display for NotFoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundKind::User => f.write_str("user"),
            NotFoundKind::Post => f.write_str("post"),
            NotFoundKind::Comment => f.write_str("comment"),
            NotFoundKind::Other(what) => write!(f, "{what}"),
        }
    }
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictKind::UniqueUsername => f.write_str("username taken"),
            ConflictKind::DuplicateVote => f.write_str("duplicate vote"),
            ConflictKind::ForeignKey => f.write_str("foreign key"),
            ConflictKind::Other(what) => write!(f, "{what}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict ({0}): {1}")]
    Conflict(ConflictKind, String),
    #[error("{0} not found: {1}")]
    NotFound(NotFoundKind, String),
    #[error("infra failure ({0}): {1}")]
    Infra(InfraErrorKind, String),
}

impl DomainError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }

    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}
