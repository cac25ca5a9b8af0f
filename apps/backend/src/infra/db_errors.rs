//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it here so higher layers
//! only ever see `DomainError`.

use sea_orm::{DbErr, SqlErr};
use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Map a unique violation message to the constraint it names.
///
/// SQLite reports `UNIQUE constraint failed: table.column[, table.column]`,
/// Postgres reports the index name.
fn unique_conflict(msg: &str) -> (ConflictKind, &'static str) {
    if msg.contains("users.username") || msg.contains("ux_users_username") {
        return (ConflictKind::UniqueUsername, "Username already taken");
    }
    if msg.contains("votes.post_id") || msg.contains("ux_votes_post_user") {
        return (ConflictKind::DuplicateVote, "Post already voted by this user");
    }
    (
        ConflictKind::Other("Unique".into()),
        "Unique constraint violation",
    )
}

/// Translate a `DbErr` into a `DomainError` with sanitized, PII-safe detail.
pub fn map_db_err(e: DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&detail), "Unique constraint violation");
            let (kind, msg) = unique_conflict(&detail);
            return DomainError::conflict(kind, msg);
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&detail), "Foreign key constraint violation");
            return DomainError::conflict(
                ConflictKind::ForeignKey,
                "Referenced record does not exist",
            );
        }
        _ => {}
    }

    // Drivers that don't surface a structured code still put it in the message.
    if mentions_sqlstate(&error_msg, "23505") || error_msg.contains("UNIQUE constraint failed") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unique constraint violation");
        let (kind, msg) = unique_conflict(&error_msg);
        return DomainError::conflict(kind, msg);
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Foreign key constraint violation");
        return DomainError::conflict(ConflictKind::ForeignKey, "Referenced record does not exist");
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        map_db_err(e)
    }
}
