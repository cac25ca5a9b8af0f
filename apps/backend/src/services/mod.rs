//! Use cases behind the HTTP routes. Services take a connection and return `AppError`.

pub mod comments;
pub mod posts;
pub mod users;
pub mod votes;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Reject blank input and input longer than the column allows.
pub(crate) fn require_text(
    field: &str,
    value: &str,
    max_chars: Option<usize>,
) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::bad_request(
            ErrorCode::ValidationError,
            format!("{field} must not be empty"),
        ));
    }
    if let Some(max) = max_chars {
        if value.chars().count() > max {
            return Err(AppError::bad_request(
                ErrorCode::ValidationError,
                format!("{field} must be at most {max} characters"),
            ));
        }
    }
    Ok(())
}
