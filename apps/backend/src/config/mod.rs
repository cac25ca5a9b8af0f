//! Environment-driven configuration, read once at process start.

pub mod db;
pub mod pagination;

use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Get a required environment variable or return a configuration error.
pub fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}

/// Parse an optional environment variable, falling back to `default` when unset.
pub fn var_or<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|e| {
            AppError::config(format!("Environment variable '{name}' has invalid value '{raw}': {e}"))
        }),
        Err(_) => Ok(default),
    }
}
