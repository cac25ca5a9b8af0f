use std::env;

/// Database profile for different environments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbProfile {
    /// Database named by `DATABASE_URL`
    Prod,
    /// Private in-memory SQLite database
    Test,
}

/// SQLite file used when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://postboard.sqlite3?mode=rwc";

pub const MEMORY_DATABASE_URL: &str = "sqlite::memory:";

/// Resolve the connection URL for a profile.
pub fn db_url(profile: &DbProfile) -> String {
    match profile {
        DbProfile::Prod => {
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
        }
        DbProfile::Test => MEMORY_DATABASE_URL.to_string(),
    }
}

/// In-memory SQLite lives inside a single connection, so the pool must not
/// open a second one.
pub fn is_memory_url(url: &str) -> bool {
    url.starts_with("sqlite::memory:") || url.contains("mode=memory")
}
