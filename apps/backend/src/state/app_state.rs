use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::config::pagination::PaginationConfig;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    db: Option<DatabaseConnection>,
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
    pub pagination: PaginationConfig,
    pub app_version: &'static str,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        security: SecurityConfig,
        pagination: PaginationConfig,
    ) -> Self {
        Self {
            db: Some(db),
            security,
            pagination,
            app_version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// State without a database, for exercising routes that never reach storage.
    pub fn without_db(security: SecurityConfig, pagination: PaginationConfig) -> Self {
        Self {
            db: None,
            security,
            pagination,
            app_version: env!("CARGO_PKG_VERSION"),
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
