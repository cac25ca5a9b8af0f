use tracing::info;

use crate::config::db::DbProfile;
use crate::config::pagination::PaginationConfig;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Assembles an `AppState`. Defaults suit tests: throwaway signing key,
/// fast hashing, no database.
pub struct StateBuilder {
    security_config: SecurityConfig,
    pagination: PaginationConfig,
    db_profile: Option<DbProfile>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::for_tests(),
            pagination: PaginationConfig::default(),
            db_profile: None,
        }
    }

    /// Production wiring: security and page limits from `POSTBOARD_*`,
    /// storage from `DATABASE_URL`.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            security_config: SecurityConfig::from_env()?,
            pagination: PaginationConfig::from_env()?,
            db_profile: Some(DbProfile::Prod),
        })
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }

    /// Connects and migrates when a profile is set.
    pub async fn build(self) -> Result<AppState, AppError> {
        info!(
            db_profile = ?self.db_profile,
            jwt_algorithm = ?self.security_config.algorithm,
            token_ttl_secs = self.security_config.access_token_ttl.as_secs(),
            page_size_default = self.pagination.default_size,
            page_size_max = self.pagination.max_size,
            "building application state"
        );

        let Some(profile) = self.db_profile else {
            return Ok(AppState::without_db(self.security_config, self.pagination));
        };
        let conn = bootstrap_db(&profile).await?;
        Ok(AppState::new(conn, self.security_config, self.pagination))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
