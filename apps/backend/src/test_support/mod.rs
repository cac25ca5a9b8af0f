//! Helpers shared by unit and integration tests.

pub mod app_builder;

pub use app_builder::{create_test_app, TestAppBuilder};

use crate::config::db::DbProfile;
use crate::infra::state::build_state;
use crate::state::app_state::AppState;

/// Fresh in-memory database with the schema applied, and test security settings.
pub async fn test_state() -> AppState {
    build_state()
        .with_db(DbProfile::Test)
        .build()
        .await
        .unwrap_or_else(|e| panic!("failed to build test state: {e}"))
}
