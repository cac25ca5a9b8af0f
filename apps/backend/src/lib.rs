pub mod adapters;
pub mod auth;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod pagination;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod test_support;
pub mod trace_ctx;

// Re-exports for public API
pub use auth::{AuthError, Claims, Role};
pub use config::db::DbProfile;
pub use error::AppError;
pub use infra::state::{build_state, StateBuilder};
pub use pagination::{paginate, PageError, PageMeta, PageWindow, Paginated};
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
