use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, is_memory_url, DbProfile};
use crate::error::AppError;

/// Open a pool for `profile`. Does not run migrations.
pub async fn connect_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile);
    let mut opts = ConnectOptions::new(url.clone());
    opts.connect_timeout(Duration::from_secs(5)).sqlx_logging(false);

    // Each in-memory SQLite connection is its own database.
    if is_memory_url(&url) {
        opts.max_connections(1).min_connections(1);
    }

    let conn = Database::connect(opts).await?;
    info!(
        profile = ?profile,
        backend = ?conn.get_database_backend(),
        "database connected"
    );
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}
