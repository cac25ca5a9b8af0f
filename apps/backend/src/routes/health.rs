use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    #[serde(flatten)]
    db: DbProbe,
    time: String,
}

#[derive(Debug, Serialize)]
struct DbProbe {
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
}

impl DbProbe {
    fn failed(reason: String) -> Self {
        Self {
            db: "error",
            db_error: Some(reason),
            migrations: "unknown".to_string(),
        }
    }
}

async fn probe(conn: &DatabaseConnection) -> DbProbe {
    if let Err(e) = conn.ping().await {
        return DbProbe::failed(format!("DB ping failed: {e}"));
    }

    let migrations = match get_latest_migration_version(conn).await {
        Ok(Some(version)) => version,
        Ok(None) => "no_migrations".to_string(),
        Err(_) => "unknown".to_string(),
    };

    DbProbe {
        db: "ok",
        db_error: None,
        migrations,
    }
}

/// Always 200 while the process serves requests; `db` reports storage separately.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = match require_db(&app_state) {
        Ok(conn) => probe(conn).await,
        Err(e) => DbProbe::failed(format!("DB unavailable: {e}")),
    };

    let time = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: app_state.app_version,
        db,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
