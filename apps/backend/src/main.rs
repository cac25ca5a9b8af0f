use actix_web::{web, App, HttpServer};
use postboard::config::var_or;
use postboard::infra::state::StateBuilder;
use postboard::middleware::{RequestTrace, StructuredLogger};
use postboard::routes;
use postboard::telemetry::{self, LogFormat};
use tracing::{error, info};

fn exit_with(msg: &str, err: impl std::fmt::Display) -> ! {
    error!(error = %err, "{msg}");
    eprintln!("❌ {msg}: {err}");
    std::process::exit(1);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    match var_or("POSTBOARD_LOG_FORMAT", LogFormat::default()) {
        Ok(format) => telemetry::init_tracing(format),
        Err(e) => {
            telemetry::init_tracing(LogFormat::default());
            exit_with("invalid POSTBOARD_LOG_FORMAT", e);
        }
    }

    // Environment variables must be set by the runtime environment.
    let host = var_or("POSTBOARD_HOST", "0.0.0.0".to_string())
        .unwrap_or_else(|e| exit_with("invalid POSTBOARD_HOST", e));
    let port: u16 =
        var_or("POSTBOARD_PORT", 8000).unwrap_or_else(|e| exit_with("invalid POSTBOARD_PORT", e));

    let app_state = StateBuilder::from_env()
        .unwrap_or_else(|e| exit_with("invalid configuration", e))
        .build()
        .await
        .unwrap_or_else(|e| exit_with("failed to build application state", e));

    info!(%host, port, version = app_state.app_version, "starting postboard");

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
