use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::AppConfig;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};
use service::comments::repo::seaorm::SeaOrmCommentRepository;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_from_env();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Prefer config.toml; only when it is missing fall back to SERVER_HOST / SERVER_PORT / DATABASE_URL.
fn load_config() -> Result<AppConfig, StartupError> {
    let path = configs::config_path();
    if !std::path::Path::new(&path).exists() {
        info!(%path, "no config file, using environment");
    }
    AppConfig::load_or_env(&path).map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run() -> anyhow::Result<()> {
    run_with_shutdown(shutdown_signal()).await
}

/// Same as [`run`] with a caller-supplied shutdown trigger.
pub async fn run_with_shutdown<F>(shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    dotenv().ok();
    init_logging();

    let cfg = load_config()?;

    // DB connection, opened once and shared by every request
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.auto_migrate {
        models::db::migrate(&db).await?;
        info!("comment schema migrated");
    }

    let state = ServerState::new(Arc::new(SeaOrmCommentRepository::new(db)));
    let app: Router = routes::build_router(state, build_cors());

    // Bind and serve
    let addr: SocketAddr = cfg
        .server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address {}: {e}", cfg.server.bind_addr())))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::Runtime(format!("cannot bind {addr}: {e}")))?;
    info!(%addr, "starting comments server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("server stopped");
    Ok(())
}
