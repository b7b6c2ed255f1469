use std::{env, time::Duration};

use configs::DatabaseConfig;
use migration::MigratorTrait;
use once_cell::sync::Lazy;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

pub static DATABASE_URL: Lazy<Option<String>> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    env::var("DATABASE_URL").ok()
});

/// No built-in fallback: a missing or blank URL is an error.
pub fn require_url(url: Option<&str>) -> anyhow::Result<&str> {
    match url {
        Some(u) if !u.trim().is_empty() => Ok(u),
        _ => Err(anyhow::anyhow!("DATABASE_URL is not set")),
    }
}

/// Connect with default pool settings to `DATABASE_URL`.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let url = require_url(DATABASE_URL.as_deref())?;
    let db = Database::connect(url).await?;
    Ok(db)
}

pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    opt
}

/// Open the shared pool from a validated `[database]` section.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg)).await?;
    info!(max_connections = cfg.max_connections, min_connections = cfg.min_connections, "database pool ready");
    Ok(db)
}

/// Apply every pending migration.
pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
    migration::Migrator::up(db, None).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_required() {
        assert!(require_url(None).is_err());
        assert!(require_url(Some("  ")).is_err());
        assert_eq!(require_url(Some("postgres://localhost/comments")).unwrap(), "postgres://localhost/comments");
    }

    #[test]
    fn pool_options_follow_config() {
        let cfg = DatabaseConfig { url: "postgres://localhost/comments".into(), max_connections: 7, ..Default::default() };
        let opt = connect_options(&cfg);
        assert_eq!(opt.get_url(), "postgres://localhost/comments");
        assert_eq!(opt.get_max_connections(), Some(7));
    }
}
