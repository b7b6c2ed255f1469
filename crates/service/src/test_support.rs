#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    if std::env::var("DATABASE_URL").is_err() {
        return Err(anyhow::anyhow!("DATABASE_URL missing"));
    }
    MIGRATED
        .get_or_try_init(|| async {
            let db = models::db::connect().await?;
            models::db::migrate(&db).await?;
            Ok::<(), anyhow::Error>(())
        })
        .await?;

    // Fresh connection for the current test's runtime
    models::db::connect().await
}
