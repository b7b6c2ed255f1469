//! Postgres-backed checks; skipped when `SKIP_DB_TESTS` is set.
use anyhow::Result;
use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::json;
use uuid::Uuid;

use crate::{comment, db};

/// `None` when no database is reachable; the caller skips.
async fn setup_test_db() -> Option<DatabaseConnection> {
    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = db::migrate(&db).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}

#[tokio::test]
async fn test_comment_create_find_delete() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let Some(db) = setup_test_db().await else { return Ok(()) };

    let id = format!("model_{}", Uuid::new_v4().simple());
    let created = comment::create(&db, &id, json!({ "text": "hi", "author": "ann" })).await?;
    assert_eq!(created.id, id);
    assert_eq!(created.document["text"], "hi");

    let found = comment::Entity::find_by_id(id.clone()).one(&db).await?;
    assert_eq!(found.map(|m| m.document), Some(json!({ "text": "hi", "author": "ann" })));

    let res = comment::Entity::delete_by_id(id.clone()).exec(&db).await?;
    assert_eq!(res.rows_affected, 1);
    assert!(comment::Entity::find_by_id(id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_duplicate_id_rejected() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let Some(db) = setup_test_db().await else { return Ok(()) };

    let id = format!("dup_{}", Uuid::new_v4().simple());
    comment::create(&db, &id, json!({ "text": "first" })).await?;
    let second = comment::create(&db, &id, json!({ "text": "second" })).await;
    assert!(matches!(second, Err(crate::errors::ModelError::Db(_))));

    comment::Entity::delete_by_id(id).exec(&db).await?;
    Ok(())
}
