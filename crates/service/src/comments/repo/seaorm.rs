use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, TransactionTrait};
use tracing::debug;

use models::comment;

use crate::comments::domain::Comment;
use crate::comments::repository::CommentRepository;
use crate::errors::ServiceError;

/// SeaORM-backed store client over the `comment` table.
pub struct SeaOrmCommentRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCommentRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl CommentRepository for SeaOrmCommentRepository {
    async fn find_all(&self) -> Result<Vec<Comment>, ServiceError> {
        let rows = comment::Entity::find()
            .order_by_asc(comment::Column::CreatedAt)
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Comment>, ServiceError> {
        let txn = self.db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;

        // dropping `txn` without commit rolls back
        let Some(found) = comment::Entity::find_by_id(id.to_string())
            .one(&txn)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
        else {
            return Ok(None);
        };

        let res = comment::Entity::delete_by_id(id.to_string())
            .exec(&txn)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        if res.rows_affected == 0 {
            // removed by a concurrent delete between lookup and delete
            debug!(%id, "comment vanished before delete");
            return Ok(None);
        }

        txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(found.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use serde_json::json;
    use uuid::Uuid;

    #[tokio::test]
    async fn seaorm_list_and_delete() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = match get_db().await {
            Ok(db) => db,
            Err(e) => { eprintln!("skip: cannot connect to db: {}", e); return Ok(()); }
        };
        let repo = SeaOrmCommentRepository::new(db.clone());

        let id = format!("svc_{}", Uuid::new_v4().simple());
        comment::create(&db, &id, json!({ "text": "hi" })).await?;

        let all = repo.find_all().await?;
        let listed = all.iter().find(|c| c.id == id).expect("created comment listed");
        assert_eq!(listed.fields.get("text"), Some(&json!("hi")));

        let deleted = repo.delete_by_id(&id).await?.expect("first delete finds the comment");
        assert_eq!(deleted.id, id);
        assert!(repo.delete_by_id(&id).await?.is_none());
        assert!(repo.find_all().await?.iter().all(|c| c.id != id));
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_concurrent_deletes_remove_once() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = match get_db().await {
            Ok(db) => db,
            Err(e) => { eprintln!("skip: cannot connect to db: {}", e); return Ok(()); }
        };
        let repo = std::sync::Arc::new(SeaOrmCommentRepository::new(db.clone()));

        let id = format!("race_{}", Uuid::new_v4().simple());
        comment::create(&db, &id, json!({ "text": "race" })).await?;

        let (a, b) = tokio::join!(repo.delete_by_id(&id), repo.delete_by_id(&id));
        let removed = [a?, b?].into_iter().filter(Option::is_some).count();
        assert_eq!(removed, 1);
        Ok(())
    }
}
