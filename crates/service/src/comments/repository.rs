use async_trait::async_trait;

use super::domain::Comment;
use crate::errors::ServiceError;

/// Store client for the comment collection.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Every record, unfiltered.
    async fn find_all(&self) -> Result<Vec<Comment>, ServiceError>;
    /// Remove the record with `id`. `Ok(None)` when nothing matched.
    async fn delete_by_id(&self, id: &str) -> Result<Option<Comment>, ServiceError>;
}

/// In-memory repository for tests and local runs without Postgres.
pub mod memory {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct InMemoryCommentRepository {
        comments: RwLock<Vec<Comment>>, // insertion order
        failing: AtomicBool,
    }

    impl InMemoryCommentRepository {
        pub fn new() -> Self { Self::default() }

        pub fn with_comments(comments: impl IntoIterator<Item = Comment>) -> Self {
            Self { comments: RwLock::new(comments.into_iter().collect()), failing: AtomicBool::new(false) }
        }

        pub async fn insert(&self, comment: Comment) -> Result<(), ServiceError> {
            let mut comments = self.comments.write().await;
            if comments.iter().any(|c| c.id == comment.id) {
                return Err(ServiceError::Validation(format!("duplicate id {}", comment.id)));
            }
            comments.push(comment);
            Ok(())
        }

        pub async fn len(&self) -> usize { self.comments.read().await.len() }

        pub async fn is_empty(&self) -> bool { self.comments.read().await.is_empty() }

        /// Make every store call fail until switched back.
        pub fn set_failing(&self, failing: bool) { self.failing.store(failing, Ordering::SeqCst); }

        fn check(&self) -> Result<(), ServiceError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(ServiceError::Db("comment store unavailable".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl CommentRepository for InMemoryCommentRepository {
        async fn find_all(&self) -> Result<Vec<Comment>, ServiceError> {
            self.check()?;
            Ok(self.comments.read().await.clone())
        }

        async fn delete_by_id(&self, id: &str) -> Result<Option<Comment>, ServiceError> {
            self.check()?;
            let mut comments = self.comments.write().await;
            let idx = comments.iter().position(|c| c.id == id);
            Ok(idx.map(|idx| comments.remove(idx)))
        }
    }

}
