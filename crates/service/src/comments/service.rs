use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::domain::Comment;
use super::repository::CommentRepository;
use crate::errors::ServiceError;

/// Comment operations exposed to the HTTP layer.
/// The store client is injected once at wiring time and shared by every request.
#[derive(Clone)]
pub struct CommentService {
    repo: Arc<dyn CommentRepository>,
}

impl CommentService {
    pub fn new(repo: Arc<dyn CommentRepository>) -> Self { Self { repo } }

    /// List all comments in store order.
    ///
    /// # Examples
    /// ```
    /// use service::comments::{CommentService, Comment, repository::memory::InMemoryCommentRepository};
    /// use std::sync::Arc;
    /// let repo = InMemoryCommentRepository::with_comments([Comment::from_document("a", serde_json::json!({ "text": "hi" }))]);
    /// let svc = CommentService::new(Arc::new(repo));
    /// let all = tokio_test::block_on(svc.list()).unwrap();
    /// assert_eq!(all.len(), 1);
    /// ```
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Comment>, ServiceError> {
        let comments = self.repo.find_all().await?;
        debug!(count = comments.len(), "listed comments");
        Ok(comments)
    }

    /// Delete one comment. `Ok(None)` means no comment had that id.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<Option<Comment>, ServiceError> {
        let deleted = self.repo.delete_by_id(id).await?;
        match &deleted {
            Some(c) => info!(id = %c.id, "comment deleted"),
            None => debug!(%id, "comment not found"),
        }
        Ok(deleted)
    }
}
