use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;
use service::comments::Comment;
use tracing::{debug, error, info};

use crate::errors::{JsonApiError, COMMENT_NOT_FOUND};
use crate::routes::{ServerState, COMMENTS_BASE};

pub const COMMENT_DELETED: &str = "Comment deleted successfully";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub const INVALID_COMMENT_ID: &str = "Invalid comment id";

/// Comment routes under `COMMENTS_BASE`; a trailing slash is accepted on both.
pub fn router() -> Router<ServerState> {
    Router::new()
        .route(COMMENTS_BASE, get(list))
        .route(&format!("{COMMENTS_BASE}/"), get(list))
        .route(&format!("{COMMENTS_BASE}/:id"), delete(remove))
        .route(&format!("{COMMENTS_BASE}/:id/"), delete(remove))
}

#[utoipa::path(
    get, path = "/api/comments", tag = "comments",
    responses(
        (status = 200, description = "All comments", body = [crate::openapi::CommentDoc]),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Comment>>, JsonApiError> {
    match state.comments.list().await {
        Ok(list) => { info!(count = list.len(), "list comments"); Ok(Json(list)) }
        Err(e) => {
            error!(err = %e, "error fetching comments");
            Err(JsonApiError::internal())
        }
    }
}

#[utoipa::path(
    delete, path = "/api/comments/{id}", tag = "comments",
    params(("id" = String, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 400, description = "Invalid comment id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Comment not found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn remove(
    State(state): State<ServerState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let Path(id) = path.map_err(|e| {
        debug!(err = %e, "rejected comment id");
        JsonApiError::new(StatusCode::BAD_REQUEST, INVALID_COMMENT_ID)
    })?;
    match state.comments.delete(&id).await {
        Ok(Some(_)) => Ok(Json(MessageResponse { message: COMMENT_DELETED })),
        Ok(None) => Err(JsonApiError::not_found(COMMENT_NOT_FOUND)),
        Err(e) => {
            error!(err = %e, %id, "error deleting comment");
            Err(JsonApiError::internal())
        }
    }
}
