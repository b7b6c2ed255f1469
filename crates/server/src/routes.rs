use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::comments::{CommentRepository, CommentService};

use crate::errors::JsonApiError;
use crate::openapi::ApiDoc;

pub mod comments;

pub const COMMENTS_BASE: &str = "/api/comments";

/// Shared handler state; cloned per request.
#[derive(Clone)]
pub struct ServerState {
    pub comments: CommentService,
}

impl ServerState {
    pub fn new(repo: Arc<dyn CommentRepository>) -> Self {
        Self { comments: CommentService::new(repo) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn not_found() -> JsonApiError {
    JsonApiError::not_found("Not found")
}

async fn method_not_allowed() -> JsonApiError {
    JsonApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// Build the full application router: health, comments and API docs.
/// Unmatched paths and methods still answer with a JSON `error` body.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    public
        .merge(comments::router())
        .fallback(not_found)
        // 需在所有路由注册之后设置，才能覆盖已有路径
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
