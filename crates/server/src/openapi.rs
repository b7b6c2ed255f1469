use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// A stored comment. Fields besides `id` are passed through as stored.
#[derive(ToSchema)]
pub struct CommentDoc { pub id: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::comments::list,
        crate::routes::comments::remove,
    ),
    components(
        schemas(
            HealthResponse,
            CommentDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "comments")
    )
)]
pub struct ApiDoc;
