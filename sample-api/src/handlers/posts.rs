use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use service_core::error::AppError;
use service_core::response::{success, SuccessBody};
use utoipa::ToSchema;
use validator::Validate;

use crate::services::posts::{Post, REQUIRED_FIELDS_MESSAGE};
use crate::startup::AppState;
use crate::utils::validation::{ValidatedJson, ValidationMessage};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    #[validate(required, length(min = 1))]
    #[schema(example = "投稿タイトル")]
    pub title: Option<String>,

    #[validate(required, length(min = 1))]
    #[schema(example = "投稿内容")]
    pub content: Option<String>,
}

impl ValidationMessage for CreatePostRequest {
    fn validation_message() -> &'static str {
        REQUIRED_FIELDS_MESSAGE
    }
}

/// List every post in creation order
#[utoipa::path(
    get,
    path = "/posts",
    responses(
        (status = 200, description = "投稿一覧", body = crate::docs::PostListResponse)
    ),
    tag = "投稿"
)]
pub async fn list_posts(State(state): State<AppState>) -> Json<SuccessBody<Vec<Post>>> {
    tracing::info!("Listing posts");
    Json(success(state.posts.list_all(), None))
}

/// Create a new post
#[utoipa::path(
    post,
    path = "/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "投稿作成成功", body = crate::docs::PostResponse),
        (status = 400, description = "バリデーションエラー", body = crate::docs::ErrorResponse)
    ),
    tag = "投稿"
)]
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<SuccessBody<Post>>), AppError> {
    let title = req.title.unwrap_or_default();
    let content = req.content.unwrap_or_default();
    tracing::info!(%title, %content, "New post received");

    let post = state.posts.create(&title, &content)?;
    tracing::info!(id = post.id, "Post created");

    Ok((StatusCode::CREATED, Json(success(post, None))))
}
