//! Blog post API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{format_date, ApiResult};
use crate::errors::AppError;
use crate::models::{BlogPost, CreatePostRequest, PostView};
use crate::AppState;

/// Convert a stored post to its read form.
fn present(mut post: BlogPost, with_link: bool) -> PostView {
    post.date = format_date(&post.date);
    let link = with_link.then(|| post.link());
    PostView { post, link }
}

/// GET /api/blog - List all posts with display dates and links.
pub async fn list_posts(State(state): State<AppState>) -> Json<Vec<PostView>> {
    let posts = state.store.load().await;
    Json(posts.into_iter().map(|p| present(p, true)).collect())
}

/// GET /api/blog/{id} - Get a single post.
///
/// The single-post read carries no `link`, unlike the list.
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PostView>> {
    // Plain decimal digits only; signs and whitespace are not ids.
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::post_not_found());
    }
    let id: i64 = id.parse().map_err(|_| AppError::post_not_found())?;

    state
        .store
        .load()
        .await
        .into_iter()
        .find(|p| p.id == id)
        .map(|p| Json(present(p, false)))
        .ok_or_else(AppError::post_not_found)
}

/// POST /api/blog - Create a new post.
pub async fn create_post(
    State(state): State<AppState>,
    Json(request): Json<CreatePostRequest>,
) -> ApiResult<(StatusCode, Json<BlogPost>)> {
    let post = state.store.create_post(&request).await?;
    Ok((StatusCode::CREATED, Json(post)))
}
