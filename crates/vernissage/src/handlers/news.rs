use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use vernissage_auth::AdminUser;
use vernissage_core::catalog::NewsPost;

use crate::error::AppError;
use crate::models::{CreateNewsPost, UpdateNewsPost};
use crate::state::AppState;

use super::not_found;

/// List all news posts, newest publication first (GET /api/news).
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<NewsPost>>, AppError> {
    Ok(Json(state.news.list_news_posts().await?))
}

/// Get a single news post (GET /api/news/{id}).
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<NewsPost>, AppError> {
    let post = state
        .news
        .get_news_post(id)
        .await?
        .ok_or_else(|| not_found("NewsPost", id))?;
    Ok(Json(post))
}

/// Create a news post (POST /api/admin/news).
pub async fn create(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateNewsPost>,
) -> Result<(StatusCode, Json<NewsPost>), AppError> {
    let post = payload.into_news_post();
    state.news.create_news_post(&post).await?;
    tracing::info!(post_id = %post.id, title = %post.title, "Created news post");
    Ok((StatusCode::CREATED, Json(post)))
}

/// Update a news post (PUT /api/admin/news/{id}).
pub async fn update(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateNewsPost>,
) -> Result<Json<NewsPost>, AppError> {
    let mut post = state
        .news
        .get_news_post(id)
        .await?
        .ok_or_else(|| not_found("NewsPost", id))?;
    payload.apply_to(&mut post);
    state.news.update_news_post(&post).await?;
    Ok(Json(post))
}

/// Delete a news post (DELETE /api/admin/news/{id}).
pub async fn delete(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.news.delete_news_post(id).await?;
    tracing::info!(post_id = %id, "Deleted news post");
    Ok(StatusCode::NO_CONTENT)
}
