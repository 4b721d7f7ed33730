use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use vernissage_auth::AdminUser;
use vernissage_core::catalog::Painting;

use crate::error::AppError;
use crate::models::{CreatePainting, UpdatePainting};
use crate::state::AppState;

use super::{bad_request, not_found};

/// List all paintings, newest first (GET /api/paintings).
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Painting>>, AppError> {
    Ok(Json(state.paintings.list_paintings().await?))
}

/// Get a single painting (GET /api/paintings/{id}).
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Painting>, AppError> {
    let painting = state
        .paintings
        .get_painting(id)
        .await?
        .ok_or_else(|| not_found("Painting", id))?;
    Ok(Json(painting))
}

/// Create a painting (POST /api/admin/paintings).
pub async fn create(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(payload): Json<CreatePainting>,
) -> Result<(StatusCode, Json<Painting>), AppError> {
    // Resolve the artist up front for a clear error message
    state
        .artists
        .get_artist(payload.artist_id)
        .await?
        .ok_or_else(|| bad_request(format!("Unknown artist: {}", payload.artist_id)))?;

    let painting = payload.into_painting();
    state.paintings.create_painting(&painting).await?;
    tracing::info!(painting_id = %painting.id, title = %painting.title, "Created painting");
    Ok((StatusCode::CREATED, Json(painting)))
}

/// Update a painting (PUT /api/admin/paintings/{id}).
pub async fn update(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePainting>,
) -> Result<Json<Painting>, AppError> {
    let mut painting = state
        .paintings
        .get_painting(id)
        .await?
        .ok_or_else(|| not_found("Painting", id))?;

    if let Some(artist_id) = payload.artist_id {
        state
            .artists
            .get_artist(artist_id)
            .await?
            .ok_or_else(|| bad_request(format!("Unknown artist: {artist_id}")))?;
    }

    payload.apply_to(&mut painting);
    state.paintings.update_painting(&painting).await?;
    Ok(Json(painting))
}

/// Delete a painting (DELETE /api/admin/paintings/{id}).
pub async fn delete(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.paintings.delete_painting(id).await?;
    tracing::info!(painting_id = %id, "Deleted painting");
    Ok(StatusCode::NO_CONTENT)
}
