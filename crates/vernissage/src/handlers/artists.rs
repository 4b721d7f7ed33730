use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use vernissage_auth::AdminUser;
use vernissage_core::catalog::{Artist, Painting};

use crate::error::AppError;
use crate::models::{CreateArtist, UpdateArtist};
use crate::state::AppState;

use super::not_found;

/// List all artists, sorted by name (GET /api/artists).
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Artist>>, AppError> {
    Ok(Json(state.artists.list_artists().await?))
}

/// Get a single artist (GET /api/artists/{id}).
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Artist>, AppError> {
    let artist = state
        .artists
        .get_artist(id)
        .await?
        .ok_or_else(|| not_found("Artist", id))?;
    Ok(Json(artist))
}

/// List an artist's paintings (GET /api/artists/{id}/paintings).
pub async fn paintings(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Painting>>, AppError> {
    state
        .artists
        .get_artist(id)
        .await?
        .ok_or_else(|| not_found("Artist", id))?;
    Ok(Json(state.paintings.list_paintings_by_artist(id).await?))
}

/// Create an artist (POST /api/admin/artists).
pub async fn create(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateArtist>,
) -> Result<(StatusCode, Json<Artist>), AppError> {
    let artist = payload.into_artist();
    state.artists.create_artist(&artist).await?;
    tracing::info!(artist_id = %artist.id, name = %artist.name, "Created artist");
    Ok((StatusCode::CREATED, Json(artist)))
}

/// Update an artist (PUT /api/admin/artists/{id}).
pub async fn update(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateArtist>,
) -> Result<Json<Artist>, AppError> {
    let mut artist = state
        .artists
        .get_artist(id)
        .await?
        .ok_or_else(|| not_found("Artist", id))?;
    payload.apply_to(&mut artist);
    state.artists.update_artist(&artist).await?;
    Ok(Json(artist))
}

/// Delete an artist (DELETE /api/admin/artists/{id}).
///
/// Rejected with 400 while paintings still reference the artist.
pub async fn delete(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.artists.delete_artist(id).await?;
    tracing::info!(artist_id = %id, "Deleted artist");
    Ok(StatusCode::NO_CONTENT)
}
