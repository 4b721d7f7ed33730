use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use vernissage_auth::AdminUser;
use vernissage_core::catalog::{Exhibition, Painting};

use crate::error::AppError;
use crate::models::{CreateExhibition, SetExhibitionPaintings, UpdateExhibition};
use crate::state::AppState;

use super::{bad_request, not_found};

/// List all exhibitions, latest start date first (GET /api/exhibitions).
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Exhibition>>, AppError> {
    Ok(Json(state.exhibitions.list_exhibitions().await?))
}

/// Get a single exhibition (GET /api/exhibitions/{id}).
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Exhibition>, AppError> {
    let exhibition = state
        .exhibitions
        .get_exhibition(id)
        .await?
        .ok_or_else(|| not_found("Exhibition", id))?;
    Ok(Json(exhibition))
}

/// List the paintings shown in an exhibition (GET /api/exhibitions/{id}/paintings).
pub async fn paintings(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Painting>>, AppError> {
    state
        .exhibitions
        .get_exhibition(id)
        .await?
        .ok_or_else(|| not_found("Exhibition", id))?;
    Ok(Json(state.exhibitions.list_exhibition_paintings(id).await?))
}

/// Create an exhibition (POST /api/admin/exhibitions).
pub async fn create(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateExhibition>,
) -> Result<(StatusCode, Json<Exhibition>), AppError> {
    if payload.ends_on < payload.starts_on {
        return Err(bad_request("Exhibition cannot end before it starts"));
    }
    let exhibition = payload.into_exhibition();
    state.exhibitions.create_exhibition(&exhibition).await?;
    tracing::info!(exhibition_id = %exhibition.id, title = %exhibition.title, "Created exhibition");
    Ok((StatusCode::CREATED, Json(exhibition)))
}

/// Update an exhibition (PUT /api/admin/exhibitions/{id}).
pub async fn update(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateExhibition>,
) -> Result<Json<Exhibition>, AppError> {
    let mut exhibition = state
        .exhibitions
        .get_exhibition(id)
        .await?
        .ok_or_else(|| not_found("Exhibition", id))?;
    payload.apply_to(&mut exhibition);
    if exhibition.ends_on < exhibition.starts_on {
        return Err(bad_request("Exhibition cannot end before it starts"));
    }
    state.exhibitions.update_exhibition(&exhibition).await?;
    Ok(Json(exhibition))
}

/// Replace the set of paintings in an exhibition
/// (PUT /api/admin/exhibitions/{id}/paintings).
pub async fn set_paintings(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetExhibitionPaintings>,
) -> Result<Json<Vec<Painting>>, AppError> {
    state
        .exhibitions
        .get_exhibition(id)
        .await?
        .ok_or_else(|| not_found("Exhibition", id))?;
    state
        .exhibitions
        .set_exhibition_paintings(id, &payload.painting_ids)
        .await?;
    Ok(Json(state.exhibitions.list_exhibition_paintings(id).await?))
}

/// Delete an exhibition (DELETE /api/admin/exhibitions/{id}).
pub async fn delete(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.exhibitions.delete_exhibition(id).await?;
    tracing::info!(exhibition_id = %id, "Deleted exhibition");
    Ok(StatusCode::NO_CONTENT)
}
