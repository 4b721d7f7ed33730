use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use vernissage_auth::AdminUser;
use vernissage_core::shop::PickupPoint;

use crate::error::AppError;
use crate::models::{CreatePickupPoint, UpdatePickupPoint};
use crate::state::AppState;

use super::not_found;

/// List all pickup points, grouped by city (GET /api/pickup-points).
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PickupPoint>>, AppError> {
    Ok(Json(state.pickup_points.list_pickup_points().await?))
}

/// Get a single pickup point (GET /api/pickup-points/{id}).
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PickupPoint>, AppError> {
    let point = state
        .pickup_points
        .get_pickup_point(id)
        .await?
        .ok_or_else(|| not_found("PickupPoint", id))?;
    Ok(Json(point))
}

/// Create a pickup point (POST /api/admin/pickup-points).
pub async fn create(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(payload): Json<CreatePickupPoint>,
) -> Result<(StatusCode, Json<PickupPoint>), AppError> {
    let point = payload.into_pickup_point();
    state.pickup_points.create_pickup_point(&point).await?;
    tracing::info!(point_id = %point.id, name = %point.name, "Created pickup point");
    Ok((StatusCode::CREATED, Json(point)))
}

/// Update a pickup point (PUT /api/admin/pickup-points/{id}).
pub async fn update(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePickupPoint>,
) -> Result<Json<PickupPoint>, AppError> {
    let mut point = state
        .pickup_points
        .get_pickup_point(id)
        .await?
        .ok_or_else(|| not_found("PickupPoint", id))?;
    payload.apply_to(&mut point);
    state.pickup_points.update_pickup_point(&point).await?;
    Ok(Json(point))
}

/// Delete a pickup point (DELETE /api/admin/pickup-points/{id}).
///
/// Orders keep a snapshot of the chosen point, so deletion never rewrites
/// order history.
pub async fn delete(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.pickup_points.delete_pickup_point(id).await?;
    tracing::info!(point_id = %id, "Deleted pickup point");
    Ok(StatusCode::NO_CONTENT)
}
