use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use vernissage_auth::AdminUser;
use vernissage_core::shop::ShopItem;

use crate::error::AppError;
use crate::models::{CreateShopItem, UpdateShopItem};
use crate::state::AppState;

use super::{bad_request, not_found};

/// List all shop items, newest first (GET /api/shop).
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ShopItem>>, AppError> {
    Ok(Json(state.shop_items.list_shop_items().await?))
}

/// Get a single shop item (GET /api/shop/{id}).
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ShopItem>, AppError> {
    let item = state
        .shop_items
        .get_shop_item(id)
        .await?
        .ok_or_else(|| not_found("ShopItem", id))?;
    Ok(Json(item))
}

/// Create a shop item (POST /api/admin/shop).
pub async fn create(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateShopItem>,
) -> Result<(StatusCode, Json<ShopItem>), AppError> {
    if payload.price_cents < 0 {
        return Err(bad_request("Price cannot be negative"));
    }
    if payload.stock < 0 {
        return Err(bad_request("Stock cannot be negative"));
    }
    let item = payload.into_shop_item();
    state.shop_items.create_shop_item(&item).await?;
    tracing::info!(item_id = %item.id, title = %item.title, "Created shop item");
    Ok((StatusCode::CREATED, Json(item)))
}

/// Update a shop item (PUT /api/admin/shop/{id}).
pub async fn update(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateShopItem>,
) -> Result<Json<ShopItem>, AppError> {
    if payload.price_cents.is_some_and(|p| p < 0) {
        return Err(bad_request("Price cannot be negative"));
    }
    if payload.stock.is_some_and(|s| s < 0) {
        return Err(bad_request("Stock cannot be negative"));
    }
    let mut item = state
        .shop_items
        .get_shop_item(id)
        .await?
        .ok_or_else(|| not_found("ShopItem", id))?;
    payload.apply_to(&mut item);
    state.shop_items.update_shop_item(&item).await?;
    Ok(Json(item))
}

/// Delete a shop item (DELETE /api/admin/shop/{id}).
pub async fn delete(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.shop_items.delete_shop_item(id).await?;
    tracing::info!(item_id = %id, "Deleted shop item");
    Ok(StatusCode::NO_CONTENT)
}
