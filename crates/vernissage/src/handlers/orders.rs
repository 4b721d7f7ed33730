use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use vernissage_auth::AdminUser;
use vernissage_core::mail::{render_admin_notification, render_order_confirmation};
use vernissage_core::shop::pricing::{check_minimum, order_total};
use vernissage_core::shop::{DeliveryMethod, Order, OrderItem};

use crate::error::AppError;
use crate::models::{CheckoutRequest, UpdateOrderStatus};
use crate::state::AppState;

use super::{bad_request, not_found};

/// An order together with its lines, as returned by the API.
#[derive(Debug, Serialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// Place an order (POST /api/orders).
///
/// Each line is re-priced from the current catalog; client-supplied prices
/// are never trusted. The order and its stock decrements commit in one
/// transaction, then confirmation emails go out best-effort.
pub async fn checkout(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<OrderWithItems>), AppError> {
    if payload.customer_name.trim().is_empty() {
        return Err(bad_request("Customer name is required"));
    }
    if !payload.customer_email.contains('@') {
        return Err(bad_request("A valid email address is required"));
    }

    let delivery: DeliveryMethod = payload.delivery.into();
    if let Some(point_id) = delivery.pickup_point_id() {
        state
            .pickup_points
            .get_pickup_point(point_id)
            .await?
            .ok_or_else(|| bad_request(format!("Unknown pickup point: {point_id}")))?;
    }
    if delivery.address().is_some_and(|a| a.trim().is_empty()) {
        return Err(bad_request("A delivery address is required for courier orders"));
    }

    let mut order = Order::new(
        payload.customer_name.trim(),
        payload.customer_email.trim(),
        delivery,
        0,
    );
    if let Some(phone) = payload.customer_phone {
        order = order.with_phone(phone);
    }
    if let Some(comment) = payload.comment {
        order = order.with_comment(comment);
    }

    // Re-price every line from the catalog
    let mut items = Vec::with_capacity(payload.items.len());
    for line in &payload.items {
        let item = state
            .shop_items
            .get_shop_item(line.shop_item_id)
            .await?
            .ok_or_else(|| bad_request(format!("Unknown shop item: {}", line.shop_item_id)))?;
        items.push(OrderItem::from_item(order.id, &item, line.quantity));
    }

    let total = order_total(&items)?;
    check_minimum(total, state.config.min_order_cents)?;
    order.total_cents = total;

    state.orders.create_order(&order, &items).await?;
    tracing::info!(order_id = %order.id, total_cents = total, "Order placed");

    send_notifications(&state, &order, &items).await;

    Ok((
        StatusCode::CREATED,
        Json(OrderWithItems { order, items }),
    ))
}

/// Sends the customer confirmation and the back-office notification.
///
/// Failures are logged, never surfaced: the order is already committed.
async fn send_notifications(state: &AppState, order: &Order, items: &[OrderItem]) {
    let confirmation = render_order_confirmation(order, items);
    if let Err(e) = state.mailer.send(&order.customer_email, &confirmation).await {
        tracing::warn!(order_id = %order.id, error = %e, "Failed to send order confirmation");
    }

    if let Some(admin_address) = &state.config.mail_admin {
        let notification = render_admin_notification(order, items);
        if let Err(e) = state.mailer.send(admin_address, &notification).await {
            tracing::warn!(order_id = %order.id, error = %e, "Failed to notify back office");
        }
    }
}

/// List all orders, newest first (GET /api/admin/orders).
pub async fn list(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Order>>, AppError> {
    Ok(Json(state.orders.list_orders().await?))
}

/// Get a single order with its lines (GET /api/admin/orders/{id}).
pub async fn get(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderWithItems>, AppError> {
    let order = state
        .orders
        .get_order(id)
        .await?
        .ok_or_else(|| not_found("Order", id))?;
    let items = state.orders.get_order_items(id).await?;
    Ok(Json(OrderWithItems { order, items }))
}

/// Change an order's status (PUT /api/admin/orders/{id}/status).
pub async fn update_status(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateOrderStatus>,
) -> Result<Json<OrderWithItems>, AppError> {
    state.orders.update_order_status(id, payload.status).await?;
    let order = state
        .orders
        .get_order(id)
        .await?
        .ok_or_else(|| not_found("Order", id))?;
    let items = state.orders.get_order_items(id).await?;
    tracing::info!(order_id = %id, status = %payload.status.as_str(), "Order status changed");
    Ok(Json(OrderWithItems { order, items }))
}

/// Delete an order (DELETE /api/admin/orders/{id}).
pub async fn delete(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.orders.delete_order(id).await?;
    tracing::info!(order_id = %id, "Deleted order");
    Ok(StatusCode::NO_CONTENT)
}
