use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A sellable item in the gallery shop (prints, catalogs, merchandise).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub image_url: Option<String>,
    /// Units currently in stock. Decremented on checkout.
    pub stock: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShopItem {
    /// Creates a new shop item with the given title, price, and stock.
    pub fn new(title: impl Into<String>, price_cents: i64, stock: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            price_cents,
            image_url: None,
            stock,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// A pickup point where customers can collect their orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupPoint {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PickupPoint {
    /// Creates a new pickup point.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            address: address.into(),
            city: city.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// How an order is delivered to the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum DeliveryMethod {
    /// Collected at one of the gallery's pickup points.
    Pickup { pickup_point_id: Uuid },
    /// Delivered by courier to a street address.
    Courier { address: String },
}

impl DeliveryMethod {
    /// Returns the pickup point ID if this is a pickup delivery.
    pub fn pickup_point_id(&self) -> Option<Uuid> {
        match self {
            DeliveryMethod::Pickup { pickup_point_id } => Some(*pickup_point_id),
            DeliveryMethod::Courier { .. } => None,
        }
    }

    /// Returns the courier address if this is a courier delivery.
    pub fn address(&self) -> Option<&str> {
        match self {
            DeliveryMethod::Pickup { .. } => None,
            DeliveryMethod::Courier { address } => Some(address),
        }
    }
}

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    New,
    Processing,
    Shipped,
    Completed,
    Cancelled,
}

/// Error returned when parsing an unknown order status string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown order status: {0}")]
pub struct OrderStatusParseError(pub String);

impl OrderStatus {
    /// Stable string form used in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Parses the database string form.
    pub fn parse(s: &str) -> Result<Self, OrderStatusParseError> {
        match s {
            "new" => Ok(OrderStatus::New),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(OrderStatusParseError(other.to_string())),
        }
    }
}

/// A placed order.
///
/// `total_cents` is always computed server-side from the order items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub delivery: DeliveryMethod,
    pub comment: Option<String>,
    pub total_cents: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new order in the `New` status.
    pub fn new(
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
        delivery: DeliveryMethod,
        total_cents: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            customer_phone: None,
            delivery,
            comment: None,
            total_cents,
            status: OrderStatus::New,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.customer_phone = Some(phone.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A line in an order.
///
/// Title and price are snapshotted from the shop item at checkout so later
/// edits to the catalog do not rewrite order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub shop_item_id: Uuid,
    pub title: String,
    pub price_cents: i64,
    pub quantity: i64,
}

impl OrderItem {
    /// Creates an order line snapshotting the given shop item.
    pub fn from_item(order_id: Uuid, item: &ShopItem, quantity: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            shop_item_id: item.id,
            title: item.title.clone(),
            price_cents: item.price_cents,
            quantity,
        }
    }

    /// Line subtotal (price times quantity), saturating at the `i64`
    /// bounds. `pricing::order_total` rejects overflowing lines before an
    /// order is ever stored.
    pub fn subtotal_cents(&self) -> i64 {
        self.price_cents.saturating_mul(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_round_trip() {
        for status in [
            OrderStatus::New,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(OrderStatus::parse(status.as_str()), Ok(status));
        }
    }

    #[test]
    fn test_order_status_parse_unknown() {
        let err = OrderStatus::parse("misplaced").unwrap_err();
        assert_eq!(err.to_string(), "Unknown order status: misplaced");
    }

    #[test]
    fn test_delivery_method_accessors() {
        let point_id = Uuid::new_v4();
        let pickup = DeliveryMethod::Pickup {
            pickup_point_id: point_id,
        };
        assert_eq!(pickup.pickup_point_id(), Some(point_id));
        assert_eq!(pickup.address(), None);

        let courier = DeliveryMethod::Courier {
            address: "12 Quay Street".to_string(),
        };
        assert_eq!(courier.pickup_point_id(), None);
        assert_eq!(courier.address(), Some("12 Quay Street"));
    }

    #[test]
    fn test_order_item_snapshot() {
        let item = ShopItem::new("Exhibition catalog", 2_500, 40);
        let order_id = Uuid::new_v4();
        let line = OrderItem::from_item(order_id, &item, 3);
        assert_eq!(line.title, "Exhibition catalog");
        assert_eq!(line.price_cents, 2_500);
        assert_eq!(line.subtotal_cents(), 7_500);
    }

    #[test]
    fn test_subtotal_saturates_instead_of_wrapping() {
        let item = ShopItem::new("Print", 2, 100);
        let line = OrderItem::from_item(Uuid::new_v4(), &item, i64::MAX / 2 + 5);
        assert_eq!(line.subtotal_cents(), i64::MAX);
    }

    #[test]
    fn test_new_order_starts_in_new_status() {
        let order = Order::new(
            "Ann",
            "ann@example.com",
            DeliveryMethod::Courier {
                address: "3 Mill Lane".to_string(),
            },
            5_000,
        );
        assert_eq!(order.status, OrderStatus::New);
        assert!(order.customer_phone.is_none());
    }
}
