use serde::Deserialize;
use uuid::Uuid;

use vernissage_core::serde::deserialize_optional_string;
use vernissage_core::shop::{DeliveryMethod, OrderStatus};

/// One line of a checkout request.
#[derive(Debug, Deserialize)]
pub struct CheckoutLine {
    pub shop_item_id: Uuid,
    pub quantity: i64,
}

/// Delivery choice in a checkout request.
///
/// Mirrors [`DeliveryMethod`] but keeps the wire format decoupled from the
/// domain type.
#[derive(Debug, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum CheckoutDelivery {
    Pickup { pickup_point_id: Uuid },
    Courier { address: String },
}

impl From<CheckoutDelivery> for DeliveryMethod {
    fn from(delivery: CheckoutDelivery) -> Self {
        match delivery {
            CheckoutDelivery::Pickup { pickup_point_id } => {
                DeliveryMethod::Pickup { pickup_point_id }
            }
            CheckoutDelivery::Courier { address } => DeliveryMethod::Courier { address },
        }
    }
}

/// Request payload for placing an order.
///
/// Prices are never taken from the client; each line is re-priced from the
/// current catalog before the order is persisted.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub customer_phone: Option<String>,
    pub delivery: CheckoutDelivery,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub comment: Option<String>,
    pub items: Vec<CheckoutLine>,
}

/// Request payload for changing an order's status.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatus {
    pub status: OrderStatus,
}
