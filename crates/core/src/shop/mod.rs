//! Shop domain types: sellable items, pickup points, orders, and pricing.

pub mod pricing;
mod types;

pub use types::{
    DeliveryMethod, Order, OrderItem, OrderStatus, OrderStatusParseError, PickupPoint, ShopItem,
};
