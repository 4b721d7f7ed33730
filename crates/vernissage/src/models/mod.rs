//! Request payload types for the HTTP API.
//!
//! Admin forms submit optional fields as empty strings, so payloads use
//! `deserialize_optional_string` to normalize them before they reach
//! storage.

mod auth;
mod catalog;
mod order;
mod shop;

pub use auth::LoginRequest;
pub use catalog::{
    CreateArtist, CreateExhibition, CreateNewsPost, CreatePainting, SetExhibitionPaintings,
    UpdateArtist, UpdateExhibition, UpdateNewsPost, UpdatePainting,
};
pub use order::{CheckoutDelivery, CheckoutLine, CheckoutRequest, UpdateOrderStatus};
pub use shop::{CreatePickupPoint, CreateShopItem, UpdatePickupPoint, UpdateShopItem};
