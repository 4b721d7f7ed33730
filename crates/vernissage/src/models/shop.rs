use chrono::Utc;
use serde::Deserialize;

use vernissage_core::serde::deserialize_optional_string;
use vernissage_core::shop::{PickupPoint, ShopItem};

/// Request payload for creating a shop item.
#[derive(Debug, Deserialize)]
pub struct CreateShopItem {
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    pub price_cents: i64,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub stock: i64,
}

impl CreateShopItem {
    pub fn into_shop_item(self) -> ShopItem {
        let mut item = ShopItem::new(self.title, self.price_cents, self.stock);
        item.description = self.description;
        item.image_url = self.image_url;
        item
    }
}

/// Request payload for updating a shop item. Absent fields keep their value.
#[derive(Debug, Deserialize)]
pub struct UpdateShopItem {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(default)]
    pub price_cents: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub stock: Option<i64>,
}

impl UpdateShopItem {
    pub fn apply_to(self, item: &mut ShopItem) {
        item.updated_at = Utc::now();
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(description) = self.description {
            item.description = Some(description);
        }
        if let Some(price_cents) = self.price_cents {
            item.price_cents = price_cents;
        }
        if let Some(image_url) = self.image_url {
            item.image_url = Some(image_url);
        }
        if let Some(stock) = self.stock {
            item.stock = stock;
        }
    }
}

/// Request payload for creating a pickup point.
#[derive(Debug, Deserialize)]
pub struct CreatePickupPoint {
    pub name: String,
    pub address: String,
    pub city: String,
}

impl CreatePickupPoint {
    pub fn into_pickup_point(self) -> PickupPoint {
        PickupPoint::new(self.name, self.address, self.city)
    }
}

/// Request payload for updating a pickup point.
#[derive(Debug, Deserialize)]
pub struct UpdatePickupPoint {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub city: Option<String>,
}

impl UpdatePickupPoint {
    pub fn apply_to(self, point: &mut PickupPoint) {
        point.updated_at = Utc::now();
        if let Some(name) = self.name {
            point.name = name;
        }
        if let Some(address) = self.address {
            point.address = address;
        }
        if let Some(city) = self.city {
            point.city = city;
        }
    }
}
