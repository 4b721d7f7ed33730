//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Row;
use uuid::Uuid;

use vernissage_core::auth::AdminUser;
use vernissage_core::catalog::{Artist, Exhibition, NewsPost, Painting};
use vernissage_core::shop::{DeliveryMethod, Order, OrderItem, OrderStatus, PickupPoint, ShopItem};

/// Convert a SQLite row to an Artist.
///
/// Expected columns: id, name, bio, photo_url, created_at, updated_at
pub fn row_to_artist(row: &Row) -> rusqlite::Result<Artist> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let bio: Option<String> = row.get(2)?;
    let photo_url: Option<String> = row.get(3)?;
    let created_at: String = row.get(4)?;
    let updated_at: String = row.get(5)?;

    Ok(Artist {
        id: parse_uuid(&id)?,
        name,
        bio,
        photo_url,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Convert a SQLite row to a Painting.
///
/// Expected columns: id, artist_id, title, description, year, technique,
/// width_cm, height_cm, price_cents, image_url, available, created_at,
/// updated_at
pub fn row_to_painting(row: &Row) -> rusqlite::Result<Painting> {
    let id: String = row.get(0)?;
    let artist_id: String = row.get(1)?;
    let title: String = row.get(2)?;
    let description: Option<String> = row.get(3)?;
    let year: Option<i32> = row.get(4)?;
    let technique: Option<String> = row.get(5)?;
    let width_cm: Option<i32> = row.get(6)?;
    let height_cm: Option<i32> = row.get(7)?;
    let price_cents: Option<i64> = row.get(8)?;
    let image_url: Option<String> = row.get(9)?;
    let available: bool = row.get(10)?;
    let created_at: String = row.get(11)?;
    let updated_at: String = row.get(12)?;

    Ok(Painting {
        id: parse_uuid(&id)?,
        artist_id: parse_uuid(&artist_id)?,
        title,
        description,
        year,
        technique,
        width_cm,
        height_cm,
        price_cents,
        image_url,
        available,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Convert a SQLite row to an Exhibition.
///
/// Expected columns: id, title, description, location, starts_on, ends_on,
/// image_url, created_at, updated_at
pub fn row_to_exhibition(row: &Row) -> rusqlite::Result<Exhibition> {
    let id: String = row.get(0)?;
    let title: String = row.get(1)?;
    let description: Option<String> = row.get(2)?;
    let location: Option<String> = row.get(3)?;
    let starts_on: String = row.get(4)?;
    let ends_on: String = row.get(5)?;
    let image_url: Option<String> = row.get(6)?;
    let created_at: String = row.get(7)?;
    let updated_at: String = row.get(8)?;

    Ok(Exhibition {
        id: parse_uuid(&id)?,
        title,
        description,
        location,
        starts_on: parse_date(&starts_on)?,
        ends_on: parse_date(&ends_on)?,
        image_url,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Convert a SQLite row to a NewsPost.
///
/// Expected columns: id, title, body, image_url, published_at, created_at,
/// updated_at
pub fn row_to_news_post(row: &Row) -> rusqlite::Result<NewsPost> {
    let id: String = row.get(0)?;
    let title: String = row.get(1)?;
    let body: String = row.get(2)?;
    let image_url: Option<String> = row.get(3)?;
    let published_at: String = row.get(4)?;
    let created_at: String = row.get(5)?;
    let updated_at: String = row.get(6)?;

    Ok(NewsPost {
        id: parse_uuid(&id)?,
        title,
        body,
        image_url,
        published_at: parse_datetime(&published_at)?,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Convert a SQLite row to a ShopItem.
///
/// Expected columns: id, title, description, price_cents, image_url, stock,
/// created_at, updated_at
pub fn row_to_shop_item(row: &Row) -> rusqlite::Result<ShopItem> {
    let id: String = row.get(0)?;
    let title: String = row.get(1)?;
    let description: Option<String> = row.get(2)?;
    let price_cents: i64 = row.get(3)?;
    let image_url: Option<String> = row.get(4)?;
    let stock: i64 = row.get(5)?;
    let created_at: String = row.get(6)?;
    let updated_at: String = row.get(7)?;

    Ok(ShopItem {
        id: parse_uuid(&id)?,
        title,
        description,
        price_cents,
        image_url,
        stock,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Convert a SQLite row to a PickupPoint.
///
/// Expected columns: id, name, address, city, created_at, updated_at
pub fn row_to_pickup_point(row: &Row) -> rusqlite::Result<PickupPoint> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let address: String = row.get(2)?;
    let city: String = row.get(3)?;
    let created_at: String = row.get(4)?;
    let updated_at: String = row.get(5)?;

    Ok(PickupPoint {
        id: parse_uuid(&id)?,
        name,
        address,
        city,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Convert a SQLite row to an Order.
///
/// Expected columns: id, customer_name, customer_email, customer_phone,
/// delivery_method, pickup_point_id, delivery_address, comment, total_cents,
/// status, created_at, updated_at
pub fn row_to_order(row: &Row) -> rusqlite::Result<Order> {
    let id: String = row.get(0)?;
    let customer_name: String = row.get(1)?;
    let customer_email: String = row.get(2)?;
    let customer_phone: Option<String> = row.get(3)?;
    let delivery_method: String = row.get(4)?;
    let pickup_point_id: Option<String> = row.get(5)?;
    let delivery_address: Option<String> = row.get(6)?;
    let comment: Option<String> = row.get(7)?;
    let total_cents: i64 = row.get(8)?;
    let status: String = row.get(9)?;
    let created_at: String = row.get(10)?;
    let updated_at: String = row.get(11)?;

    Ok(Order {
        id: parse_uuid(&id)?,
        customer_name,
        customer_email,
        customer_phone,
        delivery: columns_to_delivery(&delivery_method, pickup_point_id, delivery_address)?,
        comment,
        total_cents,
        status: parse_status(&status)?,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Convert a SQLite row to an OrderItem.
///
/// Expected columns: id, order_id, shop_item_id, title, price_cents, quantity
pub fn row_to_order_item(row: &Row) -> rusqlite::Result<OrderItem> {
    let id: String = row.get(0)?;
    let order_id: String = row.get(1)?;
    let shop_item_id: String = row.get(2)?;
    let title: String = row.get(3)?;
    let price_cents: i64 = row.get(4)?;
    let quantity: i64 = row.get(5)?;

    Ok(OrderItem {
        id: parse_uuid(&id)?,
        order_id: parse_uuid(&order_id)?,
        shop_item_id: parse_uuid(&shop_item_id)?,
        title,
        price_cents,
        quantity,
    })
}

/// Convert a SQLite row to an AdminUser.
///
/// Expected columns: id, username, password_hash, created_at, updated_at
pub fn row_to_admin_user(row: &Row) -> rusqlite::Result<AdminUser> {
    let id: String = row.get(0)?;
    let username: String = row.get(1)?;
    let password_hash: String = row.get(2)?;
    let created_at: String = row.get(3)?;
    let updated_at: String = row.get(4)?;

    Ok(AdminUser {
        id: parse_uuid(&id)?,
        username,
        password_hash,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Splits a DeliveryMethod into its three storage columns:
/// (method, pickup_point_id, delivery_address).
pub fn delivery_to_columns(delivery: &DeliveryMethod) -> (&'static str, Option<String>, Option<String>) {
    match delivery {
        DeliveryMethod::Pickup { pickup_point_id } => {
            ("pickup", Some(pickup_point_id.to_string()), None)
        }
        DeliveryMethod::Courier { address } => ("courier", None, Some(address.clone())),
    }
}

/// Rebuilds a DeliveryMethod from its storage columns.
fn columns_to_delivery(
    method: &str,
    pickup_point_id: Option<String>,
    delivery_address: Option<String>,
) -> rusqlite::Result<DeliveryMethod> {
    match method {
        "pickup" => {
            let id = pickup_point_id.ok_or_else(|| invalid_data("pickup order missing point id"))?;
            Ok(DeliveryMethod::Pickup {
                pickup_point_id: parse_uuid(&id)?,
            })
        }
        "courier" => {
            let address =
                delivery_address.ok_or_else(|| invalid_data("courier order missing address"))?;
            Ok(DeliveryMethod::Courier { address })
        }
        other => Err(invalid_data(&format!("Unknown delivery method: {other}"))),
    }
}

/// Serialize OrderStatus to its storage string.
pub fn status_to_string(status: &OrderStatus) -> &'static str {
    status.as_str()
}

/// Format a DateTime<Utc> for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Format a NaiveDate for SQLite storage (YYYY-MM-DD).
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// ============================================================================
// Helper functions
// ============================================================================

fn invalid_data(msg: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, msg.to_string())),
    )
}

/// Parse a UUID from string.
fn parse_uuid(s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Parse a date from ISO 8601 string (YYYY-MM-DD).
fn parse_date(s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Parse OrderStatus from its storage string.
fn parse_status(s: &str) -> rusqlite::Result<OrderStatus> {
    OrderStatus::parse(s).map_err(|e| invalid_data(&e.to_string()))
}
