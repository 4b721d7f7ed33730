//! HTTP request handlers.
//!
//! Public storefront handlers are read-only except for checkout; everything
//! that mutates the catalog lives behind the admin bearer-token extractor.

pub mod artists;
pub mod exhibitions;
pub mod health;
pub mod login;
pub mod news;
pub mod orders;
pub mod paintings;
pub mod pickup_points;
pub mod rates;
pub mod shop;

use uuid::Uuid;

use vernissage_core::storage::RepositoryError;

use crate::error::AppError;

/// Builds a 404-mapping error for a missing entity.
fn not_found(entity_type: &'static str, id: Uuid) -> AppError {
    AppError(
        RepositoryError::NotFound {
            entity_type,
            id: id.to_string(),
        }
        .into(),
    )
}

/// Builds a 400-mapping error for a rejected request.
fn bad_request(message: impl Into<String>) -> AppError {
    AppError(RepositoryError::InvalidData(message.into()).into())
}
