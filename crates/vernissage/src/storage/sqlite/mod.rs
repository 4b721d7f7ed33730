//! SQLite storage backend.
//!
//! Implements the repository traits from `vernissage_core::storage` on top
//! of `tokio-rusqlite`.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
