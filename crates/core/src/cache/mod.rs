//! Byte-cache abstraction used by the currency rates service.

mod error;
mod keys;
mod traits;

pub use error::{CacheError, Result};
pub use keys::rates_key;
pub use traits::Cache;
