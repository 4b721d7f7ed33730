//! Admin authentication: Argon2 password hashing and JWT bearer tokens.
//!
//! The storefront is anonymous; only the back-office API authenticates.
//! Login verifies credentials against the stored Argon2 hash and issues a
//! short-lived HS256 token, which the [`AdminUser`] extractor checks on
//! every admin route.

mod config;
mod error;
mod extractors;
mod password;
mod token;

pub use config::AuthConfig;
pub use error::{AuthError, Result};
pub use extractors::AdminUser;
pub use password::{hash_password, verify_password};
pub use token::{issue_token, verify_token, Claims};
