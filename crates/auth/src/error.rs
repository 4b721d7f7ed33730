use thiserror::Error;

/// Errors that can occur during authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid or expired token")]
    InvalidToken,
    #[error("Crypto error: {0}")]
    Crypto(String),
}

/// Result type for authentication operations.
pub type Result<T> = std::result::Result<T, AuthError>;
