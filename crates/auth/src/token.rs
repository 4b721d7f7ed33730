//! JWT issue and verify for admin sessions.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AuthConfig, AuthError, Result};

/// Claims carried by an admin bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Admin account ID.
    pub sub: Uuid,
    pub username: String,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
}

/// Issues a signed HS256 token for the given admin account.
pub fn issue_token(admin_id: Uuid, username: &str, config: &AuthConfig) -> Result<String> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: admin_id,
        username: username.to_string(),
        exp: now + config.token_ttl_seconds as i64,
        iat: now,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AuthError::Crypto(e.to_string()))
}

/// Verifies a token's signature and expiry, returning its claims.
pub fn verify_token(token: &str, config: &AuthConfig) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::InvalidToken)
}
