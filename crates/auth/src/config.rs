use std::env;

/// Authentication configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 signing secret for admin tokens.
    pub jwt_secret: String,
    /// Token lifetime in seconds (default: 3600).
    pub token_ttl_seconds: u64,
}

impl AuthConfig {
    /// Load configuration from environment variables.
    ///
    /// - `JWT_SECRET` - signing secret (default: "vernissage-dev-secret",
    ///   meant for local development only)
    /// - `JWT_TTL_SECONDS` - token lifetime (default: 3600)
    pub fn from_env() -> Self {
        Self {
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "vernissage-dev-secret".to_string()),
            token_ttl_seconds: env::var("JWT_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
