use std::{env, time::Duration};

use vernissage_core::fx::DEFAULT_CURRENCIES;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "vernissage.db")
    pub sqlite_path: String,
    /// Minimum order total in cents; 0 disables the check (default: 0)
    pub min_order_cents: i64,
    /// Upstream currency rate provider base URL
    pub rates_provider_url: String,
    /// How long a fetched rate table stays fresh (default: 600 seconds)
    pub rates_ttl_seconds: u64,
    /// Currency codes accepted as a rates base (default: EUR, USD, GBP)
    pub supported_currencies: Vec<String>,
    /// Maximum number of cache entries (default: 1,000)
    pub cache_max_entries: usize,
    /// Back-office notification recipient; None disables admin emails
    pub mail_admin: Option<String>,
    /// Admin account seeded on first run, if both variables are set
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "vernissage.db")
    /// - `MIN_ORDER_CENTS` - minimum order total, 0 disables (default: 0)
    /// - `RATES_PROVIDER_URL` - rate provider endpoint
    ///   (default: "https://api.frankfurter.dev/v1/latest")
    /// - `RATES_TTL_SECONDS` - rate table freshness window (default: 600)
    /// - `SUPPORTED_CURRENCIES` - comma-separated rate base codes
    ///   (default: "EUR,USD,GBP")
    /// - `CACHE_MAX_ENTRIES` - maximum cache entries (default: 1,000)
    /// - `MAIL_ADMIN` - back-office notification address (unset: disabled)
    /// - `ADMIN_USERNAME` / `ADMIN_PASSWORD` - first-run admin seeding
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "vernissage.db".to_string()),
            min_order_cents: env::var("MIN_ORDER_CENTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            rates_provider_url: env::var("RATES_PROVIDER_URL")
                .unwrap_or_else(|_| "https://api.frankfurter.dev/v1/latest".to_string()),
            rates_ttl_seconds: env::var("RATES_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(600),
            supported_currencies: env::var("SUPPORTED_CURRENCIES")
                .map(|v| parse_currency_list(&v))
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(default_currencies),
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1_000),
            mail_admin: env::var("MAIL_ADMIN").ok().filter(|v| !v.is_empty()),
            admin_username: env::var("ADMIN_USERNAME").ok().filter(|v| !v.is_empty()),
            admin_password: env::var("ADMIN_PASSWORD").ok().filter(|v| !v.is_empty()),
        }
    }

    /// Get the rate table TTL as a Duration.
    pub fn rates_ttl(&self) -> Duration {
        Duration::from_secs(self.rates_ttl_seconds)
    }
}

fn parse_currency_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|code| code.trim().to_ascii_uppercase())
        .filter(|code| !code.is_empty())
        .collect()
}

fn default_currencies() -> Vec<String> {
    DEFAULT_CURRENCIES.iter().map(|c| c.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
