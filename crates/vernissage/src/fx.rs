//! Exchange rate fetching with cache-aside.
//!
//! Rates come from an HTTP provider and are cached as JSON under a TTL.
//! When the provider is down and the cache still holds a table (even a
//! stale one after eviction has not caught up), the cached table is served
//! rather than failing the request.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use thiserror::Error;

use vernissage_core::cache::{rates_key, Cache};
use vernissage_core::fx::{parse_provider_payload, RateTable};

/// Errors produced while fetching rates.
#[derive(Debug, Error)]
pub enum RatesError {
    #[error("Rate provider unavailable: {0}")]
    Upstream(String),
    #[error("Invalid rate data: {0}")]
    InvalidData(String),
}

/// Fetches exchange rates from the configured provider, with caching.
#[derive(Clone)]
pub struct RatesClient {
    http: reqwest::Client,
    cache: Arc<dyn Cache>,
    provider_url: String,
    ttl: Duration,
}

impl RatesClient {
    pub fn new(cache: Arc<dyn Cache>, provider_url: String, ttl: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            cache,
            provider_url,
            ttl,
        }
    }

    /// Returns the rate table for the given base currency.
    ///
    /// Serves from cache while fresh; otherwise fetches from the provider
    /// and refreshes the cache. A provider failure falls back to whatever
    /// the cache still holds.
    pub async fn get_rates(&self, base: &str) -> Result<RateTable, RatesError> {
        let key = rates_key(base);

        if let Some(table) = self.read_cached(&key).await {
            if Utc::now() - table.fetched_at
                < chrono::Duration::from_std(self.ttl).unwrap_or(chrono::Duration::zero())
            {
                return Ok(table);
            }
        }

        match self.fetch(base).await {
            Ok(table) => {
                self.write_cached(&key, &table).await;
                Ok(table)
            }
            Err(e) => {
                // Stale table beats no table
                if let Some(table) = self.read_cached(&key).await {
                    tracing::warn!(error = %e, base, "Rate provider failed, serving cached rates");
                    return Ok(table);
                }
                Err(e)
            }
        }
    }

    async fn fetch(&self, base: &str) -> Result<RateTable, RatesError> {
        let url = format!("{}?base={}", self.provider_url, base.to_ascii_uppercase());
        tracing::debug!(%url, "Fetching exchange rates");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| RatesError::Upstream(e.to_string()))?
            .error_for_status()
            .map_err(|e| RatesError::Upstream(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| RatesError::Upstream(e.to_string()))?;

        parse_provider_payload(&body, Utc::now()).map_err(|e| RatesError::InvalidData(e.to_string()))
    }

    async fn read_cached(&self, key: &str) -> Option<RateTable> {
        let bytes = self.cache.get(key).await.ok()??;
        serde_json::from_slice(&bytes).ok()
    }

    async fn write_cached(&self, key: &str, table: &RateTable) {
        let Ok(bytes) = serde_json::to_vec(table) else {
            return;
        };
        // TTL is enforced by fetched_at above; the cache TTL is a backstop
        // at twice the freshness window so a stale table survives one miss.
        if let Err(e) = self.cache.set(key, &bytes, Some(self.ttl * 2)).await {
            tracing::warn!(error = %e, key, "Failed to cache rates");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use std::collections::BTreeMap;

    fn client_with_cache() -> (RatesClient, Arc<dyn Cache>) {
        let cache: Arc<dyn Cache> = Arc::new(MemoryCache::new(16));
        let client = RatesClient::new(
            cache.clone(),
            // Unroutable address so fetches always fail in tests
            "http://127.0.0.1:1/latest".to_string(),
            Duration::from_secs(600),
        );
        (client, cache)
    }

    fn table(base: &str) -> RateTable {
        let mut rates = BTreeMap::new();
        rates.insert("USD".to_string(), 1.09);
        RateTable {
            base: base.to_string(),
            rates,
            fetched_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_fresh_cache_hit_skips_fetch() {
        let (client, cache) = client_with_cache();
        let table = table("EUR");
        let bytes = serde_json::to_vec(&table).unwrap();
        cache.set(&rates_key("EUR"), &bytes, None).await.unwrap();

        let fetched = client.get_rates("EUR").await.unwrap();
        assert_eq!(fetched.base, "EUR");
        assert_eq!(fetched.rate("USD"), Some(1.09));
    }

    #[tokio::test]
    async fn test_stale_cache_served_when_provider_down() {
        let (client, cache) = client_with_cache();
        let mut stale = table("EUR");
        stale.fetched_at = Utc::now() - chrono::Duration::hours(2);
        let bytes = serde_json::to_vec(&stale).unwrap();
        cache.set(&rates_key("EUR"), &bytes, None).await.unwrap();

        let fetched = client.get_rates("EUR").await.unwrap();
        assert_eq!(fetched.base, "EUR");
    }

    #[tokio::test]
    async fn test_cold_cache_and_dead_provider_is_an_error() {
        let (client, _cache) = client_with_cache();
        let err = client.get_rates("EUR").await.unwrap_err();
        assert!(matches!(err, RatesError::Upstream(_)));
    }
}
