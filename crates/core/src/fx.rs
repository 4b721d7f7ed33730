//! Currency conversion logic.
//!
//! Parsing of the upstream rate provider payload and the conversion math
//! are pure; fetching and caching live in the server crate.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display currencies offered by the storefront when none are configured.
pub const DEFAULT_CURRENCIES: &[&str] = &["EUR", "USD", "GBP"];

/// Errors produced while handling rate data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FxError {
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
    #[error("Invalid provider payload: {0}")]
    InvalidPayload(String),
}

/// A table of exchange rates for one base currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub base: String,
    /// Units of target currency per one unit of base currency.
    pub rates: BTreeMap<String, f64>,
    pub fetched_at: DateTime<Utc>,
}

impl RateTable {
    /// Returns the rate for a target currency, if present.
    ///
    /// The base currency itself always converts at 1.0.
    pub fn rate(&self, currency: &str) -> Option<f64> {
        let currency = currency.to_ascii_uppercase();
        if currency == self.base {
            return Some(1.0);
        }
        self.rates.get(&currency).copied()
    }
}

/// Shape of the upstream provider response.
#[derive(Debug, Deserialize)]
struct ProviderPayload {
    base: String,
    rates: BTreeMap<String, f64>,
}

/// Parses a provider JSON payload into a [`RateTable`] stamped with the
/// given fetch time.
pub fn parse_provider_payload(body: &str, fetched_at: DateTime<Utc>) -> Result<RateTable, FxError> {
    let payload: ProviderPayload =
        serde_json::from_str(body).map_err(|e| FxError::InvalidPayload(e.to_string()))?;
    if payload.base.is_empty() {
        return Err(FxError::InvalidPayload("missing base currency".to_string()));
    }
    Ok(RateTable {
        base: payload.base.to_ascii_uppercase(),
        rates: payload
            .rates
            .into_iter()
            .map(|(k, v)| (k.to_ascii_uppercase(), v))
            .collect(),
        fetched_at,
    })
}

/// Validates a base currency against the configured display list.
pub fn validate_currency<'a>(code: &str, supported: &[&'a str]) -> Result<&'a str, FxError> {
    supported
        .iter()
        .find(|c| c.eq_ignore_ascii_case(code))
        .copied()
        .ok_or_else(|| FxError::UnsupportedCurrency(code.to_string()))
}

/// Converts an amount in minor units with the given rate, rounding half
/// away from zero.
pub fn convert_cents(amount_cents: i64, rate: f64) -> i64 {
    (amount_cents as f64 * rate).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_provider_payload() {
        let body = r#"{"base":"eur","date":"2026-08-01","rates":{"usd":1.09,"GBP":0.85}}"#;
        let table = parse_provider_payload(body, Utc::now()).unwrap();
        assert_eq!(table.base, "EUR");
        assert_eq!(table.rates.get("USD"), Some(&1.09));
        assert_eq!(table.rates.get("GBP"), Some(&0.85));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_provider_payload("not json", Utc::now()).unwrap_err();
        assert!(matches!(err, FxError::InvalidPayload(_)));
    }

    #[test]
    fn test_rate_for_base_is_identity() {
        let body = r#"{"base":"EUR","rates":{"USD":1.09}}"#;
        let table = parse_provider_payload(body, Utc::now()).unwrap();
        assert_eq!(table.rate("eur"), Some(1.0));
        assert_eq!(table.rate("usd"), Some(1.09));
        assert_eq!(table.rate("JPY"), None);
    }

    #[test]
    fn test_validate_currency() {
        assert_eq!(validate_currency("usd", DEFAULT_CURRENCIES), Ok("USD"));
        assert_eq!(
            validate_currency("XXX", DEFAULT_CURRENCIES),
            Err(FxError::UnsupportedCurrency("XXX".to_string()))
        );
    }

    #[test]
    fn test_convert_cents_rounds_half_up() {
        // 10.00 EUR at 1.085 = 10.85 USD
        assert_eq!(convert_cents(1_000, 1.085), 1_085);
        // 0.01 at 0.5 rounds away from zero
        assert_eq!(convert_cents(1, 0.5), 1);
        assert_eq!(convert_cents(3, 0.5), 2);
    }
}
