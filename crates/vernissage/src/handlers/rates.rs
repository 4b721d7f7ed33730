use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use vernissage_core::fx::{validate_currency, RateTable};

use crate::fx::RatesError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RatesQuery {
    /// Base currency code. Defaults to EUR, the shop's pricing currency.
    #[serde(default = "default_base")]
    pub base: String,
}

fn default_base() -> String {
    "EUR".to_string()
}

/// Get the current exchange rate table (GET /api/rates).
///
/// Served from cache while fresh; a stale table is served when the
/// upstream provider is unavailable.
pub async fn get(
    State(state): State<AppState>,
    Query(query): Query<RatesQuery>,
) -> Result<Json<RateTable>, (StatusCode, String)> {
    let supported: Vec<&str> = state
        .config
        .supported_currencies
        .iter()
        .map(String::as_str)
        .collect();
    let base = validate_currency(&query.base, &supported)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let table = state.rates.get_rates(base).await.map_err(|e| match e {
        RatesError::Upstream(_) => (StatusCode::BAD_GATEWAY, e.to_string()),
        RatesError::InvalidData(_) => (StatusCode::BAD_GATEWAY, e.to_string()),
    })?;

    Ok(Json(table))
}
