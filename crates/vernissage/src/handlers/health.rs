use axum::Json;
use serde_json::{json, Value};

/// Health check endpoint (GET /health).
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
