use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use vernissage_auth::{issue_token, verify_password};

use crate::models::LoginRequest;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: u64,
}

/// Admin login (POST /api/admin/login).
///
/// The response never distinguishes a missing account from a wrong
/// password.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, &'static str)> {
    const REJECTED: (StatusCode, &str) = (StatusCode::UNAUTHORIZED, "Invalid credentials");

    let admin = state
        .admins
        .get_admin_by_username(&payload.username)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Admin lookup failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Login unavailable")
        })?
        .ok_or(REJECTED)?;

    let valid = verify_password(&payload.password, &admin.password_hash).map_err(|e| {
        tracing::error!(error = %e, "Password verification failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Login unavailable")
    })?;
    if !valid {
        return Err(REJECTED);
    }

    let token = issue_token(admin.id, &admin.username, &state.auth).map_err(|e| {
        tracing::error!(error = %e, "Token issue failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Login unavailable")
    })?;

    tracing::info!(admin = %admin.username, "Admin logged in");
    Ok(Json(LoginResponse {
        token,
        expires_in: state.auth.token_ttl_seconds,
    }))
}
