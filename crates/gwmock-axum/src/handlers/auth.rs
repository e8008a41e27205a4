//! Login handler.
//!
//! Issues the configured static token to anyone who sends a well-formed
//! credentials body. Credentials are not checked.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::error::HttpError;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(alias = "username")]
    pub email: String,
    pub password: String,
}

/// Login response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Issue the static access token.
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LoginResponse>, HttpError> {
    let req: LoginRequest =
        serde_json::from_slice(&body).map_err(|e| HttpError::MalformedRequest(e.to_string()))?;

    tracing::info!(user = %req.email, "issued access token");

    Ok(Json(LoginResponse {
        access_token: state.settings.access_token.clone(),
        token_type: "bearer".to_string(),
    }))
}
