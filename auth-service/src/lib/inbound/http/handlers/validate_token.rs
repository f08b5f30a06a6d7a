use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Capability check used by callers that cannot validate tokens locally.
///
/// Always answers 200 with a bare boolean; expired, tampered, and malformed
/// tokens are indistinguishable at this boundary.
pub async fn validate_token(
    State(state): State<AppState>,
    body: String,
) -> ApiSuccess<ValidateTokenResponseData> {
    // Accept a bare token or a JSON-encoded string
    let token = body.trim().trim_matches('"');

    let valid = state.auth_service.validate_token(token).await;

    ApiSuccess::new(StatusCode::OK, ValidateTokenResponseData { valid })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateTokenResponseData {
    pub valid: bool,
}
