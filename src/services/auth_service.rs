// ============================================================================
// AUTH SERVICE - Admin sign-in and sign-out
// ============================================================================

use serde_json::json;

use super::api_client::{ApiClient, ApiError, ApiRequest};
use super::endpoints::LOGIN;
use crate::models::{LoginRequest, LoginResponse};

pub const LOGIN_FALLBACK: &str = "Login failed. Please try again.";

/// Sign in and persist the returned token in the session
pub async fn login(client: &ApiClient, credentials: &LoginRequest) -> Result<(), ApiError> {
    log::info!("🔐 [AUTH] Signing in {}", credentials.email);
    let body = json!({ "email": credentials.email, "password": credentials.password });
    let envelope = client.send(ApiRequest::post(LOGIN).json(body)).await?;

    let response: LoginResponse = envelope.record("").unwrap_or_default();
    let token = response
        .token
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| ApiError::Rejected { message: response.message.clone() })?;

    client
        .session()
        .sign_in(&token)
        .map_err(|e| ApiError::Storage(e.to_string()))?;
    log::info!("✅ [AUTH] Signed in");
    Ok(())
}

/// Message for a failed sign-in
pub fn login_error_message(error: &ApiError) -> String {
    match error {
        // A 401 here means bad credentials, not an expired session
        ApiError::Unauthorized => LOGIN_FALLBACK.to_string(),
        other => other.user_message(LOGIN_FALLBACK),
    }
}

pub fn logout(client: &ApiClient) {
    client.session().clear();
    log::info!("🚪 [AUTH] Signed out");
}
