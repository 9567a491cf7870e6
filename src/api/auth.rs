//! Login, register, and logout operations.
//!
//! The side effects of these endpoints (persisting or clearing the
//! credential and profile) are applied by the HTTP client's response
//! pipeline, not here; these functions only shape the request and decode
//! the envelope.

use serde::{Deserialize, Serialize};

use crate::api::{parse_envelope, ApiError, ApiSuccess};
use crate::auth::AuthData;
use crate::clients::HttpClient;
use crate::paths;

/// Request body for the login and register endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthBody {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Signs in with an email/password pair.
///
/// On success the HTTP client has already persisted the credential and
/// profile from the response before this function returns.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on rejected credentials fields (422)
/// and [`ApiError`] variants for other failures.
pub async fn login(client: &HttpClient, body: &AuthBody) -> Result<ApiSuccess<AuthData>, ApiError> {
    let response = client
        .post(paths::LOGIN, Some(serde_json::to_value(body)?))
        .await?;
    parse_envelope(response)
}

/// Creates an account with an email/password pair.
///
/// Shares the login endpoint's envelope and side effects.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on rejected fields (422) and
/// [`ApiError`] variants for other failures.
pub async fn register(
    client: &HttpClient,
    body: &AuthBody,
) -> Result<ApiSuccess<AuthData>, ApiError> {
    let response = client
        .post(paths::REGISTER, Some(serde_json::to_value(body)?))
        .await?;
    parse_envelope(response)
}

/// Signs out the current session.
///
/// On success the HTTP client has already cleared the stored credential
/// and profile. Returns the server's outcome message.
///
/// # Errors
///
/// Returns [`ApiError`] variants on failure.
pub async fn logout(client: &HttpClient) -> Result<String, ApiError> {
    let response = client.post(paths::LOGOUT, None).await?;
    Ok(response.message().unwrap_or_default().to_string())
}
