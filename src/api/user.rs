//! Account profile operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{parse_envelope, ApiError, ApiSuccess};
use crate::auth::Profile;
use crate::clients::HttpClient;
use crate::paths;

/// Profile fields accepted by the update endpoint.
///
/// All fields are optional; `None` fields are omitted from the request so
/// the backend leaves them untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileBody {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Postal address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Date of birth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<DateTime<Utc>>,
    /// Avatar image reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Password change payload for the update endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePasswordBody {
    /// The current password.
    pub password: String,
    /// The replacement password.
    pub new_password: String,
}

/// Fetches the authenticated user's profile.
///
/// # Errors
///
/// Returns [`ApiError`] variants on failure.
pub async fn me(client: &HttpClient) -> Result<ApiSuccess<Profile>, ApiError> {
    let response = client.get(paths::ME, None).await?;
    parse_envelope(response)
}

/// Updates the authenticated user's profile.
///
/// Returns the updated profile and persists it to the token store so the
/// stored record tracks the server's.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on rejected fields (422) and
/// [`ApiError`] variants for other failures.
pub async fn update_profile(
    client: &HttpClient,
    body: &UpdateProfileBody,
) -> Result<ApiSuccess<Profile>, ApiError> {
    let response = client
        .put(paths::USER, serde_json::to_value(body)?)
        .await?;
    let envelope: ApiSuccess<Profile> = parse_envelope(response)?;
    client.store().save_profile(envelope.data.clone());
    Ok(envelope)
}

/// Changes the authenticated user's password.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when the current password is wrong or
/// the new one is rejected (422), and [`ApiError`] variants for other
/// failures.
pub async fn change_password(
    client: &HttpClient,
    body: &ChangePasswordBody,
) -> Result<ApiSuccess<Profile>, ApiError> {
    let response = client
        .put(paths::USER, serde_json::to_value(body)?)
        .await?;
    parse_envelope(response)
}
