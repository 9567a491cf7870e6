//! User profile record persisted alongside the credential.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user account record as returned by the backend.
///
/// The profile is written whenever a login, register, or profile-update
/// response is observed, and cleared together with the credential. Serde
/// round-trips losslessly, so a stored profile always deep-equals the
/// response body it was taken from.
///
/// # Example
///
/// ```rust
/// use storefront_api::Profile;
///
/// let profile: Profile = serde_json::from_value(serde_json::json!({
///     "_id": "u-1",
///     "email": "jo@example.com",
///     "roles": ["User"],
///     "createdAt": "2024-01-01T00:00:00.000Z",
///     "updatedAt": "2024-01-01T00:00:00.000Z"
/// })).unwrap();
/// assert_eq!(profile.id, "u-1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Server-assigned user identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Account email address.
    pub email: String,

    /// Display name, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Postal address, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Phone number, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Avatar image reference, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Date of birth, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<DateTime<Utc>>,

    /// Roles granted to the account (e.g., "User", "Admin").
    #[serde(default)]
    pub roles: Vec<String>,

    /// When the account was created.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    /// When the account was last updated.
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}
