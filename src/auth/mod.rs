//! Authentication state for the storefront API.
//!
//! This module provides:
//!
//! - [`Credential`]: the opaque bearer access token
//! - [`Profile`]: the persisted user account record
//! - [`TokenStore`]: durable, synchronous storage for both, with clear
//!   notifications
//! - [`AuthData`]: the payload of the auth envelope returned by the login
//!   and register endpoints
//!
//! The HTTP client is the only component that mutates the [`TokenStore`]
//! as a result of network activity; everything else reads it.

mod credential;
mod profile;
mod token_store;

pub use credential::{Credential, AUTHORIZATION_HEADER};
pub use profile::Profile;
pub use token_store::TokenStore;

use serde::{Deserialize, Serialize};

/// Payload of a successful login or register response.
///
/// The backend wraps this in the standard `{ message, data }` envelope.
/// `refresh_token` is part of the wire contract but the SDK performs no
/// refresh flow; the field is parsed and exposed, nothing more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthData {
    /// The bearer access token to attach to subsequent requests.
    pub access_token: String,

    /// Token expiry, as reported by the backend.
    pub expires: String,

    /// Refresh token, when the backend issues one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// The authenticated user's profile.
    pub user: Profile,
}
