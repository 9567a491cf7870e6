//! Bearer credential type for request authentication.
//!
//! This module provides the [`Credential`] newtype wrapping the opaque
//! access token issued by the login and register endpoints.
//!
//! # Security
//!
//! The [`Credential`] type implements a custom [`Debug`] trait that masks
//! the token value, preventing accidental exposure in logs.
//!
//! # Example
//!
//! ```rust
//! use storefront_api::Credential;
//!
//! let credential = Credential::new("opaque-access-token");
//! assert_eq!(credential.as_str(), "opaque-access-token");
//!
//! // Debug output masks the token value
//! let debug_output = format!("{:?}", credential);
//! assert!(debug_output.contains("*****"));
//! assert!(!debug_output.contains("opaque-access-token"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP header used to attach the credential to outgoing requests.
///
/// The backend expects the bare token as the `Authorization` value, without
/// a `Bearer ` prefix.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// An opaque bearer access token for the storefront API.
///
/// Credentials are set by the HTTP client when a login or register response
/// is observed, and cleared on logout or unauthorized responses. They carry
/// no structure the client needs to inspect.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Creates a credential from a raw token value.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token value.
    ///
    /// This is the exact string sent as the `Authorization` header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the token value is empty.
    ///
    /// An empty credential is never attached to a request.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential(*****)")
    }
}

impl From<String> for Credential {
    fn from(token: String) -> Self {
        Self(token)
    }
}
