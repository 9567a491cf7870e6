//! HTTP response types for the storefront API SDK.
//!
//! This module provides the [`HttpResponse`] type for accessing parsed
//! response data from the storefront backend.

use std::collections::HashMap;

/// An HTTP response from the storefront backend.
///
/// Contains the response status code, headers (lower-cased names), and the
/// body parsed as JSON. The backend wraps every payload in a
/// `{ message, data }` envelope; [`message`](Self::message) reads the
/// former, the API layer deserializes the latter.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the envelope's `message` field, if present.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(serde_json::Value::as_str)
    }

    /// Returns the envelope's `data` field, if present.
    #[must_use]
    pub fn data(&self) -> Option<&serde_json::Value> {
        self.body.get("data")
    }
}
