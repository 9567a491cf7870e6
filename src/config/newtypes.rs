//! Validated newtypes for configuration values.
//!
//! This module provides the [`ApiBaseUrl`] newtype, which validates the
//! backend endpoint on construction so that invalid values fail fast
//! instead of surfacing as malformed request URLs at call time.

use crate::error::ConfigError;

/// A validated base URL for the storefront backend.
///
/// The URL must be absolute with an `http` or `https` scheme and a non-empty
/// host. A trailing slash is stripped during normalization so request paths
/// can always be joined with a single `/`.
///
/// # Example
///
/// ```rust
/// use storefront_api::ApiBaseUrl;
///
/// let url = ApiBaseUrl::new("https://api-ecom.duthanhduoc.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api-ecom.duthanhduoc.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("api-ecom.duthanhduoc.com"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiBaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no `http(s)`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let mut url = url.trim().to_string();

        // Normalize away trailing slashes so paths join cleanly
        while url.ends_with('/') {
            url.pop();
        }

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3; // Skip "://"
        if host_start >= url.len() {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        let host = &url[host_start..host_end];
        if host.is_empty() {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl AsRef<str> for ApiBaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
