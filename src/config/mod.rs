//! Configuration types for the storefront API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for communication with the storefront backend.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StorefrontConfig`]: The main configuration struct holding all SDK settings
//! - [`StorefrontConfigBuilder`]: A builder for constructing [`StorefrontConfig`] instances
//! - [`ApiBaseUrl`]: A validated backend endpoint newtype
//!
//! # Example
//!
//! ```rust
//! use storefront_api::{StorefrontConfig, ApiBaseUrl};
//! use std::time::Duration;
//!
//! let config = StorefrontConfig::builder()
//!     .base_url(ApiBaseUrl::new("https://api.example.com").unwrap())
//!     .timeout(Duration::from_secs(5))
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::ApiBaseUrl;

use std::time::Duration;

use crate::error::ConfigError;

/// Default backend endpoint when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api-ecom.duthanhduoc.com";

/// Default request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the storefront API SDK.
///
/// This struct holds all configuration needed for SDK operations: the backend
/// endpoint, the fixed request timeout, and an optional User-Agent prefix.
///
/// # Thread Safety
///
/// `StorefrontConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use storefront_api::StorefrontConfig;
///
/// let config = StorefrontConfig::builder().build().unwrap();
/// assert_eq!(config.base_url().as_ref(), "https://api-ecom.duthanhduoc.com");
/// ```
#[derive(Clone, Debug)]
pub struct StorefrontConfig {
    base_url: ApiBaseUrl,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl StorefrontConfig {
    /// Creates a new builder for constructing a `StorefrontConfig`.
    #[must_use]
    pub fn builder() -> StorefrontConfigBuilder {
        StorefrontConfigBuilder::new()
    }

    /// Returns the backend base URL.
    #[must_use]
    pub const fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }

    /// Returns the fixed request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify StorefrontConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontConfig>();
};

/// Builder for constructing [`StorefrontConfig`] instances.
///
/// All fields have defaults, so `StorefrontConfig::builder().build()` yields
/// a configuration pointed at the production backend.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `timeout`: [`DEFAULT_TIMEOUT`] (10 seconds)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct StorefrontConfigBuilder {
    base_url: Option<ApiBaseUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl StorefrontConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend base URL.
    #[must_use]
    pub fn base_url(mut self, url: ApiBaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the fixed request timeout.
    ///
    /// Requests that exceed this duration fail outright; there is no
    /// timeout-driven retry.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StorefrontConfig`], validating the provided values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroTimeout`] if a zero timeout was supplied,
    /// or [`ConfigError::InvalidBaseUrl`] if the compiled-in default URL
    /// fails validation (which indicates a packaging defect, not user error).
    pub fn build(self) -> Result<StorefrontConfig, ConfigError> {
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::ZeroTimeout);
        }

        let base_url = match self.base_url {
            Some(url) => url,
            None => ApiBaseUrl::new(DEFAULT_BASE_URL)?,
        };

        Ok(StorefrontConfig {
            base_url,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
