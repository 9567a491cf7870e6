//! # Storefront API Rust SDK
//!
//! A Rust client SDK for a storefront e-commerce REST API, providing
//! type-safe configuration, bearer-credential handling, typed resource
//! operations, and a client-local cart mirror with optimistic updates.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`StorefrontConfig`] and [`StorefrontConfigBuilder`]
//! - A process-wide [`TokenStore`] for the [`Credential`] and [`Profile`],
//!   with synchronous clear notifications
//! - An async [`HttpClient`] that attaches the stored credential to every
//!   request and applies auth side effects from login/register/logout and
//!   unauthorized responses
//! - Typed operations for auth, purchases, products, categories, and the
//!   user profile via the [`api`] module
//! - A [`cart::CartMirror`] implementing merge-on-fetch reconciliation,
//!   optimistic quantity updates, batch deletion, and checkout submission
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_api::{HttpClient, StorefrontConfig, TokenStore};
//!
//! let config = StorefrontConfig::builder().build().unwrap();
//! let store = Arc::new(TokenStore::new());
//! let client = HttpClient::new(&config, Arc::clone(&store));
//! assert!(!store.is_authenticated());
//! ```
//!
//! ## Signing in
//!
//! ```rust,ignore
//! use storefront_api::api::auth::{self, AuthBody};
//!
//! let body = AuthBody {
//!     email: "user@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//! let auth = auth::login(&client, &body).await?;
//! // The client has already persisted the credential and profile:
//! assert!(store.is_authenticated());
//! println!("signed in as {}", auth.data.user.email);
//! ```
//!
//! ## Working with the cart
//!
//! ```rust,ignore
//! use storefront_api::cart::CartMirror;
//!
//! let mut cart = CartMirror::new();
//! cart.refresh(&client).await?;
//!
//! cart.check_all(true);
//! println!("payable: {}", cart.total_payable());
//!
//! // Optimistic quantity edit: the line is locked until the server
//! // confirms and the mirror re-merges.
//! cart.update_quantity(&client, "purchase-id", 3).await?;
//!
//! let bought = cart.buy_checked(&client).await?;
//! println!("bought {} lines", bought.len());
//! ```
//!
//! ## Error handling
//!
//! Failures surface as [`api::ApiError`]: validation failures (422) carry a
//! field-to-message map for form state, unauthorized responses (401) clear
//! the stored credential before the error returns, and every other non-2xx
//! status has already raised a transient [`Notify`] notification.
//!
//! ## Design Principles
//!
//! - **Explicit shared state**: auth state lives in one [`TokenStore`]
//!   passed by reference; the HTTP client is its only network-driven writer
//! - **Fail-fast validation**: configuration newtypes validate on construction
//! - **Thread-safe**: all shared types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio async runtime
//! - **No hidden retries**: the fixed request timeout fails a call outright

pub mod api;
pub mod auth;
pub mod cart;
pub mod clients;
pub mod config;
pub mod error;
pub mod paths;

// Re-export public types at crate root for convenience
pub use auth::{AuthData, Credential, Profile, TokenStore, AUTHORIZATION_HEADER};
pub use config::{ApiBaseUrl, StorefrontConfig, StorefrontConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, Notify, TracingNotify,
};

// Re-export API envelope and error types for convenience
pub use api::{ApiError, ApiSuccess};
