//! HTTP client types for storefront API communication.
//!
//! This module provides the foundational HTTP client layer for making
//! authenticated requests to the storefront backend. It handles
//! request/response processing, credential attachment, and the auth side
//! effects driven by specific response shapes.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`Notify`]: Hook for user-visible notifications and session resets
//!
//! # Side effects
//!
//! The client inspects every response:
//!
//! - 2xx to the login/register paths persists the credential and profile
//! - 2xx to the logout path clears both
//! - non-2xx other than 422 raises a transient error notification
//! - 401 clears stored auth state and raises the session-expired hook
//!
//! There is no retry loop: the fixed request timeout causes a call to fail
//! outright, and the failure propagates to the caller.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod notify;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use notify::{Notify, TracingNotify};

/// HTTP status codes the response pipeline gives special treatment.
pub mod status {
    /// The session credential is missing, invalid, or expired.
    pub const UNAUTHORIZED: u16 = 401;

    /// The request body failed server-side validation; the error envelope
    /// carries a field-to-message map.
    pub const UNPROCESSABLE_ENTITY: u16 = 422;
}
