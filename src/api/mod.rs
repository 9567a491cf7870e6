//! Typed operations against the storefront REST API.
//!
//! Each submodule mirrors one backend resource: [`auth`], [`purchase`],
//! [`product`], [`category`], and [`user`]. Operations are free async
//! functions taking a shared [`HttpClient`](crate::HttpClient); every
//! payload is wrapped in the backend's `{ message, data }` envelope,
//! surfaced here as [`ApiSuccess`].
//!
//! # Error taxonomy
//!
//! [`ApiError`] maps the HTTP layer's failures onto the categories callers
//! actually recover from:
//!
//! - [`ApiError::Validation`] (422): a field-to-message map to project onto
//!   form state; no notification was raised
//! - [`ApiError::Unauthorized`] (401): the session is gone; stored auth
//!   state was already cleared by the HTTP client
//! - [`ApiError::Response`]: any other non-2xx status; a transient
//!   notification was already raised
//! - [`ApiError::Http`]: transport failures, propagated untouched

pub mod auth;
pub mod category;
pub mod product;
pub mod purchase;
pub mod user;

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::clients::{status, HttpError, HttpResponse};

/// The backend's success envelope: `{ message, data }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSuccess<T> {
    /// Human-readable outcome description.
    pub message: String,
    /// The operation's payload.
    pub data: T,
}

/// Error type for storefront API operations.
///
/// # Example
///
/// ```rust,ignore
/// match api::auth::login(&client, &body).await {
///     Ok(auth) => println!("hello {}", auth.data.user.email),
///     Err(ApiError::Validation { errors, .. }) => {
///         for (field, message) in &errors {
///             println!("{field}: {message}");
///         }
///     }
///     Err(e) => println!("login failed: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed server-side validation (HTTP 422).
    ///
    /// `errors` maps each rejected field name to its message, ready to be
    /// projected onto form error state.
    #[error("Validation failed: {message}")]
    Validation {
        /// The envelope's top-level message.
        message: String,
        /// Field name to error message.
        errors: HashMap<String, String>,
    },

    /// The session credential was missing, invalid, or expired (HTTP 401).
    ///
    /// Stored auth state has already been cleared when this is returned.
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// The envelope's top-level message.
        message: String,
    },

    /// Any other non-2xx response.
    #[error("request failed with status {code}: {message}")]
    Response {
        /// The HTTP status code.
        code: u16,
        /// The envelope's top-level message, or empty when absent.
        message: String,
    },

    /// A transport-level error (network, TLS, timeout, invalid request).
    #[error(transparent)]
    Http(HttpError),

    /// A payload did not match the expected envelope shape.
    #[error("JSON (de)serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Response(e) => {
                let message = e.message.unwrap_or_default();
                match e.code {
                    status::UNPROCESSABLE_ENTITY => Self::Validation {
                        message,
                        errors: parse_field_errors(e.data.as_ref()),
                    },
                    status::UNAUTHORIZED => Self::Unauthorized { message },
                    _ => Self::Response {
                        code: e.code,
                        message,
                    },
                }
            }
            other => Self::Http(other),
        }
    }
}

/// Extracts the field-to-message map from a 422 error envelope's `data`.
fn parse_field_errors(data: Option<&Value>) -> HashMap<String, String> {
    let mut result = HashMap::new();

    if let Some(Value::Object(map)) = data {
        for (field, message) in map {
            let message = match message {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            result.insert(field.clone(), message);
        }
    }

    result
}

/// Deserializes the full `{ message, data }` envelope from a response.
pub(crate) fn parse_envelope<T: DeserializeOwned>(
    response: HttpResponse,
) -> Result<ApiSuccess<T>, ApiError> {
    Ok(serde_json::from_value(response.body)?)
}

/// Serializes a params struct to a query parameter map.
///
/// `None` fields are skipped; scalars are stringified.
pub(crate) fn serialize_to_query<T: Serialize>(
    params: &T,
) -> Result<HashMap<String, String>, ApiError> {
    let value = serde_json::to_value(params)?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                other => {
                    query.insert(key, other.to_string());
                }
            }
        }
    }

    Ok(query)
}
