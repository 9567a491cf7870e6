//! Category listing.

use serde::{Deserialize, Serialize};

use crate::api::{parse_envelope, ApiError, ApiSuccess};
use crate::clients::HttpClient;
use crate::paths;

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Server-assigned category identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Lists all categories.
///
/// # Errors
///
/// Returns [`ApiError`] variants on failure.
pub async fn list(client: &HttpClient) -> Result<ApiSuccess<Vec<Category>>, ApiError> {
    let response = client.get(paths::CATEGORIES, None).await?;
    parse_envelope(response)
}
