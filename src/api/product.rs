//! Product catalog listing and detail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::category::Category;
use crate::api::{parse_envelope, serialize_to_query, ApiError, ApiSuccess};
use crate::clients::HttpClient;
use crate::paths;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned product identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Primary image reference.
    pub image: String,

    /// Gallery image references.
    #[serde(default)]
    pub images: Vec<String>,

    /// Display name.
    pub name: String,

    /// Long-form description, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The category this product belongs to.
    pub category: Category,

    /// Current unit price.
    pub price: u64,

    /// Unit price before discount.
    pub price_before_discount: u64,

    /// Units available in stock.
    pub quantity: u32,

    /// Units sold.
    #[serde(default)]
    pub sold: u32,

    /// View counter.
    #[serde(default)]
    pub view: u32,

    /// Average review rating.
    #[serde(default)]
    pub rating: f64,

    /// When the product was created.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Sort key for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    /// Newest first (the backend default).
    #[serde(rename = "createdAt")]
    CreatedAt,
    /// Most viewed.
    #[serde(rename = "view")]
    View,
    /// Best selling.
    #[serde(rename = "sold")]
    Sold,
    /// By unit price; combine with [`Order`].
    #[serde(rename = "price")]
    Price,
}

/// Sort direction for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Order {
    /// Ascending.
    #[serde(rename = "asc")]
    Asc,
    /// Descending.
    #[serde(rename = "desc")]
    Desc,
}

/// Filter and pagination parameters for [`list`].
///
/// `None` fields are omitted from the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductListParams {
    /// Page number, 1-based.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Sort key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
    /// Sort direction (meaningful with [`SortBy::Price`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    /// Restrict to one category by identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Exclude one product by identifier (used for "similar products").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
    /// Minimum star rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_filter: Option<u8>,
    /// Maximum unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<u64>,
    /// Minimum unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<u64>,
    /// Full-text name search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Pagination metadata returned with product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page, 1-based.
    pub page: u32,
    /// Page size used for this listing.
    pub limit: u32,
    /// Total number of pages.
    pub page_size: u32,
}

/// Payload of a product listing response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductList {
    /// Products on this page.
    pub products: Vec<Product>,
    /// Pagination metadata.
    pub pagination: Pagination,
}

/// Lists products matching the given filters.
///
/// # Errors
///
/// Returns [`ApiError`] variants on failure.
pub async fn list(
    client: &HttpClient,
    params: &ProductListParams,
) -> Result<ApiSuccess<ProductList>, ApiError> {
    let query = serialize_to_query(params)?;
    let query = if query.is_empty() { None } else { Some(query) };
    let response = client.get(paths::PRODUCTS, query).await?;
    parse_envelope(response)
}

/// Fetches a single product by identifier.
///
/// # Errors
///
/// Returns [`ApiError`] variants on failure.
pub async fn find(client: &HttpClient, id: &str) -> Result<ApiSuccess<Product>, ApiError> {
    let response = client
        .get(&format!("{}/{id}", paths::PRODUCTS), None)
        .await?;
    parse_envelope(response)
}
