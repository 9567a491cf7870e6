//! Cart and purchase operations.
//!
//! A purchase is one product entry with a quantity in a user's cart or
//! order history. The listing endpoint filters by [`PurchaseStatus`];
//! mutations are keyed by product identifier, deletion by purchase
//! identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::product::Product;
use crate::api::{parse_envelope, ApiError, ApiSuccess};
use crate::clients::HttpClient;
use crate::paths;

/// Lifecycle states a purchase can be listed by.
///
/// The backend encodes these as integers in the `status` query parameter
/// and in purchase records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PurchaseStatus {
    /// Still in the cart, not yet ordered.
    InCart,
    /// All statuses (no filter).
    All,
    /// Ordered, waiting for the shop to confirm.
    WaitForConfirmation,
    /// Confirmed, waiting for pickup by the carrier.
    WaitForGetting,
    /// In transit.
    InProgress,
    /// Delivered.
    Delivered,
    /// Cancelled.
    Cancelled,
}

impl PurchaseStatus {
    /// Returns the backend's integer code for this status.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Self::InCart => -1,
            Self::All => 0,
            Self::WaitForConfirmation => 1,
            Self::WaitForGetting => 2,
            Self::InProgress => 3,
            Self::Delivered => 4,
            Self::Cancelled => 5,
        }
    }
}

/// One product entry in a user's cart or order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    /// Server-assigned purchase identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Quantity of the product in this purchase.
    pub buy_count: u32,

    /// Unit price at the time the purchase was created.
    pub price: u64,

    /// Unit price before discount at the time the purchase was created.
    pub price_before_discount: u64,

    /// Lifecycle status code (see [`PurchaseStatus::code`]).
    pub status: i8,

    /// Identifier of the owning user.
    pub user: String,

    /// The purchased product.
    pub product: Product,

    /// When the purchase was created.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    /// When the purchase was last updated.
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Mutation payload keyed by product identifier.
///
/// Used by [`add_to_cart`], [`update`], and (per line) [`buy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchasePayload {
    /// The product to add, update, or buy.
    pub product_id: String,
    /// The requested quantity.
    pub buy_count: u32,
}

/// Payload of a batch delete response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedCount {
    /// Number of purchases removed.
    pub deleted_count: u64,
}

/// Lists purchases with the given status.
///
/// # Errors
///
/// Returns [`ApiError`] variants on failure.
pub async fn list(
    client: &HttpClient,
    status: PurchaseStatus,
) -> Result<ApiSuccess<Vec<Purchase>>, ApiError> {
    let mut query = std::collections::HashMap::new();
    query.insert("status".to_string(), status.code().to_string());

    let response = client.get(paths::PURCHASES, Some(query)).await?;
    parse_envelope(response)
}

/// Adds a product to the cart.
///
/// Adding a product already in the cart increments its quantity server-side.
///
/// # Errors
///
/// Returns [`ApiError`] variants on failure.
pub async fn add_to_cart(
    client: &HttpClient,
    body: &PurchasePayload,
) -> Result<ApiSuccess<Purchase>, ApiError> {
    let response = client
        .post(paths::ADD_TO_CART, Some(serde_json::to_value(body)?))
        .await?;
    parse_envelope(response)
}

/// Updates the quantity of the cart line for `body.product_id`.
///
/// # Errors
///
/// Returns [`ApiError`] variants on failure.
pub async fn update(
    client: &HttpClient,
    body: &PurchasePayload,
) -> Result<ApiSuccess<Purchase>, ApiError> {
    let response = client
        .put(paths::UPDATE_PURCHASE, serde_json::to_value(body)?)
        .await?;
    parse_envelope(response)
}

/// Submits the given lines for purchase.
///
/// # Errors
///
/// Returns [`ApiError`] variants on failure.
pub async fn buy(
    client: &HttpClient,
    items: &[PurchasePayload],
) -> Result<ApiSuccess<Vec<Purchase>>, ApiError> {
    let response = client
        .post(paths::BUY_PRODUCTS, Some(serde_json::to_value(items)?))
        .await?;
    parse_envelope(response)
}

/// Deletes purchases by identifier in a single batch call.
///
/// # Errors
///
/// Returns [`ApiError`] variants on failure.
pub async fn delete(
    client: &HttpClient,
    purchase_ids: &[String],
) -> Result<ApiSuccess<DeletedCount>, ApiError> {
    let response = client
        .delete(paths::PURCHASES, Some(serde_json::to_value(purchase_ids)?))
        .await?;
    parse_envelope(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_match_backend_contract() {
        assert_eq!(PurchaseStatus::InCart.code(), -1);
        assert_eq!(PurchaseStatus::All.code(), 0);
        assert_eq!(PurchaseStatus::WaitForConfirmation.code(), 1);
        assert_eq!(PurchaseStatus::WaitForGetting.code(), 2);
        assert_eq!(PurchaseStatus::InProgress.code(), 3);
        assert_eq!(PurchaseStatus::Delivered.code(), 4);
        assert_eq!(PurchaseStatus::Cancelled.code(), 5);
    }

    #[test]
    fn test_payload_serializes_expected_shape() {
        let payload = PurchasePayload {
            product_id: "p-1".to_string(),
            buy_count: 3,
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"product_id": "p-1", "buy_count": 3})
        );
    }

    #[test]
    fn test_deleted_count_deserializes() {
        let count: DeletedCount =
            serde_json::from_value(serde_json::json!({"deleted_count": 2})).unwrap();
        assert_eq!(count.deleted_count, 2);
    }
}
