//! Client-local cart mirror and synchronization protocol.
//!
//! [`CartMirror`] keeps an ordered sequence of [`CartLine`]s consistent
//! with the server's cart listing while allowing optimistic UI feedback
//! during quantity edits. The mirror owns two client-only pieces of state
//! per line, the checked-for-checkout flag and the per-line [`LineState`],
//! neither of which ever persists server-side.
//!
//! # Reconciliation
//!
//! Every mutation re-fetches the server listing and merges it via
//! [`CartMirror::merge_from_server`]: server order wins, an incoming line
//! inherits the prior `checked` flag when its identifier already existed
//! in the mirror, and every line comes back [`LineState::Idle`]. Lines the
//! server no longer returns are dropped.
//!
//! # Optimistic quantity edits
//!
//! A quantity edit moves the affected line `Idle -> Pending` before the
//! update call is issued, which locks out duplicate submissions for that
//! line until the merge (success) or the explicit rollback (failure)
//! returns it to `Idle`.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut cart = CartMirror::new();
//! cart.refresh(&client).await?;
//!
//! cart.check_all(true);
//! println!("payable: {}", cart.total_payable());
//!
//! cart.update_quantity(&client, "purchase-id", 3).await?;
//! let bought = cart.buy_checked(&client).await?;
//! ```

use std::collections::HashMap;

use crate::api::purchase::{self, Purchase, PurchasePayload, PurchaseStatus};
use crate::api::ApiError;
use crate::clients::HttpClient;

/// Per-line submission state.
///
/// `Idle -> Pending` when an update is issued, `Pending -> Idle` when the
/// follow-up merge lands or the update fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineState {
    /// No update in flight; the line accepts edits.
    #[default]
    Idle,
    /// An update is in flight; further edits are rejected.
    Pending,
}

/// One cart entry plus its client-only UI state.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// The server-side purchase this line mirrors.
    pub purchase: Purchase,
    /// Whether the line is selected for checkout.
    pub checked: bool,
    state: LineState,
}

impl CartLine {
    fn new(purchase: Purchase, checked: bool) -> Self {
        Self {
            purchase,
            checked,
            state: LineState::Idle,
        }
    }

    /// Returns the purchase identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.purchase.id
    }

    /// Returns the line's submission state.
    #[must_use]
    pub const fn state(&self) -> LineState {
        self.state
    }

    /// Returns `true` while an update for this line is in flight.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.state == LineState::Pending
    }

    /// Line subtotal: unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.purchase.price * u64::from(self.purchase.buy_count)
    }

    /// Line savings: pre-discount minus current product price, times quantity.
    #[must_use]
    pub fn savings(&self) -> u64 {
        let per_unit = self
            .purchase
            .product
            .price_before_discount
            .saturating_sub(self.purchase.product.price);
        per_unit * u64::from(self.purchase.buy_count)
    }
}

/// Client-local mirror of the server-side cart.
///
/// The mirror is owned by a single UI-bound context and mutated only
/// through the methods below; concurrent writers are serialized by the
/// caller's single-threaded event loop.
#[derive(Debug, Default)]
pub struct CartMirror {
    lines: Vec<CartLine>,
}

impl CartMirror {
    /// Creates an empty mirror.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mirrored lines in server order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns `true` if the mirror holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of mirrored lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Reconciles the mirror with a fresh server listing.
    ///
    /// Server order wins. An incoming line inherits the prior `checked`
    /// flag iff its identifier existed in the mirror before the merge;
    /// new lines arrive unchecked. Every merged line is [`LineState::Idle`].
    /// Lines absent from `purchases` are dropped.
    pub fn merge_from_server(&mut self, purchases: Vec<Purchase>) {
        let prior_checked: HashMap<String, bool> = self
            .lines
            .iter()
            .map(|line| (line.purchase.id.clone(), line.checked))
            .collect();

        self.lines = purchases
            .into_iter()
            .map(|purchase| {
                let checked = prior_checked.get(&purchase.id).copied().unwrap_or(false);
                CartLine::new(purchase, checked)
            })
            .collect();
    }

    /// Sets the checked flag on one line.
    ///
    /// Returns `false` if no line has the given identifier.
    pub fn set_checked(&mut self, id: &str, checked: bool) -> bool {
        match self.lines.iter_mut().find(|line| line.purchase.id == id) {
            Some(line) => {
                line.checked = checked;
                true
            }
            None => false,
        }
    }

    /// Sets the checked flag on every line.
    pub fn check_all(&mut self, checked: bool) {
        for line in &mut self.lines {
            line.checked = checked;
        }
    }

    /// Returns `true` if every line is checked (vacuously true when empty).
    #[must_use]
    pub fn all_checked(&self) -> bool {
        self.lines.iter().all(|line| line.checked)
    }

    /// Returns the lines currently selected for checkout.
    pub fn checked_lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter().filter(|line| line.checked)
    }

    /// Total payable over the checked lines.
    ///
    /// Pure derivation over the current mirror; recompute on every render.
    #[must_use]
    pub fn total_payable(&self) -> u64 {
        self.checked_lines().map(CartLine::subtotal).sum()
    }

    /// Total savings over the checked lines.
    #[must_use]
    pub fn total_savings(&self) -> u64 {
        self.checked_lines().map(CartLine::savings).sum()
    }

    /// Re-fetches the in-cart listing and merges it into the mirror.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] variants on failure; the mirror is unchanged.
    pub async fn refresh(&mut self, client: &HttpClient) -> Result<(), ApiError> {
        let listing = purchase::list(client, PurchaseStatus::InCart).await?;
        self.merge_from_server(listing.data);
        Ok(())
    }

    /// Requests a quantity change for the line with the given identifier.
    ///
    /// Returns `Ok(false)` without issuing a request when the edit is a
    /// no-op: unknown identifier, requested quantity outside
    /// `[1, stock]`, or an update already in flight for the line. Otherwise
    /// the line is marked [`LineState::Pending`], the update is issued, and
    /// on success the mirror is refreshed (which returns the line to
    /// [`LineState::Idle`]).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] variants when the update or the follow-up
    /// re-fetch fails; the line is returned to [`LineState::Idle`] so the
    /// edit can be retried.
    pub async fn update_quantity(
        &mut self,
        client: &HttpClient,
        id: &str,
        buy_count: u32,
    ) -> Result<bool, ApiError> {
        let Some(line) = self.lines.iter_mut().find(|line| line.purchase.id == id) else {
            return Ok(false);
        };

        let stock = line.purchase.product.quantity;
        if buy_count < 1 || buy_count > stock {
            return Ok(false);
        }
        if line.state == LineState::Pending {
            return Ok(false);
        }

        line.state = LineState::Pending;
        let payload = PurchasePayload {
            product_id: line.purchase.product.id.clone(),
            buy_count,
        };

        let result = async {
            purchase::update(client, &payload).await?;
            self.refresh(client).await
        }
        .await;

        match result {
            Ok(()) => Ok(true),
            Err(e) => {
                // Roll the optimistic lock back so the edit can be retried
                if let Some(line) = self.lines.iter_mut().find(|line| line.purchase.id == id) {
                    line.state = LineState::Idle;
                }
                Err(e)
            }
        }
    }

    /// Deletes one line by identifier, then re-fetches.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] variants on failure.
    pub async fn delete(&mut self, client: &HttpClient, id: &str) -> Result<u64, ApiError> {
        self.delete_ids(client, vec![id.to_string()]).await
    }

    /// Deletes every checked line in a single batch call, then re-fetches.
    ///
    /// Returns `Ok(0)` without issuing a request when nothing is checked.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] variants on failure.
    pub async fn delete_checked(&mut self, client: &HttpClient) -> Result<u64, ApiError> {
        let ids: Vec<String> = self
            .checked_lines()
            .map(|line| line.purchase.id.clone())
            .collect();
        if ids.is_empty() {
            return Ok(0);
        }
        self.delete_ids(client, ids).await
    }

    async fn delete_ids(&mut self, client: &HttpClient, ids: Vec<String>) -> Result<u64, ApiError> {
        let deleted = purchase::delete(client, &ids).await?;
        self.refresh(client).await?;
        Ok(deleted.data.deleted_count)
    }

    /// Submits every checked line as a buy batch, then re-fetches.
    ///
    /// Returns the server's resulting purchases, or an empty vector without
    /// issuing a request when nothing is checked. The checked set clears
    /// implicitly through the merge, because bought lines leave the in-cart
    /// listing. A success notification carrying the server's message is
    /// raised through the client's [`Notify`](crate::Notify) sink.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] variants on failure.
    pub async fn buy_checked(&mut self, client: &HttpClient) -> Result<Vec<Purchase>, ApiError> {
        let items: Vec<PurchasePayload> = self
            .checked_lines()
            .map(|line| PurchasePayload {
                product_id: line.purchase.product.id.clone(),
                buy_count: line.purchase.buy_count,
            })
            .collect();
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let bought = purchase::buy(client, &items).await?;
        client.notifier().success(&bought.message);
        self.refresh(client).await?;
        Ok(bought.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn purchase(id: &str, price: u64, before: u64, buy_count: u32, stock: u32) -> Purchase {
        serde_json::from_value(json!({
            "_id": id,
            "buy_count": buy_count,
            "price": price,
            "price_before_discount": before,
            "status": -1,
            "user": "u-1",
            "product": {
                "_id": format!("prod-{id}"),
                "image": "main.jpg",
                "images": ["main.jpg"],
                "name": format!("Product {id}"),
                "category": {"_id": "c-1", "name": "Misc"},
                "price": price,
                "price_before_discount": before,
                "quantity": stock,
                "sold": 0,
                "view": 0,
                "rating": 4.0,
                "createdAt": "2024-02-10T08:30:00.000Z",
                "updatedAt": "2024-02-10T08:30:00.000Z"
            },
            "createdAt": "2024-02-10T08:30:00.000Z",
            "updatedAt": "2024-02-10T08:30:00.000Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_merge_preserves_checked_iff_id_pre_existed() {
        let mut cart = CartMirror::new();
        cart.merge_from_server(vec![purchase("a", 100, 120, 2, 5), purchase("b", 50, 50, 1, 9)]);
        cart.set_checked("a", true);

        cart.merge_from_server(vec![
            purchase("a", 100, 120, 3, 5),
            purchase("c", 70, 90, 1, 2),
        ]);

        assert_eq!(cart.len(), 2);
        let a = &cart.lines()[0];
        assert_eq!(a.id(), "a");
        assert!(a.checked);
        assert_eq!(a.purchase.buy_count, 3);

        let c = &cart.lines()[1];
        assert_eq!(c.id(), "c");
        assert!(!c.checked);
    }

    #[test]
    fn test_merge_drops_lines_absent_from_server() {
        let mut cart = CartMirror::new();
        cart.merge_from_server(vec![purchase("a", 100, 120, 2, 5), purchase("b", 50, 50, 1, 9)]);

        cart.merge_from_server(vec![purchase("b", 50, 50, 1, 9)]);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].id(), "b");
    }

    #[test]
    fn test_merge_resets_state_to_idle() {
        let mut cart = CartMirror::new();
        cart.merge_from_server(vec![purchase("a", 100, 120, 2, 5)]);
        cart.lines[0].state = LineState::Pending;

        cart.merge_from_server(vec![purchase("a", 100, 120, 2, 5)]);

        assert_eq!(cart.lines()[0].state(), LineState::Idle);
        assert!(!cart.lines()[0].is_disabled());
    }

    #[test]
    fn test_merge_keeps_server_order() {
        let mut cart = CartMirror::new();
        cart.merge_from_server(vec![purchase("a", 1, 1, 1, 1), purchase("b", 1, 1, 1, 1)]);

        cart.merge_from_server(vec![purchase("b", 1, 1, 1, 1), purchase("a", 1, 1, 1, 1)]);

        let ids: Vec<&str> = cart.lines().iter().map(CartLine::id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_totals_over_empty_checked_set_are_zero() {
        let mut cart = CartMirror::new();
        cart.merge_from_server(vec![purchase("a", 100, 120, 2, 5)]);

        assert_eq!(cart.total_payable(), 0);
        assert_eq!(cart.total_savings(), 0);
    }

    #[test]
    fn test_totals_over_single_checked_line() {
        let mut cart = CartMirror::new();
        cart.merge_from_server(vec![purchase("a", 100, 120, 2, 5)]);
        cart.set_checked("a", true);

        assert_eq!(cart.total_payable(), 200);
        assert_eq!(cart.total_savings(), 40);
    }

    #[test]
    fn test_totals_sum_only_checked_lines() {
        let mut cart = CartMirror::new();
        cart.merge_from_server(vec![
            purchase("a", 100, 120, 2, 5),
            purchase("b", 50, 60, 3, 9),
            purchase("c", 10, 10, 1, 9),
        ]);
        cart.set_checked("a", true);
        cart.set_checked("b", true);

        assert_eq!(cart.total_payable(), 100 * 2 + 50 * 3);
        assert_eq!(cart.total_savings(), 20 * 2 + 10 * 3);
    }

    #[test]
    fn test_savings_never_underflow() {
        // A price raised above its pre-discount value contributes zero
        let mut cart = CartMirror::new();
        cart.merge_from_server(vec![purchase("a", 120, 100, 1, 5)]);
        cart.check_all(true);

        assert_eq!(cart.total_savings(), 0);
    }

    #[test]
    fn test_check_all_and_all_checked() {
        let mut cart = CartMirror::new();
        cart.merge_from_server(vec![purchase("a", 1, 1, 1, 1), purchase("b", 1, 1, 1, 1)]);

        assert!(!cart.all_checked());
        cart.check_all(true);
        assert!(cart.all_checked());
        cart.set_checked("a", false);
        assert!(!cart.all_checked());

        // Vacuously true on an empty mirror, matching the select-all control
        let empty = CartMirror::new();
        assert!(empty.all_checked());
    }

    #[test]
    fn test_set_checked_unknown_id_returns_false() {
        let mut cart = CartMirror::new();
        cart.merge_from_server(vec![purchase("a", 1, 1, 1, 1)]);
        assert!(!cart.set_checked("missing", true));
    }
}
