//! Shopping-cart line items and summaries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A cart line item: a catalog deal reference plus the traveller's stay
/// parameters. The item references the deal by id; it does not own it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Line-item id, e.g. "cart-5df0…".
    pub id: String,
    pub deal_id: String,
    pub deal_name: String,
    pub destination: String,
    /// Check-in date, `YYYY-MM-DD`.
    pub check_in: String,
    pub nights: u32,
    pub guests: u32,
    pub price_per_night: f64,
    /// price_per_night × nights, fixed at add time.
    pub total_price: f64,
}

impl CartItem {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        deal_id: impl Into<String>,
        deal_name: impl Into<String>,
        destination: impl Into<String>,
        check_in: impl Into<String>,
        nights: u32,
        guests: u32,
        price_per_night: f64,
    ) -> Self {
        Self {
            id: format!("cart-{}", Uuid::new_v4()),
            deal_id: deal_id.into(),
            deal_name: deal_name.into(),
            destination: destination.into(),
            check_in: check_in.into(),
            nights,
            guests,
            price_per_night,
            total_price: price_per_night * nights as f64,
        }
    }
}

/// Current cart contents with the derived total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    pub items: Vec<CartItem>,
    pub count: usize,
    /// Σ item totals.
    pub total: f64,
}

impl CartSummary {
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let total = items.iter().map(|i| i.total_price).sum();
        Self { count: items.len(), items, total }
    }
}
