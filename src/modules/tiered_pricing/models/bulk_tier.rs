use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::Paise;

/// Partner-authored bulk price tier.
///
/// `max_qty` and `discount_percent` are derived: the former from the next
/// tier's `min_qty - 1`, the latter against the product's retail price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkTier {
    pub min_qty: u32,
    #[serde(default)]
    pub max_qty: Option<u32>,
    /// Per-unit price in paise
    pub price: Paise,
    #[serde(default)]
    pub discount_percent: Option<u32>,
}

impl BulkTier {
    pub fn new(min_qty: u32, price: Paise) -> Self {
        Self {
            min_qty,
            max_qty: None,
            price,
            discount_percent: None,
        }
    }

    pub fn with_max_qty(mut self, max_qty: u32) -> Self {
        self.max_qty = Some(max_qty);
        self
    }

    /// `"10-49 units"` or `"100+ units"`
    pub fn range_label(&self) -> String {
        match self.max_qty {
            Some(max) => format!("{}-{} units", self.min_qty, max),
            None => format!("{}+ units", self.min_qty),
        }
    }
}

/// `round(((base - tier) / base) * 100)`, half-up. A zero base price yields 0, as
/// does a tier priced at or above base.
pub fn discount_percent(base_price: Paise, tier_price: Paise) -> u32 {
    if base_price <= 0 || tier_price >= base_price {
        return 0;
    }

    let ratio = Decimal::from(base_price - tier_price) / Decimal::from(base_price);
    (ratio * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or_default()
}

/// Price resolved for a quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierPrice {
    pub quantity: u32,
    pub price_per_item: Paise,
    pub discount_percent: u32,
    /// Zero-based index of the applied tier, `None` at retail price
    pub tier_index: Option<usize>,
    pub subtotal: Paise,
    /// Saved against buying the same quantity at retail
    pub savings: Paise,
}

/// "Add N more to unlock X%" prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextTierInfo {
    pub tier_index: usize,
    pub quantity_needed: u32,
    pub price_per_item: Paise,
    pub discount_percent: u32,
    pub message: String,
}

/// Tier row for product pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierBreakpoint {
    pub min_qty: u32,
    pub max_qty: Option<u32>,
    pub price_per_item: Paise,
    pub discount_percent: u32,
    pub range_label: String,
    pub savings_message: Option<String>,
}
