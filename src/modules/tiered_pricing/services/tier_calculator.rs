use rust_decimal::Decimal;
use tracing::debug;

use crate::core::money::percent_of;
use crate::core::Paise;
use crate::modules::tiered_pricing::models::{
    discount_percent, BulkTier, NextTierInfo, TierBreakpoint, TierPrice,
};

/// Unit price lookup for bulk orders of one product
///
/// Tiers must be sorted ascending by `min_qty`; `BulkTierValidator` enforces
/// that before tiers are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TieredPriceCalculator {
    base_price: Paise,
}

impl TieredPriceCalculator {
    /// `base_price` is the retail (undiscounted) unit price in paise
    pub fn new(base_price: Paise) -> Self {
        Self { base_price }
    }

    pub fn base_price(&self) -> Paise {
        self.base_price
    }

    /// Resolve the unit price for `quantity`.
    ///
    /// A quantity below the first tier's `min_qty`, or outside every tier,
    /// is charged at the base price with 0% discount.
    pub fn calculate(&self, quantity: u32, tiers: &[BulkTier]) -> TierPrice {
        let tier_index = find_tier_index(quantity, tiers);

        let (price_per_item, discount) = match tier_index {
            Some(i) => (tiers[i].price, discount_percent(self.base_price, tiers[i].price)),
            None => (self.base_price, 0),
        };

        // Saturates on absurd price and quantity combinations
        let subtotal = price_per_item.saturating_mul(Paise::from(quantity));
        let retail = self.base_price.saturating_mul(Paise::from(quantity));

        debug!(
            "Tier price for qty {}: tier {:?}, unit {} ({}% off)",
            quantity, tier_index, price_per_item, discount
        );

        TierPrice {
            quantity,
            price_per_item,
            discount_percent: discount,
            tier_index,
            subtotal,
            savings: retail.saturating_sub(subtotal).max(0),
        }
    }

    /// Copy of `tiers` with `max_qty` and `discount_percent` filled in
    pub fn normalize(&self, tiers: &[BulkTier]) -> Vec<BulkTier> {
        tiers
            .iter()
            .enumerate()
            .map(|(i, tier)| BulkTier {
                min_qty: tier.min_qty,
                max_qty: effective_max_qty(tiers, i),
                price: tier.price,
                discount_percent: Some(discount_percent(self.base_price, tier.price)),
            })
            .collect()
    }

    /// Nearest tier above `quantity` offering a larger discount than the
    /// current price, or `None` at the best tier
    pub fn next_tier_info(&self, quantity: u32, tiers: &[BulkTier]) -> Option<NextTierInfo> {
        let current = self.calculate(quantity, tiers);

        tiers.iter().enumerate().find_map(|(i, tier)| {
            let discount = discount_percent(self.base_price, tier.price);
            if tier.min_qty <= quantity || discount <= current.discount_percent {
                return None;
            }

            let quantity_needed = tier.min_qty - quantity;
            let plural = if quantity_needed > 1 { "s" } else { "" };

            Some(NextTierInfo {
                tier_index: i,
                quantity_needed,
                price_per_item: tier.price,
                discount_percent: discount,
                message: format!(
                    "Add {} more item{} to unlock {}% discount!",
                    quantity_needed, plural, discount
                ),
            })
        })
    }

    /// Display rows for every tier
    pub fn breakpoints(&self, tiers: &[BulkTier]) -> Vec<TierBreakpoint> {
        self.normalize(tiers)
            .into_iter()
            .map(|tier| {
                let discount = tier.discount_percent.unwrap_or_default();
                TierBreakpoint {
                    min_qty: tier.min_qty,
                    max_qty: tier.max_qty,
                    price_per_item: tier.price,
                    discount_percent: discount,
                    range_label: tier.range_label(),
                    savings_message: (discount > 0).then(|| {
                        format!("Save {}% on orders of {}+ items", discount, tier.min_qty)
                    }),
                }
            })
            .collect()
    }

    /// Starter tiers offered to partners: 7% off from 10, 13% from 50, 20% from 100
    pub fn default_tiers(&self) -> Vec<BulkTier> {
        self.normalize(&[
            BulkTier::new(10, percent_of(self.base_price, Decimal::from(93))),
            BulkTier::new(50, percent_of(self.base_price, Decimal::from(87))),
            BulkTier::new(100, percent_of(self.base_price, Decimal::from(80))),
        ])
    }
}

/// Explicit `max_qty`, else the next tier's `min_qty - 1`, else unbounded
pub fn effective_max_qty(tiers: &[BulkTier], index: usize) -> Option<u32> {
    tiers[index]
        .max_qty
        .or_else(|| tiers.get(index + 1).map(|next| next.min_qty.saturating_sub(1)))
}

/// First tier with `min_qty <= quantity <= max_qty`
pub fn find_tier_index(quantity: u32, tiers: &[BulkTier]) -> Option<usize> {
    (0..tiers.len()).find(|&i| {
        quantity >= tiers[i].min_qty
            && effective_max_qty(tiers, i).map_or(true, |max| quantity <= max)
    })
}
