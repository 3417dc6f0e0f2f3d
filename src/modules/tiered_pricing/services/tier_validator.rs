use tracing::warn;

use crate::core::{Paise, Result};
use crate::modules::tiered_pricing::models::{BulkTier, TierValidation, TierValidationError};

/// Default cap on tiers per product
pub const MAX_TIERS: usize = 5;

/// Checks partner-authored tier lists before they are saved. Stops at the first
/// violation so the form can point at a single tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkTierValidator {
    max_tiers: usize,
}

impl BulkTierValidator {
    pub fn new(max_tiers: usize) -> Self {
        Self { max_tiers }
    }

    pub fn max_tiers(&self) -> usize {
        self.max_tiers
    }

    /// Validate `tiers` against the product's retail `base_price`
    pub fn validate(&self, tiers: &[BulkTier], base_price: Paise) -> TierValidation {
        match self.check(tiers, base_price) {
            Ok(()) => TierValidation::ok(),
            Err(error) => {
                warn!("Bulk tiers rejected: {}", error);
                TierValidation::failed(error)
            }
        }
    }

    /// Same checks as [`validate`](Self::validate), as a `Result`
    pub fn ensure_valid(&self, tiers: &[BulkTier], base_price: Paise) -> Result<()> {
        self.check(tiers, base_price)?;
        Ok(())
    }

    fn check(
        &self,
        tiers: &[BulkTier],
        base_price: Paise,
    ) -> std::result::Result<(), TierValidationError> {
        if tiers.is_empty() {
            return Err(TierValidationError::NoTiers);
        }

        if tiers.len() > self.max_tiers {
            return Err(TierValidationError::TooManyTiers {
                count: tiers.len(),
                max: self.max_tiers,
            });
        }

        for (i, tier) in tiers.iter().enumerate() {
            let n = i + 1;

            if tier.min_qty < 1 {
                return Err(TierValidationError::InvalidQuantity { tier: n });
            }

            if tier.price <= 0 {
                return Err(TierValidationError::InvalidPrice { tier: n });
            }

            if tier.max_qty.is_some_and(|max| max < tier.min_qty) {
                return Err(TierValidationError::InvalidRange { tier: n });
            }
        }

        // Quantity ordering across the whole list before any price ordering
        for (i, pair) in tiers.windows(2).enumerate() {
            let (n, next) = (i + 1, i + 2);

            if pair[0].min_qty >= pair[1].min_qty {
                return Err(TierValidationError::QuantityNotAscending { tier: n, next });
            }

            if pair[0].max_qty.is_some_and(|max| max >= pair[1].min_qty) {
                return Err(TierValidationError::Overlap { tier: n, next });
            }
        }

        for (i, pair) in tiers.windows(2).enumerate() {
            if pair[0].price <= pair[1].price {
                return Err(TierValidationError::PriceNotDescending {
                    tier: i + 1,
                    next: i + 2,
                });
            }
        }

        if let Some((i, tier)) = tiers
            .iter()
            .enumerate()
            .find(|(_, tier)| tier.price >= base_price)
        {
            return Err(TierValidationError::PriceNotBelowRetail {
                tier: i + 1,
                price: tier.price,
                base_price,
            });
        }

        Ok(())
    }
}

impl Default for BulkTierValidator {
    fn default() -> Self {
        Self::new(MAX_TIERS)
    }
}
