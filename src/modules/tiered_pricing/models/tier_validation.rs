use serde::Serialize;

use crate::core::money::{format_inr, Paise};

/// First problem found in a bulk tier list. Tier numbers are 1-based, as shown
/// to partners.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TierValidationError {
    #[error("At least one pricing tier is required when bulk pricing is enabled")]
    NoTiers,

    #[error("Maximum {max} tiers allowed, got {count}")]
    TooManyTiers { count: usize, max: usize },

    #[error("Tier {tier}: Minimum quantity must be at least 1")]
    InvalidQuantity { tier: usize },

    #[error("Tier {tier}: Price must be greater than 0")]
    InvalidPrice { tier: usize },

    #[error("Tier {tier}: Maximum quantity must not be below minimum quantity")]
    InvalidRange { tier: usize },

    #[error("Tier {next}: Minimum quantity must be greater than tier {tier}")]
    QuantityNotAscending { tier: usize, next: usize },

    #[error("Tier {tier}: Maximum quantity overlaps tier {next}")]
    Overlap { tier: usize, next: usize },

    #[error("Tier {next}: Price must be lower than tier {tier}")]
    PriceNotDescending { tier: usize, next: usize },

    #[error(
        "Tier {tier}: Price {} must be below the retail price {}",
        fmt_paise(.price),
        fmt_paise(.base_price)
    )]
    PriceNotBelowRetail {
        tier: usize,
        price: Paise,
        base_price: Paise,
    },
}

fn fmt_paise(amount: &Paise) -> String {
    format_inr(*amount)
}

impl TierValidationError {
    /// 1-based tier the partner should fix, if the error names one
    pub fn tier(&self) -> Option<usize> {
        match self {
            TierValidationError::NoTiers | TierValidationError::TooManyTiers { .. } => None,
            TierValidationError::InvalidQuantity { tier }
            | TierValidationError::InvalidPrice { tier }
            | TierValidationError::InvalidRange { tier }
            | TierValidationError::PriceNotBelowRetail { tier, .. } => Some(*tier),
            TierValidationError::QuantityNotAscending { next, .. }
            | TierValidationError::PriceNotDescending { next, .. } => Some(*next),
            TierValidationError::Overlap { tier, .. } => Some(*tier),
        }
    }
}

/// Validation outcome as consumed by the partner pricing form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierValidation {
    pub valid: bool,
    pub error: Option<TierValidationError>,
}

impl TierValidation {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn failed(error: TierValidationError) -> Self {
        Self {
            valid: false,
            error: Some(error),
        }
    }

    pub fn message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }
}
