pub mod bulk_tier;
pub mod tier_validation;

pub use bulk_tier::{discount_percent, BulkTier, NextTierInfo, TierBreakpoint, TierPrice};
pub use tier_validation::{TierValidation, TierValidationError};
