pub mod tier_calculator;
pub mod tier_validator;

pub use tier_calculator::{effective_max_qty, find_tier_index, TieredPriceCalculator};
pub use tier_validator::{BulkTierValidator, MAX_TIERS};
