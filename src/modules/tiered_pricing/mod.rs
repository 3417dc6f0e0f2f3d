pub mod models;
pub mod services;

pub use models::{BulkTier, TierPrice, TierValidation, TierValidationError};
pub use services::{BulkTierValidator, TieredPriceCalculator};
