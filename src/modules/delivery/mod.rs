pub mod models;
pub mod services;

pub use models::{
    BandStatus, DeliveryBandBreakdown, DeliveryFeeBand, DeliveryFeeBreakdown, DeliveryFeeConfig,
    DeliveryMessage, SurgeConditions, SurgeQuote, SurgedDeliveryFee, Weather,
};
pub use services::{DeliveryFeeCalculator, SurgePricingCalculator};
