pub mod delivery_fee_calculator;
pub mod surge_pricing;

pub use delivery_fee_calculator::DeliveryFeeCalculator;
pub use surge_pricing::SurgePricingCalculator;
