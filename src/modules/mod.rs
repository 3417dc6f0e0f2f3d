pub mod analytics;
pub mod commissions;
pub mod delivery;
pub mod tiered_pricing;
