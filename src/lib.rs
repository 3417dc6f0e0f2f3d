//! Wyshkit Pricing Engine Library
//!
//! Pure pricing calculators for the gifting marketplace: commission rule
//! resolution, bulk tier pricing, delivery fees and commission analytics.
//! All amounts are integer paise.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::analytics;
pub use modules::commissions;
pub use modules::delivery;
pub use modules::tiered_pricing;
