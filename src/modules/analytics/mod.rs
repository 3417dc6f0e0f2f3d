pub mod models;
pub mod services;

pub use models::{CommissionRecord, CommissionSummary, TimeRange, Trend};
pub use services::{CommissionAnalytics, TrendEstimator, TwoBucketTrend};
