pub mod commission_analytics;
pub mod trend;

pub use commission_analytics::{CommissionAnalytics, UNCATEGORIZED};
pub use trend::{TrendEstimator, TwoBucketTrend};
