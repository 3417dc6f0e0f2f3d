pub mod commission_record;
pub mod commission_summary;

pub use commission_record::CommissionRecord;
pub use commission_summary::{CategoryBreakdown, CommissionSummary, TimeRange, Trend};
