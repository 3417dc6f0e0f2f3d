use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Paise;

/// Direction of order values across the reporting window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
            Trend::Stable => write!(f, "stable"),
        }
    }
}

/// The last `days` days ending at `now`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub days: u32,
    pub now: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(days: u32, now: DateTime<Utc>) -> Self {
        Self { days, now }
    }

    pub fn last_days(days: u32) -> Self {
        Self::new(days, Utc::now())
    }

    /// Records created at or after this instant are in range. Windows reaching
    /// past the earliest representable instant start there.
    pub fn start(&self) -> DateTime<Utc> {
        self.now
            .checked_sub_signed(Duration::days(i64::from(self.days)))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start()
    }
}

/// Commission totals for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub total_orders: u64,
    pub total_order_value: Paise,
    pub total_commission: Paise,
}

/// Commission analytics for a vendor (or the whole platform) over a window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionSummary {
    pub vendor_id: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub total_orders: u64,
    pub total_order_value: Paise,
    pub total_commission: Paise,
    /// Commission as a percentage of order value, 2 decimal places
    pub average_commission_rate: Decimal,
    pub average_order_value: Paise,
    pub trend: Trend,
    pub category_breakdown: Vec<CategoryBreakdown>,
}

impl CommissionSummary {
    pub fn is_empty(&self) -> bool {
        self.total_orders == 0
    }

    pub fn total_vendor_payout(&self) -> Paise {
        self.total_order_value - self.total_commission
    }
}
