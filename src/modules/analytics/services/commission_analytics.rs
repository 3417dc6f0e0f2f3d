use rust_decimal::prelude::*;
use std::collections::BTreeMap;
use tracing::info;

use crate::core::money::round_half_up;
use crate::core::Paise;
use crate::modules::analytics::models::{
    CategoryBreakdown, CommissionRecord, CommissionSummary, TimeRange,
};
use crate::modules::analytics::services::trend::{TrendEstimator, TwoBucketTrend};

/// Bucket for records without a category
pub const UNCATEGORIZED: &str = "uncategorized";

/// Aggregates historical commission records into summaries
pub struct CommissionAnalytics<E: TrendEstimator = TwoBucketTrend> {
    estimator: E,
}

impl CommissionAnalytics<TwoBucketTrend> {
    pub fn new() -> Self {
        Self {
            estimator: TwoBucketTrend,
        }
    }
}

impl Default for CommissionAnalytics<TwoBucketTrend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TrendEstimator> CommissionAnalytics<E> {
    /// Use a different trend estimator
    pub fn with_estimator(estimator: E) -> Self {
        Self { estimator }
    }

    /// Summarize `records` for `vendor_id` (all vendors when `None`) created
    /// within `range`
    pub fn summarize(
        &self,
        vendor_id: Option<&str>,
        records: &[CommissionRecord],
        range: TimeRange,
    ) -> CommissionSummary {
        let mut in_range: Vec<&CommissionRecord> = records
            .iter()
            .filter(|r| vendor_id.map_or(true, |v| r.vendor_id.as_deref() == Some(v)))
            .filter(|r| range.contains(r.created_at))
            .collect();
        in_range.sort_by_key(|r| r.created_at);

        let total_orders = in_range.len() as u64;
        let total_order_value: Paise = in_range.iter().map(|r| r.order_value).sum();
        let total_commission: Paise = in_range.iter().map(|r| r.commission_amount).sum();

        let values: Vec<Paise> = in_range.iter().map(|r| r.order_value).collect();
        let trend = self.estimator.estimate(&values);

        let summary = CommissionSummary {
            vendor_id: vendor_id.map(str::to_string),
            start: range.start(),
            end: range.now,
            total_orders,
            total_order_value,
            total_commission,
            average_commission_rate: commission_rate(total_commission, total_order_value),
            average_order_value: average(total_order_value, total_orders),
            trend,
            category_breakdown: category_breakdown(&in_range),
        };

        info!(
            "Commission summary for {:?} over {} days: {} orders, value {}, commission {}, trend {}",
            vendor_id,
            range.days,
            summary.total_orders,
            summary.total_order_value,
            summary.total_commission,
            summary.trend
        );

        summary
    }
}

/// `commission / value * 100` to 2 decimal places, 0 when value is 0
fn commission_rate(total_commission: Paise, total_order_value: Paise) -> Decimal {
    if total_order_value == 0 {
        return Decimal::ZERO;
    }

    (Decimal::from(total_commission) * Decimal::ONE_HUNDRED / Decimal::from(total_order_value))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn average(total: Paise, count: u64) -> Paise {
    if count == 0 {
        return 0;
    }
    round_half_up(Decimal::from(total) / Decimal::from(count))
}

fn category_breakdown(records: &[&CommissionRecord]) -> Vec<CategoryBreakdown> {
    let mut groups: BTreeMap<&str, CategoryBreakdown> = BTreeMap::new();

    for record in records {
        let category = record.category.as_deref().unwrap_or(UNCATEGORIZED);
        let entry = groups.entry(category).or_insert_with(|| CategoryBreakdown {
            category: category.to_string(),
            total_orders: 0,
            total_order_value: 0,
            total_commission: 0,
        });
        entry.total_orders += 1;
        entry.total_order_value += record.order_value;
        entry.total_commission += record.commission_amount;
    }

    groups.into_values().collect()
}
