use rust_decimal::Decimal;

use crate::core::Paise;
use crate::modules::analytics::models::Trend;

/// Derives a trend from chronologically ordered order values
pub trait TrendEstimator: Send + Sync {
    fn estimate(&self, values: &[Paise]) -> Trend;
}

/// Two-bucket heuristic: compare the mean of the first half of the values with
/// the mean of the second half. Up above +10%, down below -10%.
///
/// Not a regression. With an odd count the middle value falls in the second
/// half; fewer than two values is always stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoBucketTrend;

impl TrendEstimator for TwoBucketTrend {
    fn estimate(&self, values: &[Paise]) -> Trend {
        if values.len() < 2 {
            return Trend::Stable;
        }

        let (first, second) = values.split_at(values.len() / 2);
        let first_mean = mean(first);
        let second_mean = mean(second);

        // +/-10%
        let up_factor = Decimal::new(11, 1);
        let down_factor = Decimal::new(9, 1);

        if second_mean > first_mean * up_factor {
            Trend::Up
        } else if second_mean < first_mean * down_factor {
            Trend::Down
        } else {
            Trend::Stable
        }
    }
}

fn mean(values: &[Paise]) -> Decimal {
    let total: Decimal = values.iter().map(|v| Decimal::from(*v)).sum();
    total / Decimal::from(values.len())
}
