use chrono::{Datelike, Timelike, Weekday};
use rust_decimal::Decimal;
use tracing::debug;

use crate::core::money::round_half_up;
use crate::core::Paise;
use crate::modules::delivery::models::{SurgeConditions, SurgeQuote, Weather};

const PEAK_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);
const FRIDAY_EVENING_MULTIPLIER: Decimal = Decimal::from_parts(13, 0, 0, false, 1);
const WEEKEND_MULTIPLIER: Decimal = Decimal::from_parts(14, 0, 0, false, 1);
const WEATHER_FACTOR: Decimal = Decimal::from_parts(15, 0, 0, false, 1);
const WEATHER_CAP: Decimal = Decimal::from_parts(3, 0, 0, false, 0);
const DEMAND_FACTOR: Decimal = Decimal::from_parts(12, 0, 0, false, 1);
pub const MAX_SURGE_MULTIPLIER: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Demand index above which the high-demand factor kicks in
pub const HIGH_DEMAND: u32 = 80;

/// Delivery surge from time of day, weekday, weather and demand
#[derive(Debug, Clone, Copy, Default)]
pub struct SurgePricingCalculator;

impl SurgePricingCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Multiplier in `1.0..=5.0`.
    ///
    /// Peak hours (12:00-14:00, 18:00-22:00) and weekends set a floor; severe
    /// weather then scales by 1.5 up to 3x and high demand by 1.2 up to 5x.
    pub fn multiplier(&self, conditions: &SurgeConditions) -> Decimal {
        let hour = conditions.local_time.hour();
        let mut multiplier = Decimal::ONE;

        if is_peak_hour(hour) {
            multiplier = multiplier.max(PEAK_MULTIPLIER);
        }

        match conditions.local_time.weekday() {
            Weekday::Fri if hour >= 18 => multiplier = multiplier.max(FRIDAY_EVENING_MULTIPLIER),
            Weekday::Sat | Weekday::Sun => multiplier = multiplier.max(WEEKEND_MULTIPLIER),
            _ => {}
        }

        if conditions.weather.is_some_and(|w| w.is_severe()) {
            multiplier = (multiplier * WEATHER_FACTOR).min(WEATHER_CAP);
        }

        if is_high_demand(conditions) {
            multiplier = (multiplier * DEMAND_FACTOR).min(MAX_SURGE_MULTIPLIER);
        }

        multiplier.min(MAX_SURGE_MULTIPLIER)
    }

    /// `fee * multiplier`, half-up to the paisa
    pub fn apply(&self, fee: Paise, multiplier: Decimal) -> Paise {
        Decimal::from(fee)
            .checked_mul(multiplier)
            .map_or(Paise::MAX, round_half_up)
    }

    pub fn reason(&self, conditions: &SurgeConditions, multiplier: Decimal) -> Option<String> {
        if multiplier <= Decimal::ONE {
            return None;
        }

        let mut reasons = Vec::new();
        if is_peak_hour(conditions.local_time.hour()) {
            reasons.push("Peak hours");
        }
        match conditions.weather {
            Some(Weather::Rain) => reasons.push("Rain"),
            Some(Weather::ExtremeHeat) => reasons.push("Extreme heat"),
            _ => {}
        }
        if is_high_demand(conditions) {
            reasons.push("High demand");
        }

        if reasons.is_empty() {
            Some("Surge pricing applied".to_string())
        } else {
            Some(reasons.join(" + "))
        }
    }

    pub fn quote(&self, fee: Paise, conditions: &SurgeConditions) -> SurgeQuote {
        let multiplier = self.multiplier(conditions);
        let surged_fee = self.apply(fee, multiplier);

        debug!(
            "Surge {}x at {}: {} -> {}",
            multiplier, conditions.local_time, fee, surged_fee
        );

        SurgeQuote {
            multiplier,
            base_fee: fee,
            surged_fee,
            reason: self.reason(conditions, multiplier),
        }
    }
}

fn is_peak_hour(hour: u32) -> bool {
    (12..14).contains(&hour) || (18..22).contains(&hour)
}

fn is_high_demand(conditions: &SurgeConditions) -> bool {
    conditions.demand.is_some_and(|d| d > HIGH_DEMAND)
}
