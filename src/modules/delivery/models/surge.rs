use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Paise;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    Clear,
    Rain,
    ExtremeHeat,
}

impl Weather {
    pub fn is_severe(self) -> bool {
        matches!(self, Weather::Rain | Weather::ExtremeHeat)
    }
}

/// What the delivery zone looks like when the order is placed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurgeConditions {
    /// Wall-clock time in the delivery zone
    pub local_time: NaiveDateTime,
    #[serde(default)]
    pub weather: Option<Weather>,
    /// Demand index, 0-100
    #[serde(default)]
    pub demand: Option<u32>,
}

impl SurgeConditions {
    pub fn at(local_time: NaiveDateTime) -> Self {
        Self {
            local_time,
            weather: None,
            demand: None,
        }
    }

    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn with_demand(mut self, demand: u32) -> Self {
        self.demand = Some(demand);
        self
    }
}

/// A delivery fee after surge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurgeQuote {
    pub multiplier: Decimal,
    pub base_fee: Paise,
    pub surged_fee: Paise,
    /// Customer-facing explanation, `None` without surge
    pub reason: Option<String>,
}

impl SurgeQuote {
    pub fn is_surged(&self) -> bool {
        self.multiplier > Decimal::ONE
    }
}
