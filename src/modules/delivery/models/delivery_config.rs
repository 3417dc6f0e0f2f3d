use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Paise, Result};

/// Free delivery from ₹5,000
pub const DEFAULT_FREE_DELIVERY_THRESHOLD: Paise = 500_000;
/// Fallback fee when no order-value band matches
pub const DEFAULT_BASE_FEE: Paise = 5_000;
/// "Close to free delivery" window, ₹1,000
pub const DEFAULT_NEAR_FREE_WINDOW: Paise = 100_000;
/// Distance covered by the base fee
pub const DEFAULT_INCLUDED_KM: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Fee for a range of cart values below the free-delivery threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryFeeBand {
    pub name: String,
    pub order_value_min: Paise,
    #[serde(default)]
    pub order_value_max: Option<Paise>,
    pub fee: Paise,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Lower is tried first
    #[serde(default)]
    pub priority: i32,
}

fn default_true() -> bool {
    true
}

impl DeliveryFeeBand {
    pub fn new(name: impl Into<String>, min: Paise, max: Option<Paise>, fee: Paise, priority: i32) -> Self {
        Self {
            name: name.into(),
            order_value_min: min,
            order_value_max: max,
            fee,
            is_active: true,
            priority,
        }
    }

    pub fn covers(&self, order_value: Paise) -> bool {
        order_value >= self.order_value_min
            && self.order_value_max.map_or(true, |max| order_value <= max)
    }
}

/// Static or admin-configured delivery pricing. Input only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryFeeConfig {
    pub free_delivery_threshold: Paise,
    pub base_fee: Paise,
    /// Surcharge per km beyond `included_km`; no distance pricing when `None`
    #[serde(default)]
    pub per_km_fee: Option<Paise>,
    pub included_km: Decimal,
    pub near_free_window: Paise,
    #[serde(default)]
    pub bands: Vec<DeliveryFeeBand>,
}

impl DeliveryFeeConfig {
    /// Flat `base_fee` below `free_delivery_threshold`, no bands or distance pricing
    pub fn flat(free_delivery_threshold: Paise, base_fee: Paise) -> Self {
        Self {
            free_delivery_threshold,
            base_fee,
            per_km_fee: None,
            included_km: DEFAULT_INCLUDED_KM,
            near_free_window: DEFAULT_NEAR_FREE_WINDOW,
            bands: Vec::new(),
        }
    }

    pub fn with_per_km_fee(mut self, per_km_fee: Paise, included_km: Decimal) -> Self {
        self.per_km_fee = Some(per_km_fee);
        self.included_km = included_km;
        self
    }

    pub fn with_bands(mut self, bands: Vec<DeliveryFeeBand>) -> Self {
        self.bands = bands;
        self
    }

    /// Storefront bands: ₹80 below ₹1,000, ₹50 to ₹2,499, ₹30 to ₹4,999
    pub fn storefront_bands() -> Vec<DeliveryFeeBand> {
        vec![
            DeliveryFeeBand::new("₹0-999", 0, Some(99_999), 8_000, 1),
            DeliveryFeeBand::new("₹1000-2499", 100_000, Some(249_999), 5_000, 2),
            DeliveryFeeBand::new("₹2500-4999", 250_000, Some(499_999), 3_000, 3),
        ]
    }

    /// First active band in priority order covering `order_value`
    pub fn band_for(&self, order_value: Paise) -> Option<&DeliveryFeeBand> {
        let mut active: Vec<&DeliveryFeeBand> = self.bands.iter().filter(|b| b.is_active).collect();
        active.sort_by_key(|b| b.priority);
        active.into_iter().find(|b| b.covers(order_value))
    }

    /// All configuration problems, in one message
    pub fn validate(&self) -> Result<()> {
        let errors = self.errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::configuration(errors.join("; ")))
        }
    }

    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.free_delivery_threshold < 0 {
            errors.push("Free delivery threshold cannot be negative".to_string());
        }
        if self.base_fee < 0 {
            errors.push("Base delivery fee cannot be negative".to_string());
        }
        if self.per_km_fee.is_some_and(|fee| fee < 0) {
            errors.push("Per-km delivery fee cannot be negative".to_string());
        }
        if self.included_km < Decimal::ZERO {
            errors.push("Included distance cannot be negative".to_string());
        }

        let mut bands: Vec<&DeliveryFeeBand> = self.bands.iter().collect();
        bands.sort_by_key(|b| b.order_value_min);

        for (i, band) in bands.iter().enumerate() {
            if band.fee < 0 {
                errors.push(format!("Band \"{}\": Fee cannot be negative", band.name));
            }

            let Some(max) = band.order_value_max else {
                continue;
            };

            if max < band.order_value_min {
                errors.push(format!("Band \"{}\": Max value must be greater than min value", band.name));
            }

            if let Some(next) = bands.get(i + 1) {
                if next.order_value_min <= max {
                    errors.push(format!("Overlap between \"{}\" and \"{}\"", band.name, next.name));
                } else if next.order_value_min > max.saturating_add(1) {
                    errors.push(format!("Gap between \"{}\" and \"{}\"", band.name, next.name));
                }
            }
        }

        errors
    }
}

impl Default for DeliveryFeeConfig {
    fn default() -> Self {
        Self::flat(DEFAULT_FREE_DELIVERY_THRESHOLD, DEFAULT_BASE_FEE)
            .with_bands(Self::storefront_bands())
    }
}
