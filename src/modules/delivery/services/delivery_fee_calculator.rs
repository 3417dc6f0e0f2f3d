use rust_decimal::prelude::*;
use tracing::debug;

use crate::core::money::{format_inr, round_half_up};
use crate::core::Paise;
use crate::modules::delivery::models::{
    BandStatus, DeliveryBandBreakdown, DeliveryFeeBand, DeliveryFeeBreakdown, DeliveryFeeConfig,
    DeliveryMessage, SurgeConditions, SurgedDeliveryFee,
};
use crate::modules::delivery::services::SurgePricingCalculator;

/// Computes delivery fees and upsell banners for a cart
#[derive(Debug, Clone, Copy)]
pub struct DeliveryFeeCalculator<'a> {
    config: &'a DeliveryFeeConfig,
}

impl<'a> DeliveryFeeCalculator<'a> {
    pub fn new(config: &'a DeliveryFeeConfig) -> Self {
        Self { config }
    }

    /// Fee for a cart of `order_value` delivered `distance_km` away.
    ///
    /// Free once `order_value >= free_delivery_threshold`. Otherwise the
    /// matching band fee (or `base_fee`) plus the per-km surcharge beyond
    /// `included_km`. Negative or non-finite distances count as zero.
    pub fn calculate(&self, order_value: Paise, distance_km: f64) -> DeliveryFeeBreakdown {
        let base_fee = self
            .config
            .band_for(order_value)
            .map_or(self.config.base_fee, |band| band.fee);
        let distance_fee = self.distance_surcharge(distance_km);
        let chargeable = base_fee.saturating_add(distance_fee);

        let is_free_delivery = order_value >= self.config.free_delivery_threshold;

        let breakdown = if is_free_delivery {
            DeliveryFeeBreakdown {
                order_value,
                base_fee: 0,
                distance_fee: 0,
                total_fee: 0,
                is_free_delivery,
                amount_needed_for_free: 0,
                waived_fee: chargeable,
            }
        } else {
            DeliveryFeeBreakdown {
                order_value,
                base_fee,
                distance_fee,
                total_fee: chargeable,
                is_free_delivery,
                amount_needed_for_free: self.config.free_delivery_threshold - order_value,
                waived_fee: 0,
            }
        };

        debug!(
            "Delivery fee for {} at {} km: total {} (free: {})",
            order_value, distance_km, breakdown.total_fee, breakdown.is_free_delivery
        );

        breakdown
    }

    /// Upsell or confirmation banner for the cart
    pub fn message(&self, order_value: Paise, distance_km: f64) -> DeliveryMessage {
        let breakdown = self.calculate(order_value, distance_km);
        let progress_percent = self.progress_percent(order_value);

        if breakdown.is_free_delivery {
            let message = if breakdown.waived_fee > 0 {
                format!(
                    "Yay! You get FREE delivery on this order 🎉 You saved {}",
                    format_inr(breakdown.waived_fee)
                )
            } else {
                "Yay! You get FREE delivery on this order 🎉".to_string()
            };

            return DeliveryMessage {
                message,
                amount_needed: None,
                amount_saved: Some(breakdown.waived_fee),
                is_close_to_free: false,
                progress_percent,
            };
        }

        let amount_needed = breakdown.amount_needed_for_free;
        DeliveryMessage {
            message: format!("Add {} more for FREE delivery!", format_inr(amount_needed)),
            amount_needed: Some(amount_needed),
            amount_saved: None,
            is_close_to_free: amount_needed < self.config.near_free_window,
            progress_percent,
        }
    }

    /// `calculate` with the zone's surge applied to the total. Free delivery stays free.
    pub fn calculate_with_surge(
        &self,
        order_value: Paise,
        distance_km: f64,
        conditions: &SurgeConditions,
    ) -> SurgedDeliveryFee {
        let breakdown = self.calculate(order_value, distance_km);
        let surge = SurgePricingCalculator::new().quote(breakdown.total_fee, conditions);
        SurgedDeliveryFee { breakdown, surge }
    }

    /// Current band, the next one up the ladder and the spend needed to reach it
    pub fn band_breakdown(&self, order_value: Paise) -> DeliveryBandBreakdown {
        let current_band = self.config.band_for(order_value).cloned();
        let is_free = order_value >= self.config.free_delivery_threshold;

        let mut active: Vec<&DeliveryFeeBand> =
            self.config.bands.iter().filter(|b| b.is_active).collect();
        active.sort_by_key(|b| b.priority);

        let current_index = current_band
            .as_ref()
            .and_then(|current| active.iter().position(|b| *b == current));
        let next_band = current_index
            .and_then(|i| active.get(i + 1))
            .map(|b| (*b).clone());

        let target = next_band
            .as_ref()
            .map_or(self.config.free_delivery_threshold, |b| b.order_value_min);
        let amount_to_next_band = target.saturating_sub(order_value).max(0);

        let bands = active
            .iter()
            .map(|band| BandStatus {
                band: (*band).clone(),
                is_reached: order_value >= band.order_value_min,
                is_current: current_band.as_ref() == Some(*band),
            })
            .collect();

        DeliveryBandBreakdown {
            current_fee: current_band.as_ref().map_or(0, |b| b.fee),
            current_band,
            is_free,
            next_band,
            amount_to_next_band,
            bands,
        }
    }

    fn distance_surcharge(&self, distance_km: f64) -> Paise {
        let Some(per_km_fee) = self.config.per_km_fee else {
            return 0;
        };

        // NaN and non-positive distances are free; anything past Decimal's range saturates
        if distance_km.is_nan() || distance_km <= 0.0 {
            return 0;
        }
        let distance = Decimal::from_f64(distance_km).unwrap_or(Decimal::MAX);
        let chargeable_km = distance
            .checked_sub(self.config.included_km)
            .unwrap_or(Decimal::MAX)
            .max(Decimal::ZERO);

        chargeable_km
            .checked_mul(Decimal::from(per_km_fee))
            .map_or(Paise::MAX, round_half_up)
    }

    fn progress_percent(&self, order_value: Paise) -> u32 {
        let threshold = self.config.free_delivery_threshold;
        if threshold <= 0 || order_value >= threshold {
            return 100;
        }

        let percent = order_value.max(0).saturating_mul(100) / threshold;
        percent.clamp(0, 100) as u32
    }
}
