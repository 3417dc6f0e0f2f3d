use crate::core::{AppError, Result};
use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;

use crate::modules::delivery::models::delivery_config::{
    DEFAULT_BASE_FEE, DEFAULT_FREE_DELIVERY_THRESHOLD, DEFAULT_INCLUDED_KM,
    DEFAULT_NEAR_FREE_WINDOW,
};
use crate::modules::delivery::models::DeliveryFeeConfig;

impl DeliveryFeeConfig {
    /// Delivery pricing from the environment, storefront bands included
    pub fn from_env() -> Result<Self> {
        let per_km_fee = match env::var("DELIVERY_PER_KM_FEE_PAISE") {
            Ok(raw) if !raw.trim().is_empty() => Some(raw.trim().parse().map_err(|_| {
                AppError::Configuration("Invalid DELIVERY_PER_KM_FEE_PAISE".to_string())
            })?),
            _ => None,
        };

        Ok(DeliveryFeeConfig {
            free_delivery_threshold: env::var("FREE_DELIVERY_THRESHOLD_PAISE")
                .unwrap_or_else(|_| DEFAULT_FREE_DELIVERY_THRESHOLD.to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid FREE_DELIVERY_THRESHOLD_PAISE".to_string())
                })?,
            base_fee: env::var("DELIVERY_BASE_FEE_PAISE")
                .unwrap_or_else(|_| DEFAULT_BASE_FEE.to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid DELIVERY_BASE_FEE_PAISE".to_string())
                })?,
            per_km_fee,
            included_km: match env::var("DELIVERY_INCLUDED_KM") {
                Ok(raw) => Decimal::from_str(raw.trim()).map_err(|_| {
                    AppError::Configuration("Invalid DELIVERY_INCLUDED_KM".to_string())
                })?,
                Err(_) => DEFAULT_INCLUDED_KM,
            },
            near_free_window: env::var("DELIVERY_NEAR_FREE_WINDOW_PAISE")
                .unwrap_or_else(|_| DEFAULT_NEAR_FREE_WINDOW.to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid DELIVERY_NEAR_FREE_WINDOW_PAISE".to_string())
                })?,
            bands: DeliveryFeeConfig::storefront_bands(),
        })
    }
}
