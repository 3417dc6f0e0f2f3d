use crate::core::{AppError, Result};
use chrono::{DateTime, Utc};
use std::env;

use crate::modules::analytics::models::TimeRange;
use crate::modules::commissions::models::CommissionRuleSet;
use crate::modules::delivery::models::DeliveryFeeConfig;
use crate::modules::tiered_pricing::services::{BulkTierValidator, MAX_TIERS};

pub mod delivery;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub commission: CommissionConfig,
    pub delivery: DeliveryFeeConfig,
    pub bulk_pricing: BulkPricingConfig,
    pub analytics: AnalyticsConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct CommissionConfig {
    /// YAML or JSON rule file; built-in defaults when unset
    pub rules_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BulkPricingConfig {
    pub max_tiers: usize,
}

#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    pub time_range_days: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            commission: CommissionConfig {
                rules_path: env::var("COMMISSION_RULES_PATH")
                    .ok()
                    .filter(|path| !path.trim().is_empty()),
            },
            delivery: DeliveryFeeConfig::from_env()?,
            bulk_pricing: BulkPricingConfig {
                max_tiers: env::var("BULK_PRICING_MAX_TIERS")
                    .unwrap_or_else(|_| MAX_TIERS.to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid BULK_PRICING_MAX_TIERS".to_string())
                    })?,
            },
            analytics: AnalyticsConfig {
                time_range_days: env::var("COMMISSION_ANALYTICS_DAYS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid COMMISSION_ANALYTICS_DAYS".to_string())
                    })?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.bulk_pricing.max_tiers == 0 {
            return Err(AppError::Configuration(
                "Bulk pricing max tiers must be greater than 0".to_string(),
            ));
        }

        if self.analytics.time_range_days == 0 {
            return Err(AppError::Configuration(
                "Analytics time range must be greater than 0 days".to_string(),
            ));
        }

        self.delivery.validate()
    }

    /// Rule set from `COMMISSION_RULES_PATH`, or the storefront defaults
    pub fn load_rule_set(&self) -> Result<CommissionRuleSet> {
        match &self.commission.rules_path {
            Some(path) => CommissionRuleSet::from_file(path),
            None => Ok(CommissionRuleSet::default_rules(Utc::now())),
        }
    }

    pub fn tier_validator(&self) -> BulkTierValidator {
        BulkTierValidator::new(self.bulk_pricing.max_tiers)
    }

    /// Analytics window ending at `now`
    pub fn analytics_range(&self, now: DateTime<Utc>) -> TimeRange {
        TimeRange::new(self.analytics.time_range_days, now)
    }

    /// Tracing directive used when `RUST_LOG` is unset
    pub fn log_directive(&self) -> String {
        format!("wyshkit_pricing={}", self.app.log_level)
    }
}
