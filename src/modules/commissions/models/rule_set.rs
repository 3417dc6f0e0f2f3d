use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::core::{AppError, Result};
use crate::modules::commissions::models::{CommissionRule, RuleType, VendorCommissionOverride};
use crate::modules::commissions::services::validate_rules;

/// Snapshot of commission configuration, built once by the owning application
/// and lent to resolvers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommissionRuleSet {
    pub rules: Vec<CommissionRule>,
    #[serde(default)]
    pub overrides: Vec<VendorCommissionOverride>,
}

impl CommissionRuleSet {
    /// Wrap a rule list without validating it
    pub fn new(rules: Vec<CommissionRule>) -> Self {
        Self {
            rules,
            overrides: Vec::new(),
        }
    }

    pub fn with_overrides(mut self, overrides: Vec<VendorCommissionOverride>) -> Self {
        self.overrides = overrides;
        self
    }

    /// Storefront defaults: 18% base, 15% from ₹10,000 to ₹50,000, 12% above ₹50,000
    pub fn default_rules(effective_from: DateTime<Utc>) -> Self {
        Self::new(vec![
            CommissionRule::new(
                "default",
                "Default Commission (18%)",
                RuleType::Default,
                Decimal::from(18),
                effective_from,
            ),
            CommissionRule::new(
                "volume-10k",
                "Volume ₹10,000+ (15%)",
                RuleType::Volume,
                Decimal::from(15),
                effective_from,
            )
            .with_range(1_000_000, Some(4_999_999)),
            CommissionRule::new(
                "volume-50k",
                "Volume ₹50,000+ (12%)",
                RuleType::Volume,
                Decimal::from(12),
                effective_from,
            )
            .with_range(5_000_000, None),
        ])
    }

    /// Parse and validate a YAML rule file body
    pub fn from_yaml_str(body: &str) -> Result<Self> {
        let set: Self = serde_yaml::from_str(body)?;
        set.validate()?;
        Ok(set)
    }

    /// Parse and validate a JSON rule file body
    pub fn from_json_str(body: &str) -> Result<Self> {
        let set: Self = serde_json::from_str(body)?;
        set.validate()?;
        Ok(set)
    }

    /// Load a rule file, choosing the parser by extension (`.json`, otherwise YAML)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path).map_err(|e| {
            AppError::configuration(format!(
                "Cannot read commission rules from {}: {}",
                path.display(),
                e
            ))
        })?;

        let set = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&body)?,
            _ => Self::from_yaml_str(&body)?,
        };

        info!(
            "Loaded {} commission rules and {} overrides from {}",
            set.rules.len(),
            set.overrides.len(),
            path.display()
        );

        Ok(set)
    }

    /// Reject rule sets a resolver cannot rely on (aggregated messages)
    pub fn validate(&self) -> Result<()> {
        let validation = validate_rules(&self.rules);
        if validation.is_valid {
            return Ok(());
        }

        warn!("Commission rule set rejected: {:?}", validation.errors);
        Err(AppError::configuration(validation.errors.join("; ")))
    }

    pub fn active_rules_at(
        &self,
        at: DateTime<Utc>,
    ) -> impl Iterator<Item = &CommissionRule> + Clone {
        self.rules.iter().filter(move |rule| rule.is_effective_at(at))
    }
}
