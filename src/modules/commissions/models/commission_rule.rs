use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Paise;

/// Kind of commission rule. Resolution order is vendor, category, volume, default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    Default,
    Volume,
    Vendor,
    Category,
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleType::Default => write!(f, "default"),
            RuleType::Volume => write!(f, "volume"),
            RuleType::Vendor => write!(f, "vendor"),
            RuleType::Category => write!(f, "category"),
        }
    }
}

/// Admin-configured commission rule. Read-only to calculators; disabled via
/// `is_active` rather than deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionRule {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub rule_type: RuleType,
    /// Inclusive lower bound in paise
    #[serde(default)]
    pub order_value_min: Paise,
    /// Inclusive upper bound in paise, `None` for unbounded
    #[serde(default)]
    pub order_value_max: Option<Paise>,
    /// Percentage of the order value kept by the platform (0-100)
    pub commission_percent: Decimal,
    #[serde(default)]
    pub vendor_id: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub effective_from: DateTime<Utc>,
    #[serde(default)]
    pub effective_until: Option<DateTime<Utc>>,
    /// Tie-breaker within one rule type, lower wins
    #[serde(default)]
    pub priority: i32,
}

fn default_true() -> bool {
    true
}

impl CommissionRule {
    /// Create an active rule with an unbounded value range
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rule_type: RuleType,
        commission_percent: Decimal,
        effective_from: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rule_type,
            order_value_min: 0,
            order_value_max: None,
            commission_percent,
            vendor_id: None,
            category: None,
            is_active: true,
            effective_from,
            effective_until: None,
            priority: 0,
        }
    }

    /// Restrict the rule to `[min, max]` paise
    pub fn with_range(mut self, min: Paise, max: Option<Paise>) -> Self {
        self.order_value_min = min;
        self.order_value_max = max;
        self
    }

    pub fn with_vendor(mut self, vendor_id: impl Into<String>) -> Self {
        self.vendor_id = Some(vendor_id.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_effective_until(mut self, until: DateTime<Utc>) -> Self {
        self.effective_until = Some(until);
        self
    }

    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// `order_value >= min && (max == None || order_value <= max)`
    pub fn covers_value(&self, order_value: Paise) -> bool {
        order_value >= self.order_value_min
            && self.order_value_max.map_or(true, |max| order_value <= max)
    }

    /// Active and inside `[effective_from, effective_until)`
    pub fn is_effective_at(&self, at: DateTime<Utc>) -> bool {
        self.is_active
            && self.effective_from <= at
            && self.effective_until.map_or(true, |until| until > at)
    }

    /// Display name, falling back to the rule type and rate
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            format!("{} commission ({}%)", self.rule_type, self.commission_percent.normalize())
        } else {
            self.name.clone()
        }
    }
}

/// Per-vendor rate negotiated outside the rule table. An active override beats
/// every rule; among several, the most recent `effective_from` wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorCommissionOverride {
    pub id: String,
    pub vendor_id: String,
    pub commission_percent: Decimal,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub effective_from: DateTime<Utc>,
    #[serde(default)]
    pub effective_until: Option<DateTime<Utc>>,
}

impl VendorCommissionOverride {
    pub fn is_effective_at(&self, at: DateTime<Utc>) -> bool {
        self.is_active
            && self.effective_from <= at
            && self.effective_until.map_or(true, |until| until > at)
    }

    /// Express the override as a vendor rule so calculations keep one shape
    pub fn as_rule(&self) -> CommissionRule {
        let reason = self.reason.as_deref().unwrap_or("Custom rate");
        CommissionRule {
            id: self.id.clone(),
            name: format!("Vendor Override: {}", reason),
            rule_type: RuleType::Vendor,
            order_value_min: 0,
            order_value_max: None,
            commission_percent: self.commission_percent,
            vendor_id: Some(self.vendor_id.clone()),
            category: None,
            is_active: self.is_active,
            effective_from: self.effective_from,
            effective_until: self.effective_until,
            priority: i32::MIN,
        }
    }
}
