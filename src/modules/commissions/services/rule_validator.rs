use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::commissions::models::{CommissionRule, RuleType};

/// Outcome of checking an admin-edited rule list. Unlike tier validation this
/// collects every problem, since admins fix rule tables in bulk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSetValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Validate a commission rule list before it is handed to resolvers
pub fn validate_rules(rules: &[CommissionRule]) -> RuleSetValidation {
    let mut errors = Vec::new();

    if rules.is_empty() {
        errors.push("At least one commission rule is required".to_string());
        return RuleSetValidation {
            is_valid: false,
            errors,
        };
    }

    let has_default = rules
        .iter()
        .any(|rule| rule.rule_type == RuleType::Default && rule.is_active);
    if !has_default {
        errors.push("At least one active default commission rule is required".to_string());
    }

    for (index, rule) in rules.iter().enumerate() {
        let n = index + 1;

        if rule.commission_percent < Decimal::ZERO
            || rule.commission_percent > Decimal::ONE_HUNDRED
        {
            errors.push(format!("Rule {}: Commission percent must be between 0 and 100", n));
        }

        if rule.order_value_min < 0 {
            errors.push(format!("Rule {}: Order value min cannot be negative", n));
        }

        if let Some(max) = rule.order_value_max {
            if max < rule.order_value_min {
                errors.push(format!("Rule {}: Order value max must be greater than min", n));
            }
        }

        if let Some(until) = rule.effective_until {
            if until <= rule.effective_from {
                errors.push(format!("Rule {}: Effective until must be after effective from", n));
            }
        }

        match rule.rule_type {
            RuleType::Vendor if is_blank(rule.vendor_id.as_deref()) => {
                errors.push(format!("Rule {}: Vendor-specific rule must have vendor_id", n));
            }
            RuleType::Category if is_blank(rule.category.as_deref()) => {
                errors.push(format!("Rule {}: Category-specific rule must have category", n));
            }
            _ => {}
        }
    }

    RuleSetValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
