use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, warn};

use crate::core::money::{format_inr, percent_of};
use crate::core::{AppError, Paise, Result};
use crate::modules::commissions::models::{
    CommissionBreakdown, CommissionCalculation, CommissionRule, CommissionRuleSet, RuleType,
    VendorCommissionOverride,
};

/// The order attributes a rule can match on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderContext<'a> {
    pub order_value: Paise,
    pub vendor_id: Option<&'a str>,
    pub category: Option<&'a str>,
}

impl<'a> OrderContext<'a> {
    pub fn new(order_value: Paise, vendor_id: Option<&'a str>, category: Option<&'a str>) -> Self {
        Self {
            order_value,
            vendor_id,
            category,
        }
    }
}

/// One link of the selection chain: rules of `rule_type` that satisfy `matches`
pub struct PriorityStep {
    pub rule_type: RuleType,
    pub matches: fn(&CommissionRule, &OrderContext<'_>) -> bool,
}

/// Rule selection order, first step with a match wins
pub const PRIORITY_CHAIN: [PriorityStep; 4] = [
    PriorityStep {
        rule_type: RuleType::Vendor,
        matches: vendor_matches,
    },
    PriorityStep {
        rule_type: RuleType::Category,
        matches: category_matches,
    },
    PriorityStep {
        rule_type: RuleType::Volume,
        matches: volume_matches,
    },
    PriorityStep {
        rule_type: RuleType::Default,
        matches: default_matches,
    },
];

fn vendor_matches(rule: &CommissionRule, ctx: &OrderContext<'_>) -> bool {
    ctx.vendor_id.is_some()
        && rule.vendor_id.as_deref() == ctx.vendor_id
        && rule.covers_value(ctx.order_value)
}

fn category_matches(rule: &CommissionRule, ctx: &OrderContext<'_>) -> bool {
    ctx.category.is_some()
        && rule.category.as_deref() == ctx.category
        && rule.covers_value(ctx.order_value)
}

fn volume_matches(rule: &CommissionRule, ctx: &OrderContext<'_>) -> bool {
    rule.covers_value(ctx.order_value)
}

// Defaults are the range-unconstrained fallback
fn default_matches(_rule: &CommissionRule, _ctx: &OrderContext<'_>) -> bool {
    true
}

/// Walk the priority chain over `rules`. Within a step the lowest `priority`
/// wins and ties keep list order.
pub fn select_in_chain<'r, I>(rules: I, ctx: &OrderContext<'_>) -> Option<&'r CommissionRule>
where
    I: IntoIterator<Item = &'r CommissionRule>,
    I::IntoIter: Clone,
{
    let rules = rules.into_iter();
    PRIORITY_CHAIN.iter().find_map(|step| {
        rules
            .clone()
            .filter(|rule| rule.rule_type == step.rule_type && (step.matches)(rule, ctx))
            .min_by_key(|rule| rule.priority)
    })
}

/// Next cheaper volume tier reachable by growing the order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierUpsellInfo {
    pub current_percent: Decimal,
    pub next_rule: CommissionRule,
    pub next_percent: Decimal,
    /// Additional order value needed to enter the next tier
    pub amount_needed: Paise,
    /// Commission saved on an order at the next tier's threshold
    pub commission_savings: Paise,
    pub message: String,
}

/// One rung of the volume ladder
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeRate {
    pub order_value_min: Paise,
    pub order_value_max: Option<Paise>,
    pub rate: Decimal,
}

/// Rates a vendor can expect, for partner-facing displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveRates {
    pub base_rate: Option<Decimal>,
    pub volume_rates: Vec<VolumeRate>,
    pub has_override: bool,
    pub override_reason: Option<String>,
}

/// Admin what-if result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommissionSimulation {
    pub calculation: CommissionCalculation,
    pub breakdown: CommissionBreakdown,
    pub effective_rates: EffectiveRates,
    pub upsell: Option<TierUpsellInfo>,
}

/// Resolves the commission rule for an order and computes the payout split
pub struct CommissionRuleResolver<'a> {
    rule_set: &'a CommissionRuleSet,
}

impl<'a> CommissionRuleResolver<'a> {
    pub fn new(rule_set: &'a CommissionRuleSet) -> Self {
        Self { rule_set }
    }

    /// Resolve against the rules in effect now
    pub fn resolve(
        &self,
        order_value: Paise,
        vendor_id: Option<&str>,
        category: Option<&str>,
    ) -> Result<CommissionCalculation> {
        self.resolve_at(order_value, vendor_id, category, Utc::now())
    }

    /// Resolve against the rules in effect at `at`
    ///
    /// # Errors
    /// `Validation` for a negative order value, `NoApplicableRule` when not even
    /// a default rule is in effect.
    pub fn resolve_at(
        &self,
        order_value: Paise,
        vendor_id: Option<&str>,
        category: Option<&str>,
        at: DateTime<Utc>,
    ) -> Result<CommissionCalculation> {
        if order_value < 0 {
            return Err(AppError::validation(format!(
                "Order value cannot be negative, got {}",
                order_value
            )));
        }

        let ctx = OrderContext::new(order_value, vendor_id, category);
        let rule = self.select_rule_at(&ctx, at).ok_or_else(|| {
            warn!(
                "No commission rule applies to order value {} (vendor: {:?}, category: {:?})",
                order_value, vendor_id, category
            );
            AppError::NoApplicableRule {
                order_value,
                vendor_id: vendor_id.map(str::to_string),
                category: category.map(str::to_string),
            }
        })?;

        let calculation = CommissionCalculation::from_rule(order_value, &rule);

        debug!(
            "Commission for {}: rule {} ({}, {}%) -> commission {}, vendor {}",
            order_value,
            rule.id,
            rule.rule_type,
            rule.commission_percent,
            calculation.commission_amount,
            calculation.vendor_receives
        );

        Ok(calculation)
    }

    /// Vendor override first, then the priority chain
    pub fn select_rule_at(
        &self,
        ctx: &OrderContext<'_>,
        at: DateTime<Utc>,
    ) -> Option<Cow<'a, CommissionRule>> {
        if let Some(vendor_id) = ctx.vendor_id {
            if let Some(found) = self.find_active_override(vendor_id, at) {
                return Some(Cow::Owned(found.as_rule()));
            }
        }

        let rule_set: &'a CommissionRuleSet = self.rule_set;
        select_in_chain(rule_set.active_rules_at(at), ctx).map(Cow::Borrowed)
    }

    /// Most recent active override for the vendor
    pub fn find_active_override(
        &self,
        vendor_id: &str,
        at: DateTime<Utc>,
    ) -> Option<&'a VendorCommissionOverride> {
        let rule_set: &'a CommissionRuleSet = self.rule_set;
        rule_set
            .overrides
            .iter()
            .filter(|o| o.vendor_id == vendor_id && o.is_effective_at(at))
            .max_by_key(|o| o.effective_from)
    }

    pub fn tier_upsell_info(&self, current_order_value: Paise) -> Option<TierUpsellInfo> {
        self.tier_upsell_info_at(current_order_value, Utc::now())
    }

    /// Nearest volume tier above `current_order_value` with a strictly lower
    /// rate. `None` when already at the best reachable tier.
    pub fn tier_upsell_info_at(
        &self,
        current_order_value: Paise,
        at: DateTime<Utc>,
    ) -> Option<TierUpsellInfo> {
        let ctx = OrderContext::new(current_order_value, None, None);
        let current = select_in_chain(self.rule_set.active_rules_at(at), &ctx)?;
        let current_percent = current.commission_percent;

        let next = self
            .rule_set
            .active_rules_at(at)
            .filter(|rule| {
                rule.rule_type == RuleType::Volume
                    && rule.order_value_min > current_order_value
                    && rule.commission_percent < current_percent
            })
            .min_by_key(|rule| (rule.order_value_min, rule.priority))?;

        let amount_needed = next.order_value_min - current_order_value;
        let commission_savings = percent_of(next.order_value_min, current_percent)
            - percent_of(next.order_value_min, next.commission_percent);

        let message = format!(
            "Add {} more to lower commission from {}% to {}% (save {})",
            format_inr(amount_needed),
            current_percent.normalize(),
            next.commission_percent.normalize(),
            format_inr(commission_savings)
        );

        Some(TierUpsellInfo {
            current_percent,
            next_rule: next.clone(),
            next_percent: next.commission_percent,
            amount_needed,
            commission_savings,
            message,
        })
    }

    pub fn effective_rates(&self, vendor_id: &str, category: Option<&str>) -> EffectiveRates {
        self.effective_rates_at(vendor_id, category, Utc::now())
    }

    /// Base rate (vendor, category or default, ignoring value ranges) plus the
    /// volume ladder sorted by threshold
    pub fn effective_rates_at(
        &self,
        vendor_id: &str,
        category: Option<&str>,
        at: DateTime<Utc>,
    ) -> EffectiveRates {
        if let Some(found) = self.find_active_override(vendor_id, at) {
            return EffectiveRates {
                base_rate: Some(found.commission_percent),
                volume_rates: Vec::new(),
                has_override: true,
                override_reason: found.reason.clone(),
            };
        }

        let base_rate = [RuleType::Vendor, RuleType::Category, RuleType::Default]
            .iter()
            .find_map(|rule_type| {
                self.rule_set
                    .active_rules_at(at)
                    .filter(|rule| rule.rule_type == *rule_type)
                    .filter(|rule| match rule.rule_type {
                        RuleType::Vendor => rule.vendor_id.as_deref() == Some(vendor_id),
                        RuleType::Category => category.is_some() && rule.category.as_deref() == category,
                        _ => true,
                    })
                    .min_by_key(|rule| rule.priority)
            })
            .map(|rule| rule.commission_percent);

        let mut volume: Vec<&CommissionRule> = self
            .rule_set
            .active_rules_at(at)
            .filter(|rule| rule.rule_type == RuleType::Volume)
            .collect();
        volume.sort_by_key(|rule| rule.order_value_min);

        EffectiveRates {
            base_rate,
            volume_rates: volume
                .into_iter()
                .map(|rule| VolumeRate {
                    order_value_min: rule.order_value_min,
                    order_value_max: rule.order_value_max,
                    rate: rule.commission_percent,
                })
                .collect(),
            has_override: false,
            override_reason: None,
        }
    }

    pub fn simulate(
        &self,
        order_value: Paise,
        vendor_id: &str,
        category: Option<&str>,
    ) -> Result<CommissionSimulation> {
        self.simulate_at(order_value, vendor_id, category, Utc::now())
    }

    /// Calculation, display breakdown, rate card and upsell for one order
    pub fn simulate_at(
        &self,
        order_value: Paise,
        vendor_id: &str,
        category: Option<&str>,
        at: DateTime<Utc>,
    ) -> Result<CommissionSimulation> {
        let calculation = self.resolve_at(order_value, Some(vendor_id), category, at)?;
        let breakdown = calculation.breakdown();

        Ok(CommissionSimulation {
            calculation,
            breakdown,
            effective_rates: self.effective_rates_at(vendor_id, category, at),
            upsell: self.tier_upsell_info_at(order_value, at),
        })
    }
}
