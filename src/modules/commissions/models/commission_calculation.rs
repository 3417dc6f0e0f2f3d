use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::{format_inr, percent_of, Paise};
use crate::modules::commissions::models::CommissionRule;

/// Commission split for one order. Derived, never persisted.
///
/// `commission_amount + vendor_receives == order_value` always holds: only the
/// commission is rounded, the vendor receives the remainder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionCalculation {
    pub order_value: Paise,
    pub applied_rule: CommissionRule,
    pub commission_amount: Paise,
    pub vendor_receives: Paise,
    pub platform_earns: Paise,
}

impl CommissionCalculation {
    /// Apply `rule` to `order_value`
    pub fn from_rule(order_value: Paise, rule: &CommissionRule) -> Self {
        let commission_amount = percent_of(order_value, rule.commission_percent);
        let vendor_receives = order_value - commission_amount;

        Self {
            order_value,
            applied_rule: rule.clone(),
            commission_amount,
            vendor_receives,
            platform_earns: commission_amount,
        }
    }

    pub fn commission_percent(&self) -> Decimal {
        self.applied_rule.commission_percent
    }

    /// Formatted strings for admin and partner earnings views
    pub fn breakdown(&self) -> CommissionBreakdown {
        CommissionBreakdown {
            order_value: format_inr(self.order_value),
            commission_percent: format!("{}%", self.commission_percent().normalize()),
            commission_amount: format_inr(self.commission_amount),
            vendor_payout: format_inr(self.vendor_receives),
            rule_name: self.applied_rule.display_name(),
        }
    }
}

/// Display-ready commission figures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionBreakdown {
    pub order_value: String,
    pub commission_percent: String,
    pub commission_amount: String,
    pub vendor_payout: String,
    pub rule_name: String,
}
