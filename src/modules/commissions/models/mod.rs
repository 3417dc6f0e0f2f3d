pub mod commission_calculation;
pub mod commission_rule;
pub mod rule_set;

pub use commission_calculation::{CommissionBreakdown, CommissionCalculation};
pub use commission_rule::{CommissionRule, RuleType, VendorCommissionOverride};
pub use rule_set::CommissionRuleSet;
