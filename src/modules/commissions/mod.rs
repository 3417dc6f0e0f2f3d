pub mod models;
pub mod services;

pub use models::{CommissionCalculation, CommissionRule, CommissionRuleSet, RuleType};
pub use services::CommissionRuleResolver;
