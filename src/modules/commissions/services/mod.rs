pub mod rule_resolver;
pub mod rule_validator;

pub use rule_resolver::{
    select_in_chain, CommissionRuleResolver, CommissionSimulation, EffectiveRates, OrderContext,
    PriorityStep, TierUpsellInfo, VolumeRate, PRIORITY_CHAIN,
};
pub use rule_validator::{validate_rules, RuleSetValidation};
