// Loading commission rule files (YAML and JSON) and resolving against them

use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;
use std::path::PathBuf;

use wyshkit_pricing::commissions::{CommissionRuleResolver, CommissionRuleSet, RuleType};
use wyshkit_pricing::config::{AnalyticsConfig, AppConfig, BulkPricingConfig, CommissionConfig, Config};
use wyshkit_pricing::core::AppError;
use wyshkit_pricing::delivery::DeliveryFeeConfig;

const RULES_YAML: &str = r#"
rules:
  - id: default
    name: Default Commission
    rule_type: default
    commission_percent: 18
    effective_from: "2025-01-01T00:00:00Z"
  - id: volume-10k
    name: Volume 10k
    rule_type: volume
    order_value_min: 1000000
    order_value_max: 4999999
    commission_percent: 15
    effective_from: "2025-01-01T00:00:00Z"
  - id: cakes
    name: Cakes
    rule_type: category
    category: cakes
    commission_percent: 20
    effective_from: "2025-01-01T00:00:00Z"
    effective_until: "2025-12-31T00:00:00Z"
overrides:
  - id: ovr-1
    vendor_id: bakery-42
    commission_percent: 8
    reason: Festive campaign
    effective_from: "2025-03-01T00:00:00Z"
"#;

const RULES_JSON: &str = r#"{
  "rules": [
    {
      "id": "default",
      "name": "Default Commission",
      "rule_type": "default",
      "commission_percent": "18",
      "effective_from": "2025-01-01T00:00:00Z"
    },
    {
      "id": "vendor-petal",
      "name": "Petal Co",
      "rule_type": "vendor",
      "vendor_id": "petal-co",
      "commission_percent": "12.5",
      "effective_from": "2025-01-01T00:00:00Z",
      "priority": 1
    }
  ]
}"#;

fn temp_file(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("wyshkit-pricing-{}-{}", std::process::id(), name));
    std::fs::write(&path, body).unwrap();
    path
}

fn config_with_rules(path: Option<String>) -> Config {
    Config {
        app: AppConfig {
            env: "test".to_string(),
            log_level: "debug".to_string(),
        },
        commission: CommissionConfig { rules_path: path },
        delivery: DeliveryFeeConfig::default(),
        bulk_pricing: BulkPricingConfig { max_tiers: 5 },
        analytics: AnalyticsConfig { time_range_days: 30 },
    }
}

#[test]
fn test_yaml_rules() {
    let set = CommissionRuleSet::from_yaml_str(RULES_YAML).unwrap();
    assert_eq!(set.rules.len(), 3);
    assert_eq!(set.rules[1].rule_type, RuleType::Volume);
    assert!(set.rules.iter().all(|rule| rule.is_active));
    assert_eq!(set.overrides.len(), 1);

    let resolver = CommissionRuleResolver::new(&set);
    let june = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

    let cake = resolver.resolve_at(2_000_000, Some("v1"), Some("cakes"), june).unwrap();
    assert_eq!(cake.applied_rule.id, "cakes");

    let festive = resolver.resolve_at(100_000, Some("bakery-42"), Some("cakes"), june).unwrap();
    assert_eq!(festive.commission_percent(), dec!(8));
    assert_eq!(festive.commission_amount, 8_000);

    // cakes rule expired, override not yet started
    let next_year = Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap();
    let cake = resolver.resolve_at(2_000_000, Some("v1"), Some("cakes"), next_year).unwrap();
    assert_eq!(cake.applied_rule.id, "volume-10k");
    let february = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
    let early = resolver.resolve_at(100_000, Some("bakery-42"), None, february).unwrap();
    assert_eq!(early.applied_rule.id, "default");
}

#[test]
fn test_json_rules() {
    let set = CommissionRuleSet::from_json_str(RULES_JSON).unwrap();
    let at = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();

    let calc = CommissionRuleResolver::new(&set)
        .resolve_at(100_000, Some("petal-co"), None, at)
        .unwrap();
    assert_eq!(calc.commission_percent(), dec!(12.5));
    assert_eq!(calc.commission_amount, 12_500);
    assert_eq!(set.rules[1].priority, 1);
}

#[test]
fn test_from_file_by_extension() {
    let yaml = temp_file("rules.yaml", RULES_YAML);
    let json = temp_file("rules.json", RULES_JSON);

    assert_eq!(CommissionRuleSet::from_file(&yaml).unwrap().rules.len(), 3);
    assert_eq!(CommissionRuleSet::from_file(&json).unwrap().rules.len(), 2);

    let config = config_with_rules(Some(yaml.to_string_lossy().into_owned()));
    assert_eq!(config.load_rule_set().unwrap().overrides.len(), 1);

    std::fs::remove_file(yaml).ok();
    std::fs::remove_file(json).ok();
}

#[test]
fn test_missing_file_is_configuration_error() {
    let config = config_with_rules(Some("/nonexistent/commission-rules.yaml".to_string()));
    let err = config.load_rule_set().unwrap_err();
    assert!(matches!(err, AppError::Configuration(_)));
    assert!(err.is_configuration_defect());
}

#[test]
fn test_config_without_path_uses_defaults() {
    let set = config_with_rules(None).load_rule_set().unwrap();
    let ids: Vec<&str> = set.rules.iter().map(|rule| rule.id.as_str()).collect();
    assert_eq!(ids, vec!["default", "volume-10k", "volume-50k"]);
}

#[test]
fn test_rule_set_without_default_rejected() {
    let body = r#"
rules:
  - id: volume-only
    rule_type: volume
    order_value_min: 1000000
    commission_percent: 15
    effective_from: "2025-01-01T00:00:00Z"
"#;
    let err = CommissionRuleSet::from_yaml_str(body).unwrap_err();
    assert!(matches!(err, AppError::Configuration(_)));
}

#[test]
fn test_aggregated_rule_errors() {
    let body = r#"
rules:
  - id: default
    rule_type: default
    commission_percent: 120
    effective_from: "2025-01-01T00:00:00Z"
  - id: vendor
    rule_type: vendor
    commission_percent: 10
    effective_from: "2025-01-01T00:00:00Z"
"#;
    let err = CommissionRuleSet::from_yaml_str(body).unwrap_err();
    let AppError::Configuration(message) = err else {
        panic!("expected configuration error");
    };
    assert!(message.contains("Rule 1"));
    assert!(message.contains("Rule 2"));
}

#[test]
fn test_malformed_yaml() {
    let err = CommissionRuleSet::from_yaml_str("rules: [").unwrap_err();
    assert!(matches!(err, AppError::Yaml(_)));
}
