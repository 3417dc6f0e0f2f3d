// Checkout flow: partner tiers are validated, the cart is priced per tier,
// delivery is quoted and the order's commission split is resolved.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal_macros::dec;

use wyshkit_pricing::analytics::{CommissionAnalytics, CommissionRecord, TimeRange};
use wyshkit_pricing::commissions::{CommissionRule, CommissionRuleResolver, CommissionRuleSet, RuleType};
use wyshkit_pricing::core::format_inr;
use wyshkit_pricing::delivery::{DeliveryFeeCalculator, DeliveryFeeConfig};
use wyshkit_pricing::tiered_pricing::{BulkTier, BulkTierValidator, TieredPriceCalculator};

fn launch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

fn checkout_time() -> DateTime<Utc> {
    launch() + Duration::days(45)
}

#[test]
fn test_corporate_gift_order() {
    // ₹150 mugs with partner tiers at ₹140 from 10 and ₹130 from 50
    let base_price = 15_000;
    let tiers = vec![BulkTier::new(10, 14_000), BulkTier::new(50, 13_000)];
    assert!(BulkTierValidator::default().validate(&tiers, base_price).valid);

    let calculator = TieredPriceCalculator::new(base_price);
    let line = calculator.calculate(60, &tiers);
    assert_eq!(line.subtotal, 780_000);
    assert_eq!(line.savings, 120_000);

    let delivery_config = DeliveryFeeConfig::default();
    let delivery = DeliveryFeeCalculator::new(&delivery_config).calculate(line.subtotal, 4.0);
    assert!(delivery.is_free_delivery);
    assert_eq!(delivery.total_fee, 0);

    let rules = CommissionRuleSet::default_rules(launch());
    let calc = CommissionRuleResolver::new(&rules)
        .resolve_at(line.subtotal, Some("mug-studio"), Some("drinkware"), checkout_time())
        .unwrap();

    // ₹7,800 is below the ₹10,000 volume tier
    assert_eq!(calc.applied_rule.id, "default");
    assert_eq!(calc.commission_amount, 140_400);
    assert_eq!(calc.vendor_receives, 639_600);

    let breakdown = calc.breakdown();
    assert_eq!(breakdown.order_value, "₹7,800");
    assert_eq!(breakdown.commission_amount, "₹1,404");
    assert_eq!(breakdown.vendor_payout, "₹6,396");
}

#[test]
fn test_small_cart_prompts() {
    let base_price = 50_000;
    let calculator = TieredPriceCalculator::new(base_price);
    let tiers = calculator.default_tiers();
    assert!(BulkTierValidator::default().validate(&tiers, base_price).valid);

    let line = calculator.calculate(2, &tiers);
    assert_eq!(line.subtotal, 100_000);

    let next = calculator.next_tier_info(2, &tiers).unwrap();
    assert_eq!(next.message, "Add 8 more items to unlock 7% discount!");

    let delivery_config = DeliveryFeeConfig::default();
    let delivery = DeliveryFeeCalculator::new(&delivery_config);
    let fee = delivery.calculate(line.subtotal, 2.0);
    assert_eq!(fee.total_fee, 5_000);

    let banner = delivery.message(line.subtotal, 2.0);
    assert_eq!(banner.message, format!("Add {} more for FREE delivery!", format_inr(400_000)));

    let rules = CommissionRuleSet::default_rules(launch());
    let upsell = CommissionRuleResolver::new(&rules)
        .tier_upsell_info_at(line.subtotal, checkout_time())
        .unwrap();
    assert_eq!(upsell.amount_needed, 900_000);
}

#[test]
fn test_vendor_simulation_and_payout_report() {
    let mut rules = CommissionRuleSet::default_rules(launch());
    rules.rules.push(
        CommissionRule::new("florist-deal", "Florist partner", RuleType::Vendor, dec!(10), launch())
            .with_vendor("petal-co"),
    );
    let resolver = CommissionRuleResolver::new(&rules);

    let simulation = resolver
        .simulate_at(2_000_000, "petal-co", Some("flowers"), checkout_time())
        .unwrap();
    assert_eq!(simulation.calculation.commission_amount, 200_000);
    assert_eq!(simulation.effective_rates.base_rate, Some(dec!(10)));
    assert_eq!(simulation.effective_rates.volume_rates.len(), 2);
    assert!(!simulation.effective_rates.has_override);

    let json = serde_json::to_value(&simulation).unwrap();
    assert_eq!(json["breakdown"]["rule_name"], "Florist partner");

    let records: Vec<CommissionRecord> = [300_000, 2_000_000]
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let calc = resolver
                .resolve_at(*value, Some("petal-co"), Some("flowers"), checkout_time())
                .unwrap();
            CommissionRecord::from_calculation(
                format!("order-{}", i),
                Some("petal-co"),
                Some("flowers"),
                &calc,
                checkout_time(),
            )
        })
        .collect();

    let summary = CommissionAnalytics::new().summarize(
        Some("petal-co"),
        &records,
        TimeRange::new(30, checkout_time() + Duration::days(1)),
    );
    assert_eq!(summary.total_commission, 230_000);
    assert_eq!(summary.total_vendor_payout(), 2_070_000);
    assert_eq!(summary.average_commission_rate, dec!(10.00));
}
