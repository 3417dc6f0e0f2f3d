// Property-based tests for bulk tier price lookup
//
// - quantities below the first tier pay the base price
// - a tier's price applies across its whole derived range
// - subtotal and savings stay consistent with the unit price

use proptest::prelude::*;

use wyshkit_pricing::tiered_pricing::{BulkTier, TieredPriceCalculator};

const BASE_PRICE: i64 = 1_500;

fn tiers() -> Vec<BulkTier> {
    vec![BulkTier::new(10, 1_400), BulkTier::new(50, 1_300)]
}

proptest! {
    #[test]
    fn test_below_first_tier_is_base_price(quantity in 0u32..10u32) {
        let price = TieredPriceCalculator::new(BASE_PRICE).calculate(quantity, &tiers());

        prop_assert_eq!(price.price_per_item, BASE_PRICE);
        prop_assert_eq!(price.discount_percent, 0);
        prop_assert_eq!(price.tier_index, None);
        prop_assert_eq!(price.savings, 0);
    }

    #[test]
    fn test_first_tier_range(quantity in 10u32..50u32) {
        let price = TieredPriceCalculator::new(BASE_PRICE).calculate(quantity, &tiers());

        prop_assert_eq!(price.price_per_item, 1_400);
        prop_assert_eq!(price.tier_index, Some(0));
    }

    #[test]
    fn test_last_tier_is_unbounded(quantity in 50u32..100_000u32) {
        let price = TieredPriceCalculator::new(BASE_PRICE).calculate(quantity, &tiers());

        prop_assert_eq!(price.price_per_item, 1_300);
        prop_assert_eq!(price.tier_index, Some(1));
    }

    #[test]
    fn test_subtotal_and_savings(quantity in 0u32..10_000u32) {
        let price = TieredPriceCalculator::new(BASE_PRICE).calculate(quantity, &tiers());
        let quantity = i64::from(quantity);

        prop_assert_eq!(price.subtotal, price.price_per_item * quantity);
        prop_assert_eq!(price.subtotal + price.savings, BASE_PRICE * quantity);
    }

    #[test]
    fn test_unit_price_never_increases_with_quantity(quantity in 0u32..1_000u32) {
        let calculator = TieredPriceCalculator::new(BASE_PRICE);
        let here = calculator.calculate(quantity, &tiers());
        let next = calculator.calculate(quantity + 1, &tiers());

        prop_assert!(next.price_per_item <= here.price_per_item);
    }
}

#[test]
fn test_scenario_quantities() {
    let calculator = TieredPriceCalculator::new(BASE_PRICE);

    assert_eq!(calculator.calculate(5, &tiers()).price_per_item, 1_500);

    let ten = calculator.calculate(10, &tiers());
    assert_eq!(ten.price_per_item, 1_400);
    assert_eq!(ten.discount_percent, 7);
    assert_eq!(ten.subtotal, 14_000);
    assert_eq!(ten.savings, 1_000);

    let sixty = calculator.calculate(60, &tiers());
    assert_eq!(sixty.price_per_item, 1_300);
    assert_eq!(sixty.discount_percent, 13);
}

#[test]
fn test_huge_order_does_not_overflow() {
    let price = TieredPriceCalculator::new(10_000_000_000)
        .calculate(u32::MAX, &[BulkTier::new(10, 9_000_000_000)]);

    assert_eq!(price.tier_index, Some(0));
    assert_eq!(price.subtotal, i64::MAX);
    assert!(price.savings >= 0);
}

#[test]
fn test_no_tiers_is_base_price() {
    let price = TieredPriceCalculator::new(BASE_PRICE).calculate(500, &[]);
    assert_eq!(price.price_per_item, BASE_PRICE);
    assert_eq!(price.tier_index, None);
}

#[test]
fn test_zero_base_price_reports_no_discount() {
    let price = TieredPriceCalculator::new(0).calculate(10, &tiers());
    assert_eq!(price.price_per_item, 1_400);
    assert_eq!(price.discount_percent, 0);
    assert_eq!(price.savings, 0);
}

#[test]
fn test_gap_between_explicit_ranges_is_base_price() {
    let tiers = vec![
        BulkTier::new(10, 1_400).with_max_qty(19),
        BulkTier::new(30, 1_300),
    ];
    let calculator = TieredPriceCalculator::new(BASE_PRICE);

    assert_eq!(calculator.calculate(19, &tiers).tier_index, Some(0));
    assert_eq!(calculator.calculate(25, &tiers).price_per_item, BASE_PRICE);
    assert_eq!(calculator.calculate(30, &tiers).tier_index, Some(1));
}

#[test]
fn test_next_tier_prompt() {
    let calculator = TieredPriceCalculator::new(BASE_PRICE);

    let next = calculator.next_tier_info(5, &tiers()).unwrap();
    assert_eq!(next.quantity_needed, 5);
    assert_eq!(next.message, "Add 5 more items to unlock 7% discount!");

    let next = calculator.next_tier_info(49, &tiers()).unwrap();
    assert_eq!(next.tier_index, 1);
    assert_eq!(next.message, "Add 1 more item to unlock 13% discount!");

    assert!(calculator.next_tier_info(50, &tiers()).is_none());
}

#[test]
fn test_breakpoints_and_default_tiers() {
    let calculator = TieredPriceCalculator::new(BASE_PRICE);

    let rows = calculator.breakpoints(&tiers());
    assert_eq!(rows[0].range_label, "10-49 units");
    assert_eq!(rows[1].range_label, "50+ units");
    assert_eq!(rows[1].savings_message.as_deref(), Some("Save 13% on orders of 50+ items"));

    let defaults = TieredPriceCalculator::new(10_000).default_tiers();
    let prices: Vec<i64> = defaults.iter().map(|t| t.price).collect();
    assert_eq!(prices, vec![9_300, 8_700, 8_000]);
    assert_eq!(defaults[0].max_qty, Some(49));
    assert_eq!(defaults[2].discount_percent, Some(20));
}
