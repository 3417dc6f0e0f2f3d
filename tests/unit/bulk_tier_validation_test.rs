// Property-based tests for partner bulk tier validation
//
// Any tier list accepted by the validator has strictly ascending quantities,
// strictly descending prices and every price below retail.

use proptest::prelude::*;

use wyshkit_pricing::core::AppError;
use wyshkit_pricing::tiered_pricing::{BulkTier, BulkTierValidator, TierValidationError};

const BASE_PRICE: i64 = 1_500;

fn tier_strategy() -> impl Strategy<Value = BulkTier> {
    (0u32..200u32, 0i64..2_000i64).prop_map(|(min_qty, price)| BulkTier::new(min_qty, price))
}

proptest! {
    #[test]
    fn test_accepted_tiers_are_ordered_and_discounted(
        tiers in prop::collection::vec(tier_strategy(), 0..7)
    ) {
        let result = BulkTierValidator::default().validate(&tiers, BASE_PRICE);

        if result.valid {
            prop_assert!(!tiers.is_empty() && tiers.len() <= 5);
            for pair in tiers.windows(2) {
                prop_assert!(pair[0].min_qty < pair[1].min_qty);
                prop_assert!(pair[0].price > pair[1].price);
            }
            for tier in &tiers {
                prop_assert!(tier.min_qty >= 1);
                prop_assert!(tier.price > 0 && tier.price < BASE_PRICE);
            }
        } else {
            prop_assert!(result.error.is_some());
        }
    }

    #[test]
    fn test_ensure_valid_agrees_with_validate(
        tiers in prop::collection::vec(tier_strategy(), 0..7)
    ) {
        let validator = BulkTierValidator::default();
        prop_assert_eq!(
            validator.validate(&tiers, BASE_PRICE).valid,
            validator.ensure_valid(&tiers, BASE_PRICE).is_ok()
        );
    }
}

#[test]
fn test_scenario_valid_tiers() {
    let tiers = vec![BulkTier::new(10, 1_400), BulkTier::new(50, 1_300)];
    let result = BulkTierValidator::default().validate(&tiers, BASE_PRICE);
    assert!(result.valid);
    assert_eq!(result.message(), None);
}

#[test]
fn test_scenario_price_above_retail() {
    let tiers = vec![BulkTier::new(10, 1_600)];
    let result = BulkTierValidator::default().validate(&tiers, BASE_PRICE);

    assert!(!result.valid);
    assert_eq!(
        result.error,
        Some(TierValidationError::PriceNotBelowRetail {
            tier: 1,
            price: 1_600,
            base_price: BASE_PRICE,
        })
    );
}

#[test]
fn test_price_equal_to_retail_rejected() {
    let tiers = vec![BulkTier::new(10, BASE_PRICE)];
    assert!(!BulkTierValidator::default().validate(&tiers, BASE_PRICE).valid);
}

#[test]
fn test_first_violation_only() {
    // tier 1 has zero quantity and tier 2 a higher price; only tier 1 is reported
    let tiers = vec![BulkTier::new(0, 1_400), BulkTier::new(50, 1_450)];
    let result = BulkTierValidator::default().validate(&tiers, BASE_PRICE);

    assert_eq!(result.error, Some(TierValidationError::InvalidQuantity { tier: 1 }));
    assert_eq!(
        result.message().as_deref(),
        Some("Tier 1: Minimum quantity must be at least 1")
    );
}

#[test]
fn test_quantity_pass_runs_before_price_pass() {
    let tiers = vec![
        BulkTier::new(10, 1_400),
        BulkTier::new(50, 1_450),
        BulkTier::new(40, 1_300),
    ];
    let result = BulkTierValidator::default().validate(&tiers, BASE_PRICE);

    assert_eq!(
        result.error,
        Some(TierValidationError::QuantityNotAscending { tier: 2, next: 3 })
    );
    assert_eq!(
        result.message().as_deref(),
        Some("Tier 3: Minimum quantity must be greater than tier 2")
    );
}

#[test]
fn test_pair_violations_name_the_later_tier() {
    let validator = BulkTierValidator::default();

    let not_ascending = vec![BulkTier::new(50, 1_400), BulkTier::new(10, 1_300)];
    let error = validator.validate(&not_ascending, BASE_PRICE).error.unwrap();
    assert_eq!(error, TierValidationError::QuantityNotAscending { tier: 1, next: 2 });
    assert_eq!(error.tier(), Some(2));

    let not_descending = vec![BulkTier::new(10, 1_300), BulkTier::new(50, 1_300)];
    let error = validator.validate(&not_descending, BASE_PRICE).error.unwrap();
    assert_eq!(error.to_string(), "Tier 2: Price must be lower than tier 1");
}

#[test]
fn test_tier_count_limits() {
    let validator = BulkTierValidator::default();
    assert_eq!(
        validator.validate(&[], BASE_PRICE).error,
        Some(TierValidationError::NoTiers)
    );

    let six: Vec<BulkTier> = (0..6)
        .map(|i| BulkTier::new(10 * (i + 1), 1_400 - 100 * i64::from(i)))
        .collect();
    assert_eq!(
        validator.validate(&six, BASE_PRICE).error,
        Some(TierValidationError::TooManyTiers { count: 6, max: 5 })
    );
    assert!(BulkTierValidator::new(6).validate(&six, BASE_PRICE).valid);
}

#[test]
fn test_ensure_valid_maps_to_app_error() {
    let err = BulkTierValidator::default()
        .ensure_valid(&[BulkTier::new(10, 0)], BASE_PRICE)
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::TierValidation(TierValidationError::InvalidPrice { tier: 1 })
    ));
    assert!(!err.is_configuration_defect());
}
