//! Property-based tests for verity-validator.

use proptest::prelude::*;
use verity_validator::prelude::*;
use verity_validator::size::{size_of, size_within};

// ============================================================================
// NORMALIZATION
// ============================================================================

proptest! {
    #[test]
    fn strings_normalize_to_trimmed_strings(s in ".*") {
        let normalized = normalize(&RawValue::from(s.as_str()));
        prop_assert_eq!(normalized.type_tag(), TypeTag::String);
        prop_assert_eq!(normalized, NormalizedValue::String(s.trim().to_owned()));
    }

    #[test]
    fn normalization_is_idempotent_for_strings(s in ".*") {
        let once = normalize(&RawValue::from(s.as_str()));
        let twice = normalize(&once.to_raw());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalization_is_idempotent_for_numbers(n in any::<f64>().prop_filter("NaN", |n| !n.is_nan())) {
        let once = normalize(&RawValue::from(n));
        let twice = normalize(&once.to_raw());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn json_strings_match_raw_strings(s in ".*") {
        let from_json = normalize(&RawValue::from(serde_json::Value::String(s.clone())));
        prop_assert_eq!(from_json, normalize(&RawValue::from(s)));
    }
}

#[test]
fn absent_and_null_are_nullish() {
    for raw in [RawValue::Undefined, RawValue::Null, RawValue::from(serde_json::Value::Null)] {
        let normalized = normalize(&raw);
        assert_eq!(normalized.type_tag(), TypeTag::Nullish);
        assert_eq!(
            serde_json::to_value(&normalized).unwrap(),
            serde_json::json!({ "type": "nullish", "value": null })
        );
    }
}

// ============================================================================
// SIZE RULES
// ============================================================================

proptest! {
    #[test]
    fn between_agrees_with_size_within(s in "[a-z ]{0,20}", lo in 0u8..10, span in 0u8..10) {
        let (lo, hi) = (f64::from(lo), f64::from(lo) + f64::from(span));
        let value = normalize(&RawValue::from(s.as_str()));
        let verdict = between(lo, hi, "out").check(&value).unwrap();
        let expected = size_of(&value) == 0.0 || size_within(&value, lo, hi);
        prop_assert_eq!(verdict.pass, expected);
    }

    #[test]
    fn min_and_max_partition_sizes(n in 1u16..500, bound in 1u16..500) {
        let value = NormalizedValue::Number(f64::from(n));
        let at_least = min(bound, "").check(&value).unwrap().pass;
        let at_most = max(bound, "").check(&value).unwrap().pass;
        prop_assert!(at_least || at_most);
        prop_assert_eq!(at_least && at_most, n == bound);
    }

    #[test]
    fn validation_is_deterministic(s in ".{0,30}") {
        let rules = rule_set! { "x" => [required("req"), max(10, "long"), email("mail")] };
        let data = serde_json::json!({ "x": s });
        prop_assert_eq!(validate(&data, &rules).unwrap(), validate(&data, &rules).unwrap());
    }
}
