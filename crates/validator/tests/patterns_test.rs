//! Fixed-pattern rules checked through the registry by name.

use rstest::rstest;
use verity_validator::prelude::*;

fn passes(rule: &str, input: &str) -> bool {
    let registry = RuleRegistry::with_builtins();
    let rule = registry.build(rule, RuleConfig::None, None).unwrap();
    rule.check(&normalize(&RawValue::from(input))).unwrap().pass
}

#[rstest]
#[case("james@example.com", true)]
#[case("  james@example.com  ", true)]
#[case("james.o'neil+forms@mail.example.org", true)]
#[case("james@example", false)]
#[case("james@@example.com", false)]
#[case("james @example.com", false)]
fn email(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(passes("email", input), expected, "{input}");
}

#[rstest]
#[case("07700 900123", true)]
#[case("(07700) 900123", true)]
#[case("+447700900123", true)]
#[case("+44 7700 900 123", true)]
#[case("08700 900123", false)]
#[case("0770 090 012", false)]
fn mobile_uk(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(passes("mobileUK", input), expected, "{input}");
}

#[rstest]
#[case("415-555-2671", true)]
#[case("1 (415) 555-2671", true)]
#[case("4155552671", true)]
#[case("015-555-2671", false)]
#[case("415-555-267", false)]
fn mobile_us(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(passes("mobileUS", input), expected, "{input}");
}

#[rstest]
#[case("SW1A 1AA", true)]
#[case("sw1a1aa", true)]
#[case("B33 8TH", true)]
#[case("CR2 6XH", true)]
#[case("GIR 0AA", true)]
#[case("SW1A 1A", false)]
#[case("90210", false)]
fn postcode_uk(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(passes("postcodeUK", input), expected, "{input}");
}

#[rstest]
#[case("90210", true)]
#[case("90210-1234", true)]
#[case("9021", false)]
#[case("90210-12", false)]
#[case("ABCDE", false)]
fn postcode_us(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(passes("postcodeUS", input), expected, "{input}");
}

#[rstest]
#[case("email")]
#[case("mobileUK")]
#[case("mobileUS")]
#[case("postcodeUK")]
#[case("postcodeUS")]
fn empty_input_is_left_to_required(#[case] rule: &str) {
    assert!(passes(rule, ""));
    assert!(passes(rule, "   "));
}
