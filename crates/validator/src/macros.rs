//! Macros for building rule sets.

// ============================================================================
// RULE_SET MACRO
// ============================================================================

/// Builds a [`RuleSet`](crate::validator::RuleSet) from `field => [rules]`
/// pairs. Fields and rules keep their written order.
///
/// Each rule is any value implementing [`Rule`](crate::foundation::Rule).
///
/// # Examples
///
/// ```
/// use verity_validator::rule_set;
/// use verity_validator::rules::{email, required};
///
/// let rules = rule_set! {
///     "email" => [required("Email is required"), email("Bad email")],
///     "notes" => [],
/// };
/// assert_eq!(rules.len(), 2);
/// assert_eq!(rules.rules("email").unwrap().len(), 2);
/// ```
#[macro_export]
macro_rules! rule_set {
    () => {
        $crate::validator::RuleSet::new()
    };
    ($($field:expr => [$($rule:expr),* $(,)?]),+ $(,)?) => {{
        let mut set = $crate::validator::RuleSet::new();
        $(
            set.declare($field);
            $( set.push($field, $rule); )*
        )+
        set
    }};
}

#[cfg(test)]
mod tests {
    use crate::foundation::{NormalizedValue, Rule, Verdict, rule_fn};
    use crate::rules::{max, min};

    #[test]
    fn empty_set() {
        let rules = rule_set!();
        assert!(rules.is_empty());
    }

    #[test]
    fn keeps_declaration_order() {
        let rules = rule_set! {
            "b" => [min(1, "b")],
            "a" => [max(1, "a"), min(0, "a")],
        };
        let fields: Vec<_> = rules.iter().map(|(name, r)| (name, r.len())).collect();
        assert_eq!(fields, [("b", 1), ("a", 2)]);
    }

    #[test]
    fn accepts_boxed_rules() {
        let rules = rule_set! {
            "x" => [rule_fn("never", |_| Ok(Verdict::fail("never")))],
        };
        let rule = &rules.rules("x").unwrap()[0];
        assert_eq!(rule.name(), "never");
        assert!(!rule.check(&NormalizedValue::Nullish).unwrap().pass);
    }
}
