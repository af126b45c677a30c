//! Core trait implemented by every rule evaluator.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::ValidatorError;
use super::normalized::NormalizedValue;

// ============================================================================
// VERDICT
// ============================================================================

/// Outcome of a single rule applied to a single value.
///
/// The message is carried on both outcomes; the validator only records it
/// when `pass` is `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub pass: bool,
    pub message: String,
}

impl Verdict {
    pub fn new(pass: bool, message: impl Into<String>) -> Self {
        Self {
            pass,
            message: message.into(),
        }
    }

    pub fn pass(message: impl Into<String>) -> Self {
        Self::new(true, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::new(false, message)
    }
}

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A configured predicate over a normalized value.
///
/// Built-in rules never return `Err`. Custom rules may, and the error is
/// propagated to the caller of `validate` untouched: a broken rule is a
/// defect, not validation feedback.
///
/// # Examples
///
/// ```
/// use verity_validator::foundation::{NormalizedValue, Rule, ValidatorError, Verdict};
///
/// struct Lowercase;
///
/// impl Rule for Lowercase {
///     fn check(&self, value: &NormalizedValue) -> Result<Verdict, ValidatorError> {
///         let ok = value.as_str().is_none_or(|s| s == s.to_lowercase());
///         Ok(Verdict::new(ok, "Must be lowercase"))
///     }
/// }
///
/// let verdict = Lowercase.check(&NormalizedValue::String("Ada".into())).unwrap();
/// assert!(!verdict.pass);
/// ```
pub trait Rule: Send + Sync {
    /// Evaluates the rule against a normalized value.
    fn check(&self, value: &NormalizedValue) -> Result<Verdict, ValidatorError>;

    /// Returns the name of this rule, used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared, type-erased rule as stored in rule sets.
pub type BoxedRule = Arc<dyn Rule>;

impl<R: Rule + ?Sized> Rule for Arc<R> {
    fn check(&self, value: &NormalizedValue) -> Result<Verdict, ValidatorError> {
        (**self).check(value)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl fmt::Debug for dyn Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name()).finish()
    }
}

// ============================================================================
// CLOSURE ADAPTER
// ============================================================================

/// Adapts a closure into a [`Rule`].
pub struct FnRule<F> {
    name: String,
    check: F,
}

impl<F> Rule for FnRule<F>
where
    F: Fn(&NormalizedValue) -> Result<Verdict, ValidatorError> + Send + Sync,
{
    fn check(&self, value: &NormalizedValue) -> Result<Verdict, ValidatorError> {
        (self.check)(value)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Wraps a closure as a named, shareable rule.
///
/// # Examples
///
/// ```
/// use verity_validator::foundation::{NormalizedValue, Rule, Verdict, rule_fn};
///
/// let even = rule_fn("even", |value| {
///     let ok = value.as_number().is_some_and(|n| n % 2.0 == 0.0);
///     Ok(Verdict::new(ok, "Must be even"))
/// });
///
/// assert!(even.check(&NormalizedValue::Number(4.0)).unwrap().pass);
/// assert_eq!(even.name(), "even");
/// ```
pub fn rule_fn<F>(name: impl Into<String>, check: F) -> BoxedRule
where
    F: Fn(&NormalizedValue) -> Result<Verdict, ValidatorError> + Send + Sync + 'static,
{
    Arc::new(FnRule {
        name: name.into(),
        check,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysPass;

    impl Rule for AlwaysPass {
        fn check(&self, _value: &NormalizedValue) -> Result<Verdict, ValidatorError> {
            Ok(Verdict::pass("never shown"))
        }
    }

    #[test]
    fn default_name_is_type_name() {
        assert!(AlwaysPass.name().contains("AlwaysPass"));
    }

    #[test]
    fn closure_errors_propagate() {
        let broken = rule_fn("broken", |_| Err(ValidatorError::rule_failed("broken", "boom")));
        let err = broken.check(&NormalizedValue::Nullish).unwrap_err();
        assert_eq!(err.code(), "RULE_FAILED");
    }

    #[test]
    fn debug_shows_rule_name() {
        let rule = rule_fn("shout", |_| Ok(Verdict::pass("")));
        assert_eq!(format!("{rule:?}"), r#"Rule { name: "shout" }"#);
    }
}
