//! Presence and predicate rules: `required`, `test`.

use std::fmt;

use crate::foundation::{NormalizedValue, Rule, ValidatorError, Verdict};
use crate::size::{is_sized, size_of};

use super::config::{Predicate, RuleConfig};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const TEST_MESSAGE: &str = "This field is invalid";

// ============================================================================
// REQUIRED
// ============================================================================

/// Rejects empty values.
///
/// Sized kinds (string, number, array, file) must have a size greater than
/// zero; any other kind only has to be non-nullish. This is the one rule
/// that fails on an effectively empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Required {
    message: String,
}

impl Required {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the value counts as present.
    #[must_use]
    pub fn is_present(value: &NormalizedValue) -> bool {
        if is_sized(value) {
            size_of(value) > 0.0
        } else {
            !value.is_nullish()
        }
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::new(REQUIRED_MESSAGE)
    }
}

impl Rule for Required {
    fn check(&self, value: &NormalizedValue) -> Result<Verdict, ValidatorError> {
        Ok(Verdict::new(Self::is_present(value), self.message.as_str()))
    }

    fn name(&self) -> &'static str {
        "required"
    }
}

/// Creates a [`Required`] rule with the given message.
///
/// # Examples
///
/// ```
/// use verity_validator::foundation::{NormalizedValue, Rule};
/// use verity_validator::rules::required;
///
/// let rule = required("Email is required");
/// assert!(!rule.check(&NormalizedValue::Nullish).unwrap().pass);
/// assert!(rule.check(&NormalizedValue::String("a@b.c".into())).unwrap().pass);
/// ```
#[must_use]
pub fn required(message: impl Into<String>) -> Required {
    Required::new(message)
}

pub(crate) fn required_factory(
    _config: &RuleConfig,
    message: Option<&str>,
) -> Result<Required, ValidatorError> {
    Ok(Required::new(message.unwrap_or(REQUIRED_MESSAGE)))
}

// ============================================================================
// TEST
// ============================================================================

/// Passes when a caller-supplied predicate returns `true`.
///
/// Unlike the size and format rules, `test` is not implicitly optional: the
/// predicate sees every value, empty or not.
#[derive(Clone)]
pub struct Test {
    predicate: Predicate,
    message: String,
}

impl Test {
    pub fn new<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&NormalizedValue) -> bool + Send + Sync + 'static,
    {
        Self::from_predicate(std::sync::Arc::new(predicate), message)
    }

    pub fn from_predicate(predicate: Predicate, message: impl Into<String>) -> Self {
        Self {
            predicate,
            message: message.into(),
        }
    }
}

impl fmt::Debug for Test {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Test")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl Rule for Test {
    fn check(&self, value: &NormalizedValue) -> Result<Verdict, ValidatorError> {
        Ok(Verdict::new((self.predicate)(value), self.message.as_str()))
    }

    fn name(&self) -> &'static str {
        "test"
    }
}

/// Creates a [`Test`] rule from a predicate.
///
/// # Examples
///
/// ```
/// use verity_validator::foundation::{NormalizedValue, Rule};
/// use verity_validator::rules::test;
///
/// let adult = test(|v| v.as_number().is_some_and(|n| n >= 18.0), "Must be an adult");
/// assert!(adult.check(&NormalizedValue::Number(21.0)).unwrap().pass);
/// assert!(!adult.check(&NormalizedValue::Number(12.0)).unwrap().pass);
/// ```
pub fn test<F>(predicate: F, message: impl Into<String>) -> Test
where
    F: Fn(&NormalizedValue) -> bool + Send + Sync + 'static,
{
    Test::new(predicate, message)
}

pub(crate) fn test_factory(
    config: &RuleConfig,
    message: Option<&str>,
) -> Result<Test, ValidatorError> {
    let predicate = config.as_predicate("test")?;
    Ok(Test::from_predicate(
        predicate,
        message.unwrap_or(TEST_MESSAGE),
    ))
}
