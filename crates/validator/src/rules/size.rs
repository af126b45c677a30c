//! Size rules: `min`, `max`, `between`.
//!
//! All bounds are inclusive and all three rules pass an effectively empty
//! value (size zero) without comparing, so they compose with `required`
//! rather than duplicating it. A NaN size fails every comparison.

use crate::foundation::{NormalizedValue, Rule, ValidatorError, Verdict};
use crate::size::{is_effectively_empty, size_of, size_within};
use crate::template::{MessageParams, render};

use super::config::RuleConfig;

pub const MIN_MESSAGE: &str = "Must be at least :min";
pub const MAX_MESSAGE: &str = "Must be at most :max";
pub const BETWEEN_MESSAGE: &str = "Must be between :min and :max";

// ============================================================================
// MIN
// ============================================================================

/// Passes when the value's size is at least `min`.
#[derive(Debug, Clone, PartialEq)]
pub struct Min {
    min: f64,
    message: String,
}

impl Min {
    #[must_use]
    pub fn new(min: f64) -> Self {
        Self {
            min,
            message: render(MIN_MESSAGE, &Self::params(min)),
        }
    }

    /// Replaces the message; `:min` is substituted immediately.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, template: &str) -> Self {
        self.message = render(template, &Self::params(self.min));
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    fn params(min: f64) -> MessageParams {
        MessageParams::new().with("min", min)
    }
}

impl Rule for Min {
    fn check(&self, value: &NormalizedValue) -> Result<Verdict, ValidatorError> {
        let pass = is_effectively_empty(value) || size_of(value) >= self.min;
        Ok(Verdict::new(pass, self.message.as_str()))
    }

    fn name(&self) -> &'static str {
        "min"
    }
}

/// Creates a [`Min`] rule.
///
/// # Examples
///
/// ```
/// use verity_validator::foundation::{NormalizedValue, Rule};
/// use verity_validator::rules::min;
///
/// let rule = min(3, "At least :min characters");
/// let verdict = rule.check(&NormalizedValue::String("ab".into())).unwrap();
/// assert!(!verdict.pass);
/// assert_eq!(verdict.message, "At least 3 characters");
/// ```
#[must_use]
pub fn min(min: impl Into<f64>, message: &str) -> Min {
    Min::new(min.into()).with_message(message)
}

pub(crate) fn min_factory(config: &RuleConfig, message: Option<&str>) -> Result<Min, ValidatorError> {
    let min = config.as_number("min")?;
    Ok(Min::new(min).with_message(message.unwrap_or(MIN_MESSAGE)))
}

// ============================================================================
// MAX
// ============================================================================

/// Passes when the value's size is at most `max`.
#[derive(Debug, Clone, PartialEq)]
pub struct Max {
    max: f64,
    message: String,
}

impl Max {
    #[must_use]
    pub fn new(max: f64) -> Self {
        Self {
            max,
            message: render(MAX_MESSAGE, &Self::params(max)),
        }
    }

    /// Replaces the message; `:max` is substituted immediately.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, template: &str) -> Self {
        self.message = render(template, &Self::params(self.max));
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    fn params(max: f64) -> MessageParams {
        MessageParams::new().with("max", max)
    }
}

impl Rule for Max {
    fn check(&self, value: &NormalizedValue) -> Result<Verdict, ValidatorError> {
        let pass = is_effectively_empty(value) || size_of(value) <= self.max;
        Ok(Verdict::new(pass, self.message.as_str()))
    }

    fn name(&self) -> &'static str {
        "max"
    }
}

/// Creates a [`Max`] rule.
///
/// # Examples
///
/// ```
/// use verity_validator::foundation::{NormalizedValue, Rule};
/// use verity_validator::rules::max;
///
/// let rule = max(10, "Too long, must be :max characters or less");
/// let verdict = rule.check(&NormalizedValue::String("abcdefghijk".into())).unwrap();
/// assert!(!verdict.pass);
/// assert_eq!(verdict.message, "Too long, must be 10 characters or less");
/// ```
#[must_use]
pub fn max(max: impl Into<f64>, message: &str) -> Max {
    Max::new(max.into()).with_message(message)
}

pub(crate) fn max_factory(config: &RuleConfig, message: Option<&str>) -> Result<Max, ValidatorError> {
    let max = config.as_number("max")?;
    Ok(Max::new(max).with_message(message.unwrap_or(MAX_MESSAGE)))
}

// ============================================================================
// BETWEEN
// ============================================================================

/// Passes when `min <= size <= max`.
#[derive(Debug, Clone, PartialEq)]
pub struct Between {
    min: f64,
    max: f64,
    message: String,
}

impl Between {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            message: render(BETWEEN_MESSAGE, &Self::params(min, max)),
        }
    }

    /// Replaces the message; `:min` and `:max` are substituted immediately.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, template: &str) -> Self {
        self.message = render(template, &Self::params(self.min, self.max));
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    fn params(min: f64, max: f64) -> MessageParams {
        MessageParams::new().with("min", min).with("max", max)
    }
}

impl Rule for Between {
    fn check(&self, value: &NormalizedValue) -> Result<Verdict, ValidatorError> {
        let pass = is_effectively_empty(value) || size_within(value, self.min, self.max);
        Ok(Verdict::new(pass, self.message.as_str()))
    }

    fn name(&self) -> &'static str {
        "between"
    }
}

/// Creates a [`Between`] rule.
///
/// # Examples
///
/// ```
/// use verity_validator::foundation::{NormalizedValue, Rule};
/// use verity_validator::rules::between;
///
/// let rule = between(1, 10, "Out of range");
/// assert!(rule.check(&NormalizedValue::Number(5.0)).unwrap().pass);
/// assert!(!rule.check(&NormalizedValue::Number(11.0)).unwrap().pass);
/// ```
#[must_use]
pub fn between(min: impl Into<f64>, max: impl Into<f64>, message: &str) -> Between {
    Between::new(min.into(), max.into()).with_message(message)
}

pub(crate) fn between_factory(
    config: &RuleConfig,
    message: Option<&str>,
) -> Result<Between, ValidatorError> {
    let (min, max) = config.as_range("between")?;
    Ok(Between::new(min, max).with_message(message.unwrap_or(BETWEEN_MESSAGE)))
}
