//! Pattern rules: `format` and its fixed-pattern specializations.
//!
//! Every rule here passes an effectively empty value and otherwise matches
//! the value's textual form (strings as-is, numbers rendered) against a
//! regular expression. Booleans and objects have size zero, so they pass
//! like any other empty value. Arrays and files that are not empty have no
//! textual form and fail.
//!
//! The fixed patterns are part of the public contract:
//!
//! | rule         | pattern                |
//! |--------------|------------------------|
//! | `email`      | [`EMAIL_PATTERN`]       |
//! | `mobileUK`   | [`MOBILE_UK_PATTERN`]   |
//! | `mobileUS`   | [`MOBILE_US_PATTERN`]   |
//! | `postcodeUK` | [`POSTCODE_UK_PATTERN`] |
//! | `postcodeUS` | [`POSTCODE_US_PATTERN`] |

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{NormalizedValue, Rule, ValidatorError, Verdict};
use crate::size::is_effectively_empty;
use crate::template::{MessageParams, render};

use super::config::RuleConfig;

pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
pub const MOBILE_UK_PATTERN: &str = r"^(?:\+44\s?7\d{3}|\(?07\d{3}\)?)\s?\d{3}\s?\d{3}$";
pub const MOBILE_US_PATTERN: &str =
    r"^(?:\+?1[-.\s]?)?\(?[2-9]\d{2}\)?[-.\s]?\d{3}[-.\s]?\d{4}$";
pub const POSTCODE_UK_PATTERN: &str = r"^(?i)(?:GIR\s?0AA|[A-Z]{1,2}\d[A-Z\d]?\s?\d[A-Z]{2})$";
pub const POSTCODE_US_PATTERN: &str = r"^\d{5}(?:-\d{4})?$";

pub const FORMAT_MESSAGE: &str = "Invalid format";
pub const EMAIL_MESSAGE: &str = "Must be a valid email address";
pub const MOBILE_UK_MESSAGE: &str = "Must be a valid UK mobile number";
pub const MOBILE_US_MESSAGE: &str = "Must be a valid US mobile number";
pub const POSTCODE_UK_MESSAGE: &str = "Must be a valid UK postcode";
pub const POSTCODE_US_MESSAGE: &str = "Must be a valid US ZIP code";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));
static MOBILE_UK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MOBILE_UK_PATTERN).expect("UK mobile pattern compiles"));
static MOBILE_US_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MOBILE_US_PATTERN).expect("US mobile pattern compiles"));
static POSTCODE_UK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(POSTCODE_UK_PATTERN).expect("UK postcode pattern compiles"));
static POSTCODE_US_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(POSTCODE_US_PATTERN).expect("US ZIP pattern compiles"));

// ============================================================================
// FORMAT
// ============================================================================

/// Passes when the value's textual form matches a regular expression.
#[derive(Debug, Clone)]
pub struct Format {
    name: Cow<'static, str>,
    pattern: Regex,
    message: String,
}

impl Format {
    /// Compiles `pattern` into a `format` rule.
    pub fn new(pattern: &str) -> Result<Self, ValidatorError> {
        let pattern = Regex::new(pattern)
            .map_err(|e| ValidatorError::invalid_config("format", e.to_string()))?;
        Ok(Self::from_regex("format", pattern, FORMAT_MESSAGE))
    }

    /// Wraps an already compiled expression under the given rule name.
    pub fn from_regex(
        name: impl Into<Cow<'static, str>>,
        pattern: Regex,
        message: &str,
    ) -> Self {
        let message = render(message, &Self::params(&pattern));
        Self {
            name: name.into(),
            pattern,
            message,
        }
    }

    /// Replaces the message; `:pattern` is substituted immediately.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, template: &str) -> Self {
        self.message = render(template, &Self::params(&self.pattern));
        self
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    fn params(pattern: &Regex) -> MessageParams {
        MessageParams::new().with("pattern", pattern.as_str())
    }

    fn matches(&self, value: &NormalizedValue) -> bool {
        value
            .text_form()
            .is_some_and(|text| self.pattern.is_match(&text))
    }
}

impl Rule for Format {
    fn check(&self, value: &NormalizedValue) -> Result<Verdict, ValidatorError> {
        let pass = is_effectively_empty(value) || self.matches(value);
        Ok(Verdict::new(pass, self.message.as_str()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Creates a `format` rule from a pattern.
///
/// # Examples
///
/// ```
/// use verity_validator::foundation::{NormalizedValue, Rule};
/// use verity_validator::rules::format;
///
/// let rule = format(r"^\d{3}-\d{4}$", "Use the form 555-0100").unwrap();
/// assert!(rule.check(&NormalizedValue::String("555-0100".into())).unwrap().pass);
/// assert!(!rule.check(&NormalizedValue::String("5550100".into())).unwrap().pass);
/// ```
pub fn format(pattern: &str, message: &str) -> Result<Format, ValidatorError> {
    Ok(Format::new(pattern)?.with_message(message))
}

pub(crate) fn format_factory(
    config: &RuleConfig,
    message: Option<&str>,
) -> Result<Format, ValidatorError> {
    let rule = Format::new(config.as_pattern("format")?)?;
    Ok(rule.with_message(message.unwrap_or(FORMAT_MESSAGE)))
}

// ============================================================================
// FIXED PATTERNS
// ============================================================================

macro_rules! fixed_format {
    ($(
        $(#[$meta:meta])*
        $func:ident, $factory:ident => $name:literal, $regex:ident, $default:ident;
    )*) => {
        $(
            $(#[$meta])*
            #[must_use]
            pub fn $func(message: &str) -> Format {
                Format::from_regex($name, $regex.clone(), message)
            }

            pub(crate) fn $factory(
                _config: &RuleConfig,
                message: Option<&str>,
            ) -> Result<Format, ValidatorError> {
                Ok($func(message.unwrap_or($default)))
            }
        )*
    };
}

fixed_format! {
    /// Email address (registered as `email`).
    email, email_factory => "email", EMAIL_REGEX, EMAIL_MESSAGE;
    /// UK mobile number (registered as `mobileUK`).
    mobile_uk, mobile_uk_factory => "mobileUK", MOBILE_UK_REGEX, MOBILE_UK_MESSAGE;
    /// US mobile number (registered as `mobileUS`).
    mobile_us, mobile_us_factory => "mobileUS", MOBILE_US_REGEX, MOBILE_US_MESSAGE;
    /// UK postcode (registered as `postcodeUK`).
    postcode_uk, postcode_uk_factory => "postcodeUK", POSTCODE_UK_REGEX, POSTCODE_UK_MESSAGE;
    /// US ZIP code (registered as `postcodeUS`).
    postcode_us, postcode_us_factory => "postcodeUS", POSTCODE_US_REGEX, POSTCODE_US_MESSAGE;
}
