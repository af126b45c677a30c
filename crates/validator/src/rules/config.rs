//! Configuration handed to rule factories.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{NormalizedValue, ValidatorError};

/// Caller-supplied predicate used by the `test` rule.
pub type Predicate = Arc<dyn Fn(&NormalizedValue) -> bool + Send + Sync>;

/// Per-rule configuration.
///
/// Most rules take plain data (a number, a `[min, max]` pair, a pattern),
/// carried as JSON so it can come from a declarative schema as well as from
/// code. The `test` rule takes a predicate instead.
#[derive(Clone, Default)]
pub enum RuleConfig {
    /// No configuration.
    #[default]
    None,
    /// Data configuration.
    Json(Value),
    /// A predicate, for `test`.
    Predicate(Predicate),
}

impl RuleConfig {
    /// Wraps a closure as predicate configuration.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&NormalizedValue) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None | Self::Json(Value::Null))
    }

    /// Reads a single number. Numeric strings are accepted.
    pub fn as_number(&self, rule: &str) -> Result<f64, ValidatorError> {
        let number = match self {
            Self::Json(value) => json_number(value),
            _ => None,
        };
        number.ok_or_else(|| ValidatorError::invalid_config(rule, "expected a number"))
    }

    /// Reads an inclusive `(min, max)` pair from `[min, max]` or
    /// `{ "min": .., "max": .. }`.
    pub fn as_range(&self, rule: &str) -> Result<(f64, f64), ValidatorError> {
        let range = match self {
            Self::Json(Value::Array(items)) if items.len() == 2 => {
                json_number(&items[0]).zip(json_number(&items[1]))
            }
            Self::Json(Value::Object(map)) => map
                .get("min")
                .and_then(json_number)
                .zip(map.get("max").and_then(json_number)),
            _ => None,
        };
        range.ok_or_else(|| {
            ValidatorError::invalid_config(rule, "expected a [min, max] pair of numbers")
        })
    }

    /// Reads a pattern string.
    pub fn as_pattern(&self, rule: &str) -> Result<&str, ValidatorError> {
        match self {
            Self::Json(Value::String(pattern)) => Ok(pattern),
            _ => Err(ValidatorError::invalid_config(rule, "expected a pattern string")),
        }
    }

    /// Reads a predicate.
    pub fn as_predicate(&self, rule: &str) -> Result<Predicate, ValidatorError> {
        match self {
            Self::Predicate(predicate) => Ok(Arc::clone(predicate)),
            _ => Err(ValidatorError::invalid_config(rule, "expected a predicate")),
        }
    }
}

fn json_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl fmt::Debug for RuleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Json(value) => f.debug_tuple("Json").field(value).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<Value> for RuleConfig {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<Option<Value>> for RuleConfig {
    fn from(value: Option<Value>) -> Self {
        value.map_or(Self::None, Self::Json)
    }
}

impl From<f64> for RuleConfig {
    fn from(value: f64) -> Self {
        Self::Json(Value::from(value))
    }
}

impl From<i64> for RuleConfig {
    fn from(value: i64) -> Self {
        Self::Json(Value::from(value))
    }
}

impl From<[f64; 2]> for RuleConfig {
    fn from([min, max]: [f64; 2]) -> Self {
        Self::Json(Value::from(vec![min, max]))
    }
}

impl From<(f64, f64)> for RuleConfig {
    fn from((min, max): (f64, f64)) -> Self {
        Self::Json(serde_json::json!({ "min": min, "max": max }))
    }
}

impl From<&str> for RuleConfig {
    fn from(pattern: &str) -> Self {
        Self::Json(Value::String(pattern.to_owned()))
    }
}

impl From<String> for RuleConfig {
    fn from(pattern: String) -> Self {
        Self::Json(Value::String(pattern))
    }
}
