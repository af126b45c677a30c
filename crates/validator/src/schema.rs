//! Declarative rule schemas
//!
//! A [`RuleSchema`] describes a rule set as data, so it can live in a JSON
//! file next to the form it guards and be shipped to both sides of the wire:
//!
//! ```json
//! {
//!     "email":     ["required", { "rule": "email", "message": "Bad email" }],
//!     "firstName": [{ "rule": "max", "config": 10, "message": "At most :max" }]
//! }
//! ```
//!
//! Compiling a schema resolves every rule name against a [`RuleRegistry`]
//! before anything is validated.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::foundation::{BoxedRule, ValidatorError};
use crate::registry::RuleRegistry;
use crate::validator::RuleSet;

// ============================================================================
// RULE SPEC
// ============================================================================

/// One rule, by name, with its configuration and message template.
///
/// Deserializes from either a full object or a bare rule name:
///
/// ```
/// use verity_validator::schema::RuleSpec;
///
/// let short: RuleSpec = serde_json::from_str(r#""required""#).unwrap();
/// let full: RuleSpec = serde_json::from_str(r#"{"rule": "required"}"#).unwrap();
/// assert_eq!(short, full);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RuleSpecRepr")]
pub struct RuleSpec {
    /// Registered rule name (`"min"`, `"postcodeUK"`, ...).
    pub rule: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RuleSpecRepr {
    Name(String),
    Full {
        rule: String,
        #[serde(default)]
        config: Option<Value>,
        #[serde(default)]
        message: Option<String>,
    },
}

impl From<RuleSpecRepr> for RuleSpec {
    fn from(repr: RuleSpecRepr) -> Self {
        match repr {
            RuleSpecRepr::Name(rule) => Self::new(rule),
            RuleSpecRepr::Full {
                rule,
                config,
                message,
            } => Self {
                rule,
                config,
                message,
            },
        }
    }
}

impl RuleSpec {
    pub fn new(rule: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            config: None,
            message: None,
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(mut self, config: impl Into<Value>) -> Self {
        self.config = Some(config.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Builds the rule through `registry`.
    pub fn build(&self, registry: &RuleRegistry) -> Result<BoxedRule, ValidatorError> {
        registry.build(&self.rule, self.config.clone(), self.message.as_deref())
    }
}

impl From<&str> for RuleSpec {
    fn from(rule: &str) -> Self {
        Self::new(rule)
    }
}

// ============================================================================
// RULE SCHEMA
// ============================================================================

/// Ordered field → rule specs mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSchema {
    fields: IndexMap<String, Vec<RuleSpec>>,
}

impl RuleSchema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a schema from JSON.
    pub fn from_json(json: &str) -> Result<Self, ValidatorError> {
        serde_json::from_str(json).map_err(|e| ValidatorError::invalid_config("schema", e.to_string()))
    }

    /// Appends rules to a field, declaring it if needed.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<I, S>(mut self, name: impl Into<String>, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RuleSpec>,
    {
        self.fields
            .entry(name.into())
            .or_default()
            .extend(specs.into_iter().map(Into::into));
        self
    }

    pub fn push(&mut self, name: impl Into<String>, spec: impl Into<RuleSpec>) {
        self.fields.entry(name.into()).or_default().push(spec.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[RuleSpec]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RuleSpec])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builds every rule in the schema.
    ///
    /// Fails on the first unknown name or bad configuration, so a broken
    /// schema never produces a partial report.
    pub fn compile(&self, registry: &RuleRegistry) -> Result<RuleSet, ValidatorError> {
        let mut set = RuleSet::new();
        for (field, specs) in &self.fields {
            set.declare(field.as_str());
            for spec in specs {
                set.push_boxed(field.as_str(), spec.build(registry)?);
            }
        }
        tracing::debug!(fields = self.fields.len(), "compiled rule schema");
        Ok(set)
    }
}
