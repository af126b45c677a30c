//! Validation orchestration
//!
//! For every field declared in a [`RuleSet`], the [`Validator`] looks the
//! field up in the data snapshot, normalizes it, and runs every rule for
//! that field in declaration order. Rules never short-circuit each other;
//! when several fail, the last failing message is the one reported.
//!
//! Fields present in the data but absent from the rule set are ignored.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ValidatorConfig;
use crate::foundation::{BoxedRule, RawValue, Rule, ValidatorError};
use crate::normalize::Normalizer;
use crate::registry::RuleRegistry;
use crate::rules::RuleConfig;
use crate::schema::RuleSchema;

// ============================================================================
// RULE SET
// ============================================================================

/// Ordered field → rules mapping.
///
/// Usually built with [`rule_set!`](crate::rule_set) or compiled from a
/// [`RuleSchema`].
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fields: IndexMap<String, Vec<BoxedRule>>,
}

impl RuleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends rules to a field, declaring it if needed.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(
        mut self,
        name: impl Into<String>,
        rules: impl IntoIterator<Item = BoxedRule>,
    ) -> Self {
        self.fields.entry(name.into()).or_default().extend(rules);
        self
    }

    /// Appends one rule to a field.
    pub fn push(&mut self, name: impl Into<String>, rule: impl Rule + 'static) {
        self.push_boxed(name, Arc::new(rule));
    }

    pub fn push_boxed(&mut self, name: impl Into<String>, rule: BoxedRule) {
        self.fields.entry(name.into()).or_default().push(rule);
    }

    /// Declares a field with no rules yet.
    pub fn declare(&mut self, name: impl Into<String>) {
        self.fields.entry(name.into()).or_default();
    }

    #[must_use]
    pub fn rules(&self, field: &str) -> Option<&[BoxedRule]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[BoxedRule])> {
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
}

// ============================================================================
// FIELD SOURCE
// ============================================================================

/// A snapshot of field values keyed by name.
///
/// A field that is not present reads as [`RawValue::Undefined`].
pub trait FieldSource {
    fn field(&self, name: &str) -> RawValue;
}

impl<S: BuildHasher> FieldSource for HashMap<String, RawValue, S> {
    fn field(&self, name: &str) -> RawValue {
        self.get(name).cloned().unwrap_or_default()
    }
}

impl FieldSource for BTreeMap<String, RawValue> {
    fn field(&self, name: &str) -> RawValue {
        self.get(name).cloned().unwrap_or_default()
    }
}

impl<S: BuildHasher> FieldSource for IndexMap<String, RawValue, S> {
    fn field(&self, name: &str) -> RawValue {
        self.get(name).cloned().unwrap_or_default()
    }
}

impl FieldSource for serde_json::Map<String, Value> {
    fn field(&self, name: &str) -> RawValue {
        self.get(name).map(RawValue::from).unwrap_or_default()
    }
}

impl FieldSource for Value {
    fn field(&self, name: &str) -> RawValue {
        match self {
            Value::Object(map) => map.field(name),
            _ => RawValue::Undefined,
        }
    }
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field(&self, name: &str) -> RawValue {
        (**self).field(name)
    }
}

// ============================================================================
// VALIDATION REPORT
// ============================================================================

/// Outcome of validating a data snapshot.
///
/// `errors` holds at most one message per field, in declaration order, and
/// only for fields that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: IndexMap<String, String>,
}

impl ValidationReport {
    fn passing() -> Self {
        Self {
            valid: true,
            errors: IndexMap::new(),
        }
    }

    fn fail(&mut self, field: &str, message: String) {
        self.valid = false;
        self.errors.insert(field.to_owned(), message);
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// The reported message for `field`, if it failed.
    #[must_use]
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Converts into a `Result`, keeping the report on failure.
    pub fn into_result(self) -> Result<(), Self> {
        if self.valid { Ok(()) } else { Err(self) }
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Owns a rule registry and a normalizer and runs rule sets against data.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use verity_validator::rules::{max, required};
/// use verity_validator::{Validator, rule_set};
///
/// let validator = Validator::default();
/// let rules = rule_set! {
///     "email" => [required("Email is required")],
///     "firstName" => [max(10, "Too long, must be :max characters or less")],
/// };
///
/// let report = validator
///     .validate(&json!({ "firstName": "abcdefghijk" }), &rules)
///     .unwrap();
/// assert!(!report.is_valid());
/// assert_eq!(report.error("email"), Some("Email is required"));
/// assert_eq!(report.error("firstName"), Some("Too long, must be 10 characters or less"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    registry: Arc<RuleRegistry>,
    normalizer: Normalizer,
}

impl Validator {
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self::with_registry(config, Arc::new(RuleRegistry::with_builtins()))
    }

    /// Uses a registry shared with other validators.
    #[must_use]
    pub fn with_registry(config: ValidatorConfig, registry: Arc<RuleRegistry>) -> Self {
        Self {
            registry,
            normalizer: Normalizer::new(config.host),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Registers a custom rule factory; replaces any rule with that name.
    pub fn register<F, R>(&self, name: impl Into<String>, build: F)
    where
        F: Fn(&RuleConfig, Option<&str>) -> Result<R, ValidatorError> + Send + Sync + 'static,
        R: Rule + 'static,
    {
        self.registry.register(name, build);
    }

    /// Builds a registered rule by name.
    pub fn build(
        &self,
        name: &str,
        config: impl Into<RuleConfig>,
        message: Option<&str>,
    ) -> Result<BoxedRule, ValidatorError> {
        self.registry.build(name, config, message)
    }

    /// Runs `rules` against `data`.
    ///
    /// Returns `Err` only when a custom rule reports a defect; validation
    /// failures are part of the report.
    pub fn validate<D>(&self, data: &D, rules: &RuleSet) -> Result<ValidationReport, ValidatorError>
    where
        D: FieldSource + ?Sized,
    {
        run(&self.normalizer, data, rules)
    }

    /// Compiles `schema` against this validator's registry, then validates.
    ///
    /// An unknown rule name fails before any field is evaluated.
    pub fn validate_schema<D>(
        &self,
        data: &D,
        schema: &RuleSchema,
    ) -> Result<ValidationReport, ValidatorError>
    where
        D: FieldSource + ?Sized,
    {
        let rules = schema.compile(&self.registry)?;
        self.validate(data, &rules)
    }
}

/// Validates `data` with the default normalizer.
pub fn validate<D>(data: &D, rules: &RuleSet) -> Result<ValidationReport, ValidatorError>
where
    D: FieldSource + ?Sized,
{
    run(&Normalizer::default(), data, rules)
}

fn run<D>(
    normalizer: &Normalizer,
    data: &D,
    rules: &RuleSet,
) -> Result<ValidationReport, ValidatorError>
where
    D: FieldSource + ?Sized,
{
    let mut report = ValidationReport::passing();

    for (field, field_rules) in rules.iter() {
        let value = normalizer.normalize(&data.field(field));

        for rule in field_rules {
            let verdict = rule.check(&value).inspect_err(|e| {
                tracing::debug!(field = %field, rule = rule.name(), error = %e, "rule returned an error");
            })?;

            if !verdict.pass {
                tracing::trace!(
                    field = %field,
                    rule = rule.name(),
                    value_type = %value.type_tag(),
                    "rule failed"
                );
                report.fail(field, verdict.message);
            }
        }
    }

    tracing::debug!(
        fields = rules.len(),
        failed = report.errors.len(),
        "validation finished"
    );
    Ok(report)
}
