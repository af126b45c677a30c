//! Rule registry for looking up rule factories by name.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;

use crate::foundation::{BoxedRule, Rule, ValidatorError};
use crate::rules::{RuleConfig, builtin_factories};

/// A rule factory: turns configuration and an optional message template
/// into a ready-to-run rule.
pub type RuleFactory =
    Arc<dyn Fn(&RuleConfig, Option<&str>) -> Result<BoxedRule, ValidatorError> + Send + Sync>;

/// Wraps a typed factory function as a [`RuleFactory`].
pub fn factory<F, R>(build: F) -> RuleFactory
where
    F: Fn(&RuleConfig, Option<&str>) -> Result<R, ValidatorError> + Send + Sync + 'static,
    R: Rule + 'static,
{
    Arc::new(
        move |config: &RuleConfig, message: Option<&str>| -> Result<BoxedRule, ValidatorError> {
            Ok(Arc::new(build(config, message)?))
        },
    )
}

/// Thread-safe registry of rule factories.
///
/// Rules are registered by name (e.g. `"postcodeUK"`) and looked up when a
/// rule set is built. Uses `DashMap`, so hosts may register custom rules
/// while other threads validate.
///
/// # Examples
///
/// ```
/// use verity_validator::foundation::{NormalizedValue, Rule, Verdict};
/// use verity_validator::registry::RuleRegistry;
/// use verity_validator::rules::RuleConfig;
///
/// let registry = RuleRegistry::with_builtins();
/// registry.register("even", |_config, message| {
///     let message = message.unwrap_or("Must be even").to_owned();
///     Ok(verity_validator::foundation::rule_fn("even", move |value| {
///         let ok = value.as_number().is_some_and(|n| n % 2.0 == 0.0);
///         Ok(Verdict::new(ok, message.as_str()))
///     }))
/// });
///
/// let rule = registry.build("even", RuleConfig::None, None).unwrap();
/// assert!(!rule.check(&NormalizedValue::Number(3.0)).unwrap().pass);
/// ```
pub struct RuleRegistry {
    factories: DashMap<String, RuleFactory>,
}

impl RuleRegistry {
    /// Creates a registry with no rules at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            factories: DashMap::new(),
        }
    }

    /// Creates a registry pre-populated with the built-in rules.
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::empty();
        for (name, factory) in builtin_factories() {
            registry.factories.insert(name.to_owned(), factory);
        }
        registry
    }

    /// Registers a factory under `name`.
    ///
    /// If a factory with the same name already exists, it is replaced; this
    /// is how a host overrides a built-in rule.
    pub fn add(&self, name: impl Into<String>, factory: RuleFactory) {
        let name = name.into();
        if self.factories.insert(name.clone(), factory).is_some() {
            tracing::debug!(rule = %name, "replaced rule factory");
        } else {
            tracing::debug!(rule = %name, "registered rule factory");
        }
    }

    /// Registers a typed factory function under `name`.
    pub fn register<F, R>(&self, name: impl Into<String>, build: F)
    where
        F: Fn(&RuleConfig, Option<&str>) -> Result<R, ValidatorError> + Send + Sync + 'static,
        R: Rule + 'static,
    {
        self.add(name, factory(build));
    }

    /// Looks up a factory by name.
    pub fn get(&self, name: &str) -> Result<RuleFactory, ValidatorError> {
        self.factories
            .get(name)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| ValidatorError::rule_not_found(name))
    }

    /// Builds a rule instance.
    ///
    /// Message placeholders are substituted here, once, from `config`.
    pub fn build(
        &self,
        name: &str,
        config: impl Into<RuleConfig>,
        message: Option<&str>,
    ) -> Result<BoxedRule, ValidatorError> {
        let factory = self.get(name)?;
        factory(&config.into(), message)
    }

    /// Check if a factory is registered for the given name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Remove a factory by name. Returns the removed factory, if any.
    pub fn remove(&self, name: &str) -> Option<RuleFactory> {
        self.factories.remove(name).map(|(_, factory)| factory)
    }

    /// Number of registered factories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Registered rule names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.iter().map(|e| e.key().clone()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{NormalizedValue, Verdict, rule_fn};
    use crate::rules::BUILTIN_RULES;
    use serde_json::json;

    fn text(s: &str) -> NormalizedValue {
        NormalizedValue::String(s.to_owned())
    }

    #[test]
    fn builtins_are_registered() {
        let reg = RuleRegistry::with_builtins();
        assert_eq!(reg.len(), BUILTIN_RULES.len());
        for name in BUILTIN_RULES {
            assert!(reg.contains(name), "missing {name}");
        }
    }

    #[test]
    fn empty_registry() {
        let reg = RuleRegistry::empty();
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
    }

    #[test]
    fn lookup_missing_returns_rule_not_found() {
        let reg = RuleRegistry::with_builtins();
        let err = reg.build("postcodeFR", None::<serde_json::Value>, None).unwrap_err();
        assert_eq!(err, ValidatorError::rule_not_found("postcodeFR"));
    }

    #[test]
    fn build_substitutes_placeholders_once() {
        let reg = RuleRegistry::with_builtins();
        let rule = reg
            .build("max", json!(10), Some("Too long, must be :max characters or less"))
            .unwrap();

        let verdict = rule.check(&text("abcdefghijk")).unwrap();
        assert!(!verdict.pass);
        assert_eq!(verdict.message, "Too long, must be 10 characters or less");
    }

    #[test]
    fn build_rejects_bad_config() {
        let reg = RuleRegistry::with_builtins();
        let err = reg.build("between", json!("1..10"), None).unwrap_err();
        assert_eq!(err.code(), "RULE_INVALID_CONFIG");
    }

    #[test]
    fn add_overrides_builtin() {
        let reg = RuleRegistry::with_builtins();
        reg.register("required", |_config, _message| {
            Ok(rule_fn("required", |_| Ok(Verdict::pass(""))))
        });

        assert_eq!(reg.len(), BUILTIN_RULES.len());
        let rule = reg.build("required", RuleConfig::None, None).unwrap();
        assert!(rule.check(&NormalizedValue::Nullish).unwrap().pass);
    }

    #[test]
    fn remove_factory() {
        let reg = RuleRegistry::with_builtins();
        assert!(reg.remove("email").is_some());
        assert!(!reg.contains("email"));
        assert!(reg.remove("email").is_none());
    }

    #[test]
    fn names_are_sorted() {
        let reg = RuleRegistry::empty();
        reg.register("b", |_config, _message| Ok(crate::rules::Required::default()));
        reg.register("a", |_config, _message| Ok(crate::rules::Required::default()));
        assert_eq!(reg.names(), vec!["a", "b"]);
    }

    #[test]
    fn concurrent_registration_and_lookup() {
        let reg = Arc::new(RuleRegistry::with_builtins());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let reg = Arc::clone(&reg);
                std::thread::spawn(move || {
                    reg.register(format!("custom{i}"), |_config, _message| {
                        Ok(crate::rules::Required::default())
                    });
                    reg.build("min", 1.0, None).is_ok()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(reg.len(), BUILTIN_RULES.len() + 8);
    }
}
