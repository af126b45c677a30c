//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let rules = rule_set! { "email" => [required("Email is required"), email("Bad email")] };
//! let report = validate(&data, &rules)?;
//! ```

// ============================================================================
// FOUNDATION: Values, rules, errors
// ============================================================================

pub use crate::foundation::{
    BoxedRule, FileBlob, NormalizedValue, RawValue, Rule, TypeTag, ValidatorError,
    ValidatorResult, Verdict, rule_fn,
};

// ============================================================================
// RULES: Built-in rules and configuration
// ============================================================================

pub use crate::rules::{
    Between, Format, Max, Min, Required, RuleConfig, Test, between, email, format, max, min,
    mobile_uk, mobile_us, postcode_uk, postcode_us, required, test,
};

// ============================================================================
// PIPELINE: Normalizer, registry, validator
// ============================================================================

pub use crate::config::ValidatorConfig;
pub use crate::normalize::{HostEnvironment, Normalizer, normalize};
pub use crate::registry::{RuleFactory, RuleRegistry};
pub use crate::rule_set;
pub use crate::schema::{RuleSchema, RuleSpec};
pub use crate::validator::{FieldSource, RuleSet, ValidationReport, Validator, validate};
