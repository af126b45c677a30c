//! # verity-validator
//!
//! Value normalization and rule-based validation for form and request data.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use verity_validator::prelude::*;
//!
//! let rules = rule_set! {
//!     "email" => [required("Email is required"), email("Must be a valid email")],
//!     "firstName" => [max(10, "Too long, must be :max characters or less")],
//! };
//!
//! let report = validate(&json!({ "firstName": "James" }), &rules).unwrap();
//! assert!(!report.is_valid());
//! assert_eq!(report.error("email"), Some("Email is required"));
//! assert_eq!(report.error("firstName"), None);
//! ```
//!
//! ## Pipeline
//!
//! 1. [`normalize`](normalize::Normalizer) turns each raw field value into a
//!    tagged [`NormalizedValue`](foundation::NormalizedValue).
//! 2. Every [`Rule`](foundation::Rule) declared for the field runs against it.
//! 3. Failures are collected into a [`ValidationReport`].
//!
//! Rules come from typed constructors in [`rules`], from a
//! [`RuleRegistry`](registry::RuleRegistry) by name, or from a JSON
//! [`RuleSchema`](schema::RuleSchema).

// ValidatorError is small and returned by value everywhere; ValidationReport
// is only an error through `into_result`.
#![allow(clippy::result_large_err)]

pub mod config;
pub mod foundation;
mod macros;
pub mod normalize;
pub mod prelude;
pub mod registry;
pub mod rules;
pub mod schema;
pub mod size;
pub mod template;
pub mod validator;

pub use config::ValidatorConfig;
pub use foundation::ValidatorError;
pub use validator::{ValidationReport, Validator, validate};
