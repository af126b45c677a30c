//! Core types shared by every other module
//!
//! - **Input**: [`RawValue`], [`FileBlob`]
//! - **Canonical form**: [`NormalizedValue`], [`TypeTag`]
//! - **Evaluation**: [`Rule`], [`Verdict`], [`BoxedRule`]
//! - **Errors**: [`ValidatorError`]
//!
//! # Architecture
//!
//! Validation is a two-stage pipeline. A [`RawValue`] of unknown shape is
//! first normalized into a [`NormalizedValue`]; every [`Rule`] declared for
//! the field then looks at that canonical form and returns a [`Verdict`].
//!
//! ```rust,ignore
//! let value = normalize(&RawValue::from("  James "));
//! let verdict = max(10, "Too long").check(&value)?;
//! assert!(verdict.pass);
//! ```

pub mod error;
pub mod normalized;
pub mod traits;
pub mod value;

pub use error::ValidatorError;
pub use normalized::{NormalizedValue, TypeTag};
pub use traits::{BoxedRule, FnRule, Rule, Verdict, rule_fn};
pub use value::{FileBlob, RawValue};

/// Result alias used throughout the crate.
pub type ValidatorResult<T> = Result<T, ValidatorError>;
