//! Built-in rules
//!
//! | name         | config              | constructor     |
//! |--------------|---------------------|-----------------|
//! | `required`   | none                | [`required`]    |
//! | `min`        | number              | [`min`]         |
//! | `max`        | number              | [`max`]         |
//! | `between`    | `[min, max]`        | [`between`]     |
//! | `test`       | predicate           | [`test`]        |
//! | `format`     | pattern             | [`format`]      |
//! | `email`      | none                | [`email`]       |
//! | `mobileUK`   | none                | [`mobile_uk`]   |
//! | `mobileUS`   | none                | [`mobile_us`]   |
//! | `postcodeUK` | none                | [`postcode_uk`] |
//! | `postcodeUS` | none                | [`postcode_us`] |
//!
//! Everything except `required` and `test` passes an effectively empty
//! value, so optional fields need no special casing:
//!
//! ```rust,ignore
//! // `max` stays quiet on empty input, `required` reports it.
//! let rules = rule_set! {
//!     "nickname" => [required("Pick a nickname"), max(10, "At most :max characters")],
//! };
//! ```

pub mod config;
pub mod format;
pub mod presence;
pub mod size;

pub use config::{Predicate, RuleConfig};
pub use format::{
    EMAIL_PATTERN, Format, MOBILE_UK_PATTERN, MOBILE_US_PATTERN, POSTCODE_UK_PATTERN,
    POSTCODE_US_PATTERN, email, format, mobile_uk, mobile_us, postcode_uk, postcode_us,
};
pub use presence::{Required, Test, required, test};
pub use size::{Between, Max, Min, between, max, min};

use crate::registry::{RuleFactory, factory};

/// Names of the rules every [`RuleRegistry::with_builtins`](crate::registry::RuleRegistry::with_builtins)
/// starts with, in registration order.
pub const BUILTIN_RULES: [&str; 11] = [
    "required",
    "min",
    "max",
    "between",
    "test",
    "format",
    "email",
    "mobileUK",
    "mobileUS",
    "postcodeUK",
    "postcodeUS",
];

pub(crate) fn builtin_factories() -> [(&'static str, RuleFactory); 11] {
    [
        ("required", factory(presence::required_factory)),
        ("min", factory(size::min_factory)),
        ("max", factory(size::max_factory)),
        ("between", factory(size::between_factory)),
        ("test", factory(presence::test_factory)),
        ("format", factory(format::format_factory)),
        ("email", factory(format::email_factory)),
        ("mobileUK", factory(format::mobile_uk_factory)),
        ("mobileUS", factory(format::mobile_us_factory)),
        ("postcodeUK", factory(format::postcode_uk_factory)),
        ("postcodeUS", factory(format::postcode_us_factory)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_matches_names() {
        let names: Vec<_> = builtin_factories().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, BUILTIN_RULES);
    }
}
