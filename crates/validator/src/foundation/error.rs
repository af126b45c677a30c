//! Error type for configuration and rule defects.
//!
//! A failing rule is *not* an error: it produces a [`Verdict`](super::Verdict)
//! with `pass == false` that ends up in the validation report. The variants
//! here describe situations where validation could not run at all.

/// Errors surfaced by rule construction and rule evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidatorError {
    /// The requested rule name is not registered.
    #[error("rule not found: `{name}`")]
    RuleNotFound { name: String },

    /// A rule factory rejected its configuration.
    #[error("invalid configuration for rule `{rule}`: {reason}")]
    InvalidConfig { rule: String, reason: String },

    /// A custom rule failed while evaluating a value.
    #[error("rule `{rule}` failed: {reason}")]
    RuleFailed { rule: String, reason: String },
}

impl ValidatorError {
    /// Shorthand for [`ValidatorError::RuleNotFound`].
    pub fn rule_not_found(name: impl Into<String>) -> Self {
        Self::RuleNotFound { name: name.into() }
    }

    /// Shorthand for [`ValidatorError::InvalidConfig`].
    pub fn invalid_config(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            rule: rule.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`ValidatorError::RuleFailed`].
    pub fn rule_failed(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RuleFailed {
            rule: rule.into(),
            reason: reason.into(),
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::RuleNotFound { .. } => "RULE_NOT_FOUND",
            Self::InvalidConfig { .. } => "RULE_INVALID_CONFIG",
            Self::RuleFailed { .. } => "RULE_FAILED",
        }
    }

    /// Whether the operation might succeed if retried with the same input.
    ///
    /// Validation is deterministic, so this is `false` for every variant.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = ValidatorError::rule_not_found("postcodeFR");
        assert_eq!(err.to_string(), "rule not found: `postcodeFR`");

        let err = ValidatorError::invalid_config("min", "expected a number");
        assert_eq!(
            err.to_string(),
            "invalid configuration for rule `min`: expected a number"
        );

        let err = ValidatorError::rule_failed("unique_username", "lookup table missing");
        assert_eq!(
            err.to_string(),
            "rule `unique_username` failed: lookup table missing"
        );
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(ValidatorError::rule_not_found("x").code(), "RULE_NOT_FOUND");
        assert_eq!(
            ValidatorError::invalid_config("x", "y").code(),
            "RULE_INVALID_CONFIG"
        );
        assert_eq!(ValidatorError::rule_failed("x", "y").code(), "RULE_FAILED");
    }

    #[test]
    fn nothing_is_retryable() {
        assert!(!ValidatorError::rule_not_found("x").is_retryable());
        assert!(!ValidatorError::rule_failed("x", "y").is_retryable());
    }
}
