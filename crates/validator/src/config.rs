//! Validator configuration.

use serde::{Deserialize, Serialize};

use crate::foundation::ValidatorError;
use crate::normalize::HostEnvironment;

/// Settings for a [`Validator`](crate::Validator).
///
/// Every field has a default, so `{}` is a valid configuration:
///
/// ```
/// use verity_validator::config::ValidatorConfig;
///
/// let config = ValidatorConfig::from_json(r#"{"host": {"supports_files": false}}"#).unwrap();
/// assert!(!config.host.supports_files);
/// assert_eq!(ValidatorConfig::from_json("{}").unwrap(), ValidatorConfig::default());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Capabilities of the environment producing raw values.
    pub host: HostEnvironment,
}

impl ValidatorConfig {
    #[must_use]
    pub const fn new(host: HostEnvironment) -> Self {
        Self { host }
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ValidatorError> {
        serde_json::from_str(json)
            .map_err(|e| ValidatorError::invalid_config("config", e.to_string()))
    }
}
