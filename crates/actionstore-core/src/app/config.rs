//! Registry configuration loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::policy::DuplicatePolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Settings applied while building a store.
///
/// ```json
/// { "duplicate_policy": "reject", "expected_codes": ["game.start"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    pub duplicate_policy: DuplicatePolicy,

    /// Codes that must be registered before the store is usable.
    pub expected_codes: Vec<String>,
}

impl RegistryConfig {
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: RegistryConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(pos) = self.expected_codes.iter().position(String::is_empty) {
            return Err(ConfigError::Invalid(format!(
                "expected_codes[{pos}] must not be empty"
            )));
        }
        Ok(())
    }
}

/// Load and validate a registry configuration file.
pub fn load_config(path: &Path) -> Result<RegistryConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    RegistryConfig::from_json_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = RegistryConfig::from_json_str("{}").unwrap();
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Overwrite);
    }

    #[test]
    fn parses_all_fields() {
        let config = RegistryConfig::from_json_str(
            r#"{ "duplicate_policy": "reject", "expected_codes": ["game.start", "game.end"] }"#,
        )
        .unwrap();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
        assert_eq!(config.expected_codes, vec!["game.start", "game.end"]);
    }

    #[test]
    fn rejects_empty_expected_code() {
        let err = RegistryConfig::from_json_str(r#"{ "expected_codes": ["game.start", ""] }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("expected_codes[1]")));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = RegistryConfig::from_json_str(r#"{ "policy": "reject" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/actionstore.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
