//! Declarative validator configuration from YAML/JSON.
//!
//! A config names a registered validator and its constructor arguments:
//!
//! ```yaml
//! name: chain
//! args:
//!   validators:
//!     - email
//!     - name: date
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::registry::{self, RegistryError, ValidatorRegistry};
use crate::validators::Validator;

/// Errors that can occur when loading or building a validator config.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// A registered validator name plus its constructor arguments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidatorConfig {
    /// Registered validator name (e.g., "email", "chain")
    pub name: String,

    /// Constructor arguments; `null` when omitted
    #[serde(default)]
    pub args: JsonValue,
}

impl ValidatorConfig {
    /// Config for `name` with the given arguments.
    pub fn new(name: impl Into<String>, args: JsonValue) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Parse a config from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: ValidatorConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ValidatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::MissingField("name".to_string()));
        }
        Ok(())
    }

    /// Build the configured validator from `registry`.
    pub fn build(&self, registry: &ValidatorRegistry) -> Result<Box<dyn Validator>, ConfigError> {
        Ok(registry.create(&self.name, &self.args)?)
    }

    /// Build the configured validator from the process-wide registry.
    pub fn build_global(&self) -> Result<Box<dyn Validator>, ConfigError> {
        Ok(registry::create(&self.name, &self.args)?)
    }
}
