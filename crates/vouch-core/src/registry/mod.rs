//! Name-based validator registry.
//!
//! Validators are constructed through factories registered under a name.
//! [`ValidatorRegistry`] is a plain value you can own and pass around; the
//! free functions in this module operate on a single process-wide instance
//! that is populated by [`init`].

use thiserror::Error;

mod factory;
mod global;

pub use factory::{ValidatorFactory, ValidatorRegistry};
pub use global::{create, init, lookup, names, register};

pub(crate) use factory::{parse_args, parse_optional_args};

/// Errors from registering, looking up, or constructing validators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validator '{name}' not found. Available: {available:?}")]
    NotFound {
        name: String,
        available: Vec<String>,
    },
}

impl RegistryError {
    /// Returns true for [`RegistryError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound { .. })
    }

    /// Returns true for [`RegistryError::Configuration`].
    pub fn is_configuration(&self) -> bool {
        matches!(self, RegistryError::Configuration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RegistryError::Configuration("Validator must have a name".to_string());
        assert_eq!(err.to_string(), "Configuration error: Validator must have a name");

        let err = RegistryError::NotFound {
            name: "phone".to_string(),
            available: vec!["date".to_string(), "email".to_string()],
        };
        assert!(err.is_not_found());
        assert!(!err.is_configuration());
        assert!(err.to_string().contains("'phone' not found"));
        assert!(err.to_string().contains("email"));
    }
}
