//! Validator factories and the registry that holds them.
//!
//! Adding a validator type never touches an enum: implement
//! [`ValidatorFactory`] (or hand over a closure) and register it by name.
//!
//! ## Usage
//!
//! ```ignore
//! let mut registry = ValidatorRegistry::with_defaults();
//! registry.register(
//!     "non-empty",
//!     |_: &JsonValue, _: &ValidatorRegistry| -> Result<Box<dyn Validator>, RegistryError> {
//!         Ok(Box::new(|v: &str| !v.is_empty()))
//!     },
//! )?;
//!
//! let validator = registry.create("email", &JsonValue::Null)?;
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use super::RegistryError;
use crate::validators::{
    ChainValidatorFactory, DateTimeValidatorFactory, EmailValidatorFactory, Validator,
};

/// Factory for creating validators from constructor arguments.
///
/// This is the registry's notion of a "validator type". Arguments arrive as
/// JSON so that factories can be driven from configuration files; factories
/// that take no options should accept `JsonValue::Null`.
pub trait ValidatorFactory: Send + Sync {
    /// Create a validator instance.
    ///
    /// `registry` is the registry the factory was looked up in, so composite
    /// validators can construct their members by name.
    fn create(
        &self,
        args: &JsonValue,
        registry: &ValidatorRegistry,
    ) -> Result<Box<dyn Validator>, RegistryError>;

    /// Check arguments without constructing anything.
    fn validate_args(&self, _args: &JsonValue) -> Result<(), RegistryError> {
        Ok(())
    }

    /// Human-readable description of the validator type.
    fn description(&self) -> &'static str {
        "Validator"
    }
}

impl<F> ValidatorFactory for F
where
    F: Fn(&JsonValue, &ValidatorRegistry) -> Result<Box<dyn Validator>, RegistryError>
        + Send
        + Sync,
{
    fn create(
        &self,
        args: &JsonValue,
        registry: &ValidatorRegistry,
    ) -> Result<Box<dyn Validator>, RegistryError> {
        self(args, registry)
    }
}

impl std::fmt::Debug for dyn ValidatorFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorFactory")
            .field("description", &self.description())
            .finish()
    }
}

/// Registry of validator factories keyed by name.
///
/// Registering a name that already exists replaces the previous factory.
#[derive(Default, Clone)]
pub struct ValidatorRegistry {
    factories: BTreeMap<String, Arc<dyn ValidatorFactory>>,
}

impl ValidatorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with `"email"`, `"date"` and `"chain"` registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_defaults();
        registry
    }

    /// Register the built-in validators, replacing any same-named entries.
    pub fn register_defaults(&mut self) {
        self.insert("email", Arc::new(EmailValidatorFactory));
        self.insert("date", Arc::new(DateTimeValidatorFactory));
        self.insert("chain", Arc::new(ChainValidatorFactory));
    }

    /// Register a factory under `name`.
    ///
    /// Fails with [`RegistryError::Configuration`] if `name` is empty.
    pub fn register<F>(&mut self, name: &str, factory: F) -> Result<(), RegistryError>
    where
        F: ValidatorFactory + 'static,
    {
        self.register_shared(name, Arc::new(factory))
    }

    /// Register an already shared factory under `name`.
    pub fn register_shared(
        &mut self,
        name: &str,
        factory: Arc<dyn ValidatorFactory>,
    ) -> Result<(), RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::Configuration(
                "Validator must have a name".to_string(),
            ));
        }
        self.insert(name, factory);
        Ok(())
    }

    fn insert(&mut self, name: &str, factory: Arc<dyn ValidatorFactory>) {
        let description = factory.description();
        if self.factories.insert(name.to_string(), factory).is_some() {
            tracing::warn!(name, description, "Replaced existing validator registration");
        } else {
            tracing::debug!(name, description, "Registered validator");
        }
    }

    /// Get the factory registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn ValidatorFactory>, RegistryError> {
        self.factories
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
                available: self.names().into_iter().map(str::to_string).collect(),
            })
    }

    /// Construct a validator registered under `name` with `args`.
    pub fn create(
        &self,
        name: &str,
        args: &JsonValue,
    ) -> Result<Box<dyn Validator>, RegistryError> {
        self.lookup(name)?.create(args, self)
    }

    /// Validate arguments for a registered validator without constructing it.
    pub fn validate_args(&self, name: &str, args: &JsonValue) -> Result<(), RegistryError> {
        self.lookup(name)?.validate_args(args)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(|s| s.as_str()).collect()
    }

    /// Check if a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("validators", &self.names())
            .finish()
    }
}

/// Deserialize required constructor arguments for `kind`.
pub(crate) fn parse_args<T: DeserializeOwned>(
    kind: &str,
    args: &JsonValue,
) -> Result<T, RegistryError> {
    serde_json::from_value(args.clone()).map_err(|e| {
        RegistryError::Configuration(format!("Invalid arguments for '{}': {}", kind, e))
    })
}

/// Like [`parse_args`], but `null` yields the default options.
pub(crate) fn parse_optional_args<T: DeserializeOwned + Default>(
    kind: &str,
    args: &JsonValue,
) -> Result<T, RegistryError> {
    if args.is_null() {
        Ok(T::default())
    } else {
        parse_args(kind, args)
    }
}
