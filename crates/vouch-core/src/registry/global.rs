//! The process-wide registry.
//!
//! Lookups take a read lock and registration takes a write lock. `create`
//! constructs from a snapshot taken under the read lock, so factories run
//! with no lock held and may themselves call back into this module.

use std::sync::{Arc, Once};

use lazy_static::lazy_static;
use parking_lot::RwLock;
use serde_json::Value as JsonValue;

use super::{RegistryError, ValidatorFactory, ValidatorRegistry};
use crate::validators::Validator;

lazy_static! {
    static ref GLOBAL_REGISTRY: RwLock<ValidatorRegistry> = RwLock::new(ValidatorRegistry::new());
}

static INIT: Once = Once::new();

/// Register the built-in validators in the process-wide registry.
///
/// Call once at startup. Repeated calls are no-ops, so a built-in name that
/// was later overridden with [`register`] stays overridden.
pub fn init() {
    INIT.call_once(|| {
        let mut registry = GLOBAL_REGISTRY.write();
        registry.register_defaults();
        tracing::info!(validators = ?registry.names(), "Validator registry initialized");
    });
}

/// Register a factory under `name` in the process-wide registry.
pub fn register<F>(name: &str, factory: F) -> Result<(), RegistryError>
where
    F: ValidatorFactory + 'static,
{
    GLOBAL_REGISTRY.write().register(name, factory)
}

/// Get the factory registered under `name` in the process-wide registry.
pub fn lookup(name: &str) -> Result<Arc<dyn ValidatorFactory>, RegistryError> {
    GLOBAL_REGISTRY.read().lookup(name)
}

/// Construct a validator from the process-wide registry.
pub fn create(name: &str, args: &JsonValue) -> Result<Box<dyn Validator>, RegistryError> {
    let snapshot = GLOBAL_REGISTRY.read().clone();
    snapshot.create(name, args)
}

/// Names registered in the process-wide registry, sorted.
pub fn names() -> Vec<String> {
    GLOBAL_REGISTRY
        .read()
        .names()
        .into_iter()
        .map(str::to_string)
        .collect()
}
