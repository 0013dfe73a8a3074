//! Sequential composition of validators.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::Validator;
use crate::config::ValidatorConfig;
use crate::registry::{parse_args, RegistryError, ValidatorFactory, ValidatorRegistry};

/// Accepts a value only if every member accepts it.
///
/// Members run in order against the same value; evaluation stops at the
/// first rejection, so later members are never called for that value. An
/// empty chain accepts everything.
#[derive(Default)]
pub struct ChainValidator {
    validators: Vec<Box<dyn Validator>>,
}

impl ChainValidator {
    /// Create a chain from an ordered list of validators.
    pub fn new(validators: Vec<Box<dyn Validator>>) -> Self {
        Self { validators }
    }

    /// Append a validator, builder style.
    pub fn with(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Append an already boxed validator.
    pub fn push(&mut self, validator: Box<dyn Validator>) {
        self.validators.push(validator);
    }

    /// Append a validator that is also held elsewhere, builder style.
    pub fn with_shared(mut self, validator: Arc<dyn Validator>) -> Self {
        self.validators.push(Box::new(SharedValidator(validator)));
        self
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// True if the chain has no members.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Validator for ChainValidator {
    fn validate(&self, value: &str) -> bool {
        for (index, validator) in self.validators.iter().enumerate() {
            if !validator.validate(value) {
                tracing::debug!(index, kind = validator.kind(), "Chain member rejected value");
                return false;
            }
        }
        true
    }

    fn kind(&self) -> &str {
        "chain"
    }
}

/// Chain member backed by a shared validator.
struct SharedValidator(Arc<dyn Validator>);

impl Validator for SharedValidator {
    fn validate(&self, value: &str) -> bool {
        self.0.validate(value)
    }

    fn kind(&self) -> &str {
        self.0.kind()
    }
}

impl std::fmt::Debug for ChainValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kinds: Vec<&str> = self.validators.iter().map(|v| v.kind()).collect();
        f.debug_struct("ChainValidator").field("validators", &kinds).finish()
    }
}

/// A chain member in factory arguments: a bare name or a full config.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MemberArgs {
    Name(String),
    Config(ValidatorConfig),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChainArgs {
    validators: Vec<MemberArgs>,
}

/// Registry factory for [`ChainValidator`].
///
/// Expects `{ "validators": [member, ...] }`, where each member is a
/// registered name or `{ "name": ..., "args": ... }`. Members are created
/// through the same registry, so chains may nest.
pub struct ChainValidatorFactory;

impl ValidatorFactory for ChainValidatorFactory {
    fn create(
        &self,
        args: &JsonValue,
        registry: &ValidatorRegistry,
    ) -> Result<Box<dyn Validator>, RegistryError> {
        let args: ChainArgs = parse_args("chain", args)?;

        let mut chain = ChainValidator::default();
        for member in &args.validators {
            let validator = match member {
                MemberArgs::Name(name) => registry.create(name, &JsonValue::Null)?,
                MemberArgs::Config(config) => registry.create(&config.name, &config.args)?,
            };
            chain.push(validator);
        }
        Ok(Box::new(chain))
    }

    fn validate_args(&self, args: &JsonValue) -> Result<(), RegistryError> {
        parse_args::<ChainArgs>("chain", args).map(|_| ())
    }

    fn description(&self) -> &'static str {
        "Ordered composition requiring every member to accept"
    }
}
