//! # vouch-core
//!
//! Small, extensible value validators.
//!
//! This crate answers one question for a raw textual input: does it look like
//! a recognized format? It ships three validators and a registry to find them
//! by name:
//! - `"email"`: a plausible single-recipient email address
//! - `"date"`: a date or date-time in `DD-MM-YYYY` or `YYYY-MM-DD` order
//! - `"chain"`: an ordered composition that requires every member to accept
//!
//! ## Key Guarantees
//!
//! 1. **Pure**: `validate` holds no mutable state and never panics
//! 2. **Short-circuiting**: chains stop at the first rejecting member
//! 3. **Explicit registration**: nothing is registered until [`registry::init`]
//!    (or [`ValidatorRegistry::with_defaults`]) is called
//!
//! ## Example
//!
//! ```rust,ignore
//! use vouch_core::{registry, ChainValidator, EmailValidator, Validator};
//!
//! registry::init();
//! let email = registry::create("email", &serde_json::Value::Null)?;
//! assert!(email.validate("user@domain.com"));
//!
//! let chain = ChainValidator::new(vec![email, Box::new(|v: &str| v.ends_with(".com"))]);
//! assert!(!chain.validate("user@domain.org"));
//! ```

pub mod config;
pub mod registry;
pub mod validators;

// Re-export main types at crate root
pub use config::{ConfigError, ValidatorConfig};
pub use registry::{RegistryError, ValidatorFactory, ValidatorRegistry};
pub use validators::{
    ChainValidator, ChainValidatorFactory, DateLayout, DateTimeValidator,
    DateTimeValidatorFactory, EmailValidator, EmailValidatorFactory, LocalCharset, Validator,
};
