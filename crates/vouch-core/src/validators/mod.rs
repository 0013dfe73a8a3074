//! Validators and the capability they share.
//!
//! Every validator is a pure predicate over a single candidate string. The
//! built-in validators are stateless apart from their construction options,
//! so one instance can be shared freely across threads.

use std::fmt;

mod chain;
mod datetime;
mod email;
pub mod patterns;

pub use chain::{ChainValidator, ChainValidatorFactory};
pub use datetime::{DateLayout, DateTimeValidator, DateTimeValidatorFactory};
pub use email::{EmailValidator, EmailValidatorFactory, LocalCharset};

/// A capability for accepting or rejecting a candidate value.
///
/// `validate` must return a definite answer for every `&str`, including the
/// empty string, and must not panic. Malformed input is simply rejected.
///
/// Any `Fn(&str) -> bool + Send + Sync` closure is a validator, which keeps
/// ad-hoc rules and test stubs cheap to write.
pub trait Validator: Send + Sync {
    /// Returns `true` if `value` is accepted.
    fn validate(&self, value: &str) -> bool;

    /// Short name used in log events.
    fn kind(&self) -> &str {
        "custom"
    }
}

impl<F> Validator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn validate(&self, value: &str) -> bool {
        self(value)
    }

    fn kind(&self) -> &str {
        "fn"
    }
}

impl Validator for Box<dyn Validator> {
    fn validate(&self, value: &str) -> bool {
        (**self).validate(value)
    }

    fn kind(&self) -> &str {
        (**self).kind()
    }
}

impl fmt::Debug for dyn Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").field("kind", &self.kind()).finish()
    }
}
