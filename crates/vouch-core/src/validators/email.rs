//! Email address validation.
//!
//! A deliberately loose plausibility check for a single recipient: exactly
//! one `@`, parts that are not both trivially short, and a local part drawn
//! from a fixed alphabet. The domain is not inspected.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::patterns::{is_legacy_local_char, is_normalized_local_char, strip};
use super::Validator;
use crate::registry::{parse_optional_args, RegistryError, ValidatorFactory, ValidatorRegistry};

/// Alphabet accepted in the local part.
///
/// Both variants accept ASCII letters, digits and the punctuation in
/// [`LOCAL_PUNCTUATION`](super::patterns::LOCAL_PUNCTUATION); they differ only
/// in how the ellipsis is spelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocalCharset {
    /// Ellipsis as the mis-encoded `â€¦`, compatible with existing data.
    #[default]
    Legacy,

    /// Ellipsis as `…`.
    Normalized,
}

impl LocalCharset {
    /// Check if `c` belongs to this alphabet.
    pub fn allows(self, c: char) -> bool {
        match self {
            LocalCharset::Legacy => is_legacy_local_char(c),
            LocalCharset::Normalized => is_normalized_local_char(c),
        }
    }
}

/// Validates plausible single-recipient email addresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailValidator {
    charset: LocalCharset,
}

impl EmailValidator {
    /// Email validator with the legacy local-part alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Email validator with an explicit local-part alphabet.
    pub fn with_charset(charset: LocalCharset) -> Self {
        Self { charset }
    }

    /// Local-part alphabet in use.
    pub fn charset(&self) -> LocalCharset {
        self.charset
    }
}

impl Validator for EmailValidator {
    fn validate(&self, value: &str) -> bool {
        if !value.contains('@') {
            return false;
        }

        let parts: Vec<&str> = strip(value).split('@').collect();
        let [local, domain] = parts.as_slice() else {
            return false;
        };

        // Only rejected when both sides are short: "a@example.com" passes.
        if local.chars().count() <= 2 && domain.chars().count() <= 2 {
            return false;
        }

        local.chars().all(|c| self.charset.allows(c))
    }

    fn kind(&self) -> &str {
        "email"
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct EmailArgs {
    #[serde(default)]
    charset: LocalCharset,
}

/// Registry factory for [`EmailValidator`].
///
/// Accepts `null` or `{ "charset": "legacy" | "normalized" }`.
pub struct EmailValidatorFactory;

impl ValidatorFactory for EmailValidatorFactory {
    fn create(
        &self,
        args: &JsonValue,
        _registry: &ValidatorRegistry,
    ) -> Result<Box<dyn Validator>, RegistryError> {
        let args: EmailArgs = parse_optional_args("email", args)?;
        Ok(Box::new(EmailValidator::with_charset(args.charset)))
    }

    fn validate_args(&self, args: &JsonValue) -> Result<(), RegistryError> {
        parse_optional_args::<EmailArgs>("email", args).map(|_| ())
    }

    fn description(&self) -> &'static str {
        "Single-recipient email address"
    }
}
