//! Individual Taxpayer Identifier Value Object
//!
//! 11-digit identifier of a natural person. Accepted with or without
//! punctuation (`123.456.789-09` or `12345678909`); the given text is kept
//! for display and the digit-only form is used for comparisons.

use std::fmt;

use platform::check_digit::is_valid_individual_id;
use platform::digits::normalize;

use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndividualTaxId(String);

impl IndividualTaxId {
    /// Create a new identifier, validating length and check digits
    pub fn new(raw: impl Into<String>) -> AuthResult<Self> {
        let raw = raw.into();
        if !is_valid_individual_id(&raw) {
            return Err(AuthError::InvalidIndividualTaxId);
        }
        Ok(Self(raw))
    }

    /// The identifier exactly as given at construction
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digit-only form
    pub fn digits(&self) -> String {
        normalize(&self.0)
    }
}

impl fmt::Display for IndividualTaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for IndividualTaxId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
