//! Corporate Taxpayer Identifier Value Object
//!
//! 14-digit identifier of a legal entity.
//!
//! ## Invariants
//! - Formatted exactly as `NN.NNN.NNN/NNNN-NN` (checked first)
//! - Check digits valid
//!
//! Unlike [`IndividualTaxId`](super::individual_tax_id::IndividualTaxId),
//! the digit-only form is refused here. Authentication still accepts it,
//! because comparison happens on normalized digits.

use std::fmt;

use platform::check_digit::{is_formatted_corporate_id, is_valid_corporate_id};
use platform::digits::normalize;

use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorporateTaxId(String);

impl CorporateTaxId {
    pub fn new(raw: impl Into<String>) -> AuthResult<Self> {
        let raw = raw.into();
        if !is_formatted_corporate_id(&raw) {
            return Err(AuthError::UnformattedCorporateTaxId);
        }
        if !is_valid_corporate_id(&raw) {
            return Err(AuthError::InvalidCorporateTaxId);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digit-only form
    pub fn digits(&self) -> String {
        normalize(&self.0)
    }
}

impl fmt::Display for CorporateTaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CorporateTaxId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
