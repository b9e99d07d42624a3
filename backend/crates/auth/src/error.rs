//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// Construction failures carry a message naming the violated invariant.
/// Authentication itself never fails with an error, it answers `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Client id must be positive (got {0})")]
    NonPositiveId(i64),

    #[error("Name must not be blank")]
    BlankName,

    #[error("Legal name must not be blank")]
    BlankLegalName,

    #[error("Invalid individual taxpayer identifier")]
    InvalidIndividualTaxId,

    #[error("Corporate taxpayer identifier must be formatted as NN.NNN.NNN/NNNN-NN")]
    UnformattedCorporateTaxId,

    #[error("Invalid corporate taxpayer identifier")]
    InvalidCorporateTaxId,

    /// Raised by the sign-in layer, never by `authenticate`
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Too many consecutive failures in a sign-in tracker
    #[error("Client is locked after too many failed attempts")]
    Locked,
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::NonPositiveId(_)
            | AuthError::BlankName
            | AuthError::BlankLegalName
            | AuthError::InvalidIndividualTaxId
            | AuthError::UnformattedCorporateTaxId
            | AuthError::InvalidCorporateTaxId => ErrorKind::InvalidArgument,
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::Locked => ErrorKind::Forbidden,
        }
    }

    /// Whether this is a construction-time invariant violation
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AuthError::UnformattedCorporateTaxId => {
                err.with_action("Use the punctuated form, e.g. 11.222.333/0001-81")
            }
            AuthError::Locked => err.with_action("Wait for an operator to unlock the client"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AuthError::Locked => {
                tracing::warn!("Sign-in attempt on locked client");
            }
            AuthError::InvalidCredentials => {
                tracing::debug!("Invalid sign-in attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Client construction rejected");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.to_app_error()
    }
}
