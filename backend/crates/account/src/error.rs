//! Account Error Types

use kernel::error::app_error::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

pub type AccountResult<T> = Result<T, AccountError>;

/// Account construction errors
///
/// Balance operations never fail with an error, they answer `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Account number must not be blank")]
    BlankNumber,

    #[error("Account owner must not be blank")]
    BlankOwner,

    #[error("Initial balance must be zero or positive (got {0})")]
    NegativeInitialBalance(Decimal),
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        AppError::invalid_argument(err.to_string())
    }
}
