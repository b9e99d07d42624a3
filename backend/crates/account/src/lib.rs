//! Account Module
//!
//! Bank accounts held by clients. Independent of the auth crate: an account
//! only knows its owner's name.
//!
//! - `bank_account` - balance, status and deposit/withdraw/transfer
//! - `kind` - checking and savings accounts, fees and limits
//! - `transaction` - debit/credit/transfer operations and guarded execution
//! - `config` - account number formatting

pub mod bank_account;
pub mod config;
pub mod error;
pub mod kind;
pub mod transaction;

pub use bank_account::{AccountStatus, BankAccount, next_account_number};
pub use config::AccountConfig;
pub use error::{AccountError, AccountResult};
pub use kind::AccountKind;
pub use transaction::{GuardedTransaction, Transaction, TransactionType, TransactionValidator};
