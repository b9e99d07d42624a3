//! Bank Account Entity
//!
//! Balance holder with deposit, withdraw and transfer. Failed operations
//! answer `false` and leave the balance untouched.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use rust_decimal::Decimal;

use crate::config::AccountConfig;
use crate::error::{AccountError, AccountResult};
use crate::kind::AccountKind;

/// Smallest balance an account may be opened with
pub const MINIMUM_BALANCE: Decimal = Decimal::ZERO;

static ACCOUNT_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Next sequential account number, e.g. `CONTA-000001`
///
/// The sequence is process-wide and strictly increasing.
pub fn next_account_number(config: &AccountConfig) -> String {
    let sequence = ACCOUNT_SEQUENCE.fetch_add(1, Ordering::Relaxed) + 1;
    config.format_number(sequence)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccountStatus {
    #[default]
    Active,
    Blocked,
    Closed,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Blocked => "blocked",
            AccountStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct BankAccount {
    number: String,
    owner: String,
    balance: Decimal,
    kind: AccountKind,
    status: AccountStatus,
}

impl BankAccount {
    /// Open an account with an explicit number
    pub fn new(
        number: impl Into<String>,
        owner: impl Into<String>,
        initial_balance: Decimal,
    ) -> AccountResult<Self> {
        let number = number.into();
        let owner = owner.into();

        if number.trim().is_empty() {
            return Err(AccountError::BlankNumber);
        }
        if owner.trim().is_empty() {
            return Err(AccountError::BlankOwner);
        }
        if initial_balance < MINIMUM_BALANCE {
            return Err(AccountError::NegativeInitialBalance(initial_balance));
        }

        tracing::info!(account = %number, balance = %initial_balance, "Account opened");
        Ok(Self {
            number,
            owner,
            balance: initial_balance,
            kind: AccountKind::default(),
            status: AccountStatus::default(),
        })
    }

    /// Open an account numbered from the process-wide sequence
    pub fn create(owner: impl Into<String>, initial_balance: Decimal) -> AccountResult<Self> {
        Self::create_with(&AccountConfig::default(), owner, initial_balance)
    }

    pub fn create_with(
        config: &AccountConfig,
        owner: impl Into<String>,
        initial_balance: Decimal,
    ) -> AccountResult<Self> {
        // validate before consuming a sequence number
        let owner = owner.into();
        if owner.trim().is_empty() {
            return Err(AccountError::BlankOwner);
        }
        if initial_balance < MINIMUM_BALANCE {
            return Err(AccountError::NegativeInitialBalance(initial_balance));
        }
        Self::new(next_account_number(config), owner, initial_balance)
    }

    /// Same account as a different kind
    pub fn with_kind(mut self, kind: AccountKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    pub fn set_status(&mut self, status: AccountStatus) {
        tracing::info!(account = %self.number, from = %self.status, to = %status, "Account status changed");
        self.status = status;
    }

    /// Fee charged this month for the account kind
    pub fn monthly_fee(&self) -> Decimal {
        self.kind.monthly_fee(self.balance)
    }

    pub fn can_transact(&self, amount: Decimal) -> bool {
        self.kind.can_transact(amount)
    }

    /// Add `amount`; refused when not positive, the account is not active or
    /// the balance would overflow
    pub fn deposit(&mut self, amount: Decimal) -> bool {
        let updated = if amount > Decimal::ZERO && self.is_active() {
            self.balance.checked_add(amount)
        } else {
            None
        };
        let Some(updated) = updated else {
            tracing::debug!(account = %self.number, %amount, "Deposit refused");
            return false;
        };
        self.balance = updated;
        tracing::debug!(account = %self.number, %amount, balance = %self.balance, "Deposit");
        true
    }

    /// Remove `amount`; refused when not positive, not active or not covered
    pub fn withdraw(&mut self, amount: Decimal) -> bool {
        if amount <= Decimal::ZERO || !self.is_active() || self.balance < amount {
            tracing::debug!(account = %self.number, %amount, "Withdrawal refused");
            return false;
        }
        self.balance -= amount;
        tracing::debug!(account = %self.number, %amount, balance = %self.balance, "Withdrawal");
        true
    }

    /// Move `amount` to `target`, all or nothing
    pub fn transfer(&mut self, target: &mut BankAccount, amount: Decimal) -> bool {
        if !self.withdraw(amount) {
            return false;
        }
        if !target.deposit(amount) {
            self.balance += amount;
            tracing::debug!(from = %self.number, to = %target.number, %amount, "Transfer reverted");
            return false;
        }
        tracing::info!(from = %self.number, to = %target.number, %amount, "Transfer");
        true
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (owner: {}, {}, {}, balance: {:.2})",
            self.number, self.owner, self.kind, self.status, self.balance
        )
    }
}
