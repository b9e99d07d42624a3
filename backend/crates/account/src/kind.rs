//! Account Kinds
//!
//! Checking and savings accounts differ in maintenance fee, monthly fee and
//! per-transaction limit.

use std::fmt;

use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccountKind {
    #[default]
    Checking,
    Savings,
}

impl AccountKind {
    pub fn maintenance_fee(&self) -> Decimal {
        match self {
            AccountKind::Checking => Decimal::new(10, 0),
            AccountKind::Savings => Decimal::ZERO,
        }
    }

    /// Largest amount a single transaction may move
    pub fn transaction_limit(&self) -> Decimal {
        match self {
            AccountKind::Checking => Decimal::new(5_000, 0),
            AccountKind::Savings => Decimal::new(2_000, 0),
        }
    }

    /// Checking pays the flat maintenance fee, savings 0.5% of the balance
    pub fn monthly_fee(&self, balance: Decimal) -> Decimal {
        match self {
            AccountKind::Checking => self.maintenance_fee(),
            AccountKind::Savings => balance * Decimal::new(5, 3),
        }
    }

    pub fn can_transact(&self, amount: Decimal) -> bool {
        amount <= self.transaction_limit()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Checking => "checking",
            AccountKind::Savings => "savings",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
