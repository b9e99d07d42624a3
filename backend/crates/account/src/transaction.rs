//! Transactions
//!
//! Single-account operations described as data and executed against a
//! [`BankAccount`].

use rust_decimal::Decimal;

use crate::bank_account::BankAccount;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionType {
    Debit {
        amount: Decimal,
    },
    Credit {
        amount: Decimal,
    },
    /// Debit towards an account outside this process, known by number only
    Transfer {
        amount: Decimal,
        target_account: String,
    },
}

impl TransactionType {
    pub fn amount(&self) -> Decimal {
        match self {
            TransactionType::Debit { amount }
            | TransactionType::Credit { amount }
            | TransactionType::Transfer { amount, .. } => *amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionType,
}

impl Transaction {
    pub fn new(id: impl Into<String>, kind: TransactionType) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    pub fn execute(&self, account: &mut BankAccount) -> bool {
        match &self.kind {
            TransactionType::Debit { amount } => account.withdraw(*amount),
            TransactionType::Credit { amount } => account.deposit(*amount),
            TransactionType::Transfer {
                amount,
                target_account,
            } => {
                let done = account.withdraw(*amount);
                if done {
                    tracing::info!(
                        transaction = %self.id,
                        from = %account.number(),
                        to = %target_account,
                        %amount,
                        "Outgoing transfer"
                    );
                }
                done
            }
        }
    }
}

/// Decides whether a withdrawal of `amount` may run against `balance`
pub trait TransactionValidator {
    fn validate(&self, amount: Decimal, balance: Decimal) -> bool;
}

impl<F> TransactionValidator for F
where
    F: Fn(Decimal, Decimal) -> bool,
{
    fn validate(&self, amount: Decimal, balance: Decimal) -> bool {
        self(amount, balance)
    }
}

/// Withdrawal that only runs when its validator accepts it
pub struct GuardedTransaction<V: TransactionValidator> {
    pub amount: Decimal,
    validator: V,
}

impl<V: TransactionValidator> GuardedTransaction<V> {
    pub fn new(amount: Decimal, validator: V) -> Self {
        Self { amount, validator }
    }

    pub fn execute(&self, account: &mut BankAccount) -> bool {
        if !self.validator.validate(self.amount, account.balance()) {
            tracing::debug!(account = %account.number(), amount = %self.amount, "Validator refused withdrawal");
            return false;
        }
        account.withdraw(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn account(balance: Decimal) -> BankAccount {
        BankAccount::new("CONTA-TX", "Tech Solutions Ltda", balance).unwrap()
    }

    #[test]
    fn test_debit_and_credit() {
        let mut acc = account(dec!(100));

        assert!(Transaction::new("t1", TransactionType::Credit { amount: dec!(50) }).execute(&mut acc));
        assert_eq!(acc.balance(), dec!(150));

        assert!(Transaction::new("t2", TransactionType::Debit { amount: dec!(30) }).execute(&mut acc));
        assert_eq!(acc.balance(), dec!(120));

        assert!(!Transaction::new("t3", TransactionType::Debit { amount: dec!(500) }).execute(&mut acc));
        assert_eq!(acc.balance(), dec!(120));
    }

    #[test]
    fn test_transfer_debits_source() {
        let mut acc = account(dec!(100));
        let tx = Transaction::new(
            "t4",
            TransactionType::Transfer {
                amount: dec!(75),
                target_account: "CONTA-999999".to_string(),
            },
        );
        assert_eq!(tx.kind.amount(), dec!(75));
        assert!(tx.execute(&mut acc));
        assert_eq!(acc.balance(), dec!(25));
        assert!(!tx.execute(&mut acc));
    }

    #[test]
    fn test_guarded_transaction() {
        let mut acc = account(dec!(1000));
        let keep_reserve = |amount: Decimal, balance: Decimal| balance - amount >= dec!(100);

        assert!(GuardedTransaction::new(dec!(900), keep_reserve).execute(&mut acc));
        assert_eq!(acc.balance(), dec!(100));

        assert!(!GuardedTransaction::new(dec!(1), keep_reserve).execute(&mut acc));
        assert_eq!(acc.balance(), dec!(100));
    }

    #[test]
    fn test_guarded_transaction_still_needs_funds() {
        let mut acc = account(dec!(10));
        let always = |_: Decimal, _: Decimal| true;
        assert!(!GuardedTransaction::new(dec!(20), always).execute(&mut acc));
    }
}
