use std::fmt;

use chrono::Local;
use rust_decimal::Decimal;

use crate::account::{Account, AccountError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transaction is transient: constructed with an amount, registered
/// against exactly one account, then discarded. Only its recorded
/// projection lives on in the account history.
#[derive(Debug, Clone, Copy)]
pub enum Transaction {
    Deposit { amount: Decimal },
    Withdrawal { amount: Decimal },
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Deposit { .. } => TransactionKind::Deposit,
            Transaction::Withdrawal { .. } => TransactionKind::Withdrawal,
        }
    }

    pub fn amount(&self) -> Decimal {
        match self {
            Transaction::Deposit { amount } | Transaction::Withdrawal { amount } => *amount,
        }
    }

    /// Apply this transaction to `account` and, only if the account
    /// operation succeeds, append the recording to the account history.
    /// A rejected transaction leaves no trace; the account's own failure
    /// is the only signal.
    pub fn register(&self, account: &mut Account) -> Result<(), AccountError> {
        match self {
            Transaction::Deposit { amount } => account.deposit(*amount)?,
            Transaction::Withdrawal { amount } => account.withdraw(*amount)?,
        }
        account
            .history_mut()
            .record(self.kind(), self.amount(), Local::now());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::FromPrimitive;

    use crate::account::AccountPolicy;

    use super::*;

    fn checking_account() -> Account {
        Account::open(1, "11122233344".to_owned(), AccountPolicy::checking())
    }

    #[test]
    fn successful_deposit_is_recorded() {
        let mut account = checking_account();
        let transaction = Transaction::Deposit {
            amount: Decimal::from_u32(1000).unwrap(),
        };

        transaction.register(&mut account).unwrap();

        assert_eq!(account.balance(), Decimal::from_u32(1000).unwrap());
        let entries = account.history().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind(), TransactionKind::Deposit);
        assert_eq!(entries[0].amount(), Decimal::from_u32(1000).unwrap());
    }

    #[test]
    fn successful_withdrawal_is_recorded() {
        let mut account = checking_account();
        Transaction::Deposit {
            amount: Decimal::from_u32(100).unwrap(),
        }
        .register(&mut account)
        .unwrap();

        Transaction::Withdrawal {
            amount: Decimal::from_u32(40).unwrap(),
        }
        .register(&mut account)
        .unwrap();

        assert_eq!(account.balance(), Decimal::from_u32(60).unwrap());
        assert_eq!(account.history().entries().len(), 2);
        assert_eq!(account.history().count_of(TransactionKind::Withdrawal), 1);
    }

    #[test]
    fn rejected_transaction_leaves_no_trace() {
        let mut account = checking_account();
        Transaction::Deposit {
            amount: Decimal::from_u32(10).unwrap(),
        }
        .register(&mut account)
        .unwrap();

        let err = Transaction::Withdrawal {
            amount: Decimal::from_u32(50).unwrap(),
        }
        .register(&mut account)
        .unwrap_err();

        assert_eq!(err, AccountError::InsufficientFunds);
        assert_eq!(account.balance(), Decimal::from_u32(10).unwrap());
        assert_eq!(account.history().entries().len(), 1);
    }

    #[test]
    fn rejected_deposit_leaves_no_trace() {
        let mut account = checking_account();

        let err = Transaction::Deposit {
            amount: Decimal::from_i32(-5).unwrap(),
        }
        .register(&mut account)
        .unwrap_err();

        assert_eq!(err, AccountError::InvalidAmount);
        assert_eq!(account.balance(), Decimal::ZERO);
        assert!(account.history().entries().is_empty());
    }
}
