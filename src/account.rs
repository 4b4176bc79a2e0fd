use rust_decimal::Decimal;
use thiserror::Error;

use crate::client::TaxId;
use crate::history::History;
use crate::transaction::TransactionKind;

pub type AccountNumber = u32;

/// Issuing branch, constant for every account in this model.
pub const BRANCH_CODE: &str = "0001";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Amount must be positive")]
    InvalidAmount,
    #[error("Insufficient funds")]
    InsufficientFunds,
    #[error("Withdrawal amount exceeds the {limit} limit")]
    LimitExceeded { limit: Decimal },
    #[error("Withdrawal count limit of {max} reached")]
    WithdrawalCountExceeded { max: usize },
}

/// Extra withdrawal rules carried by checking accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckingPolicy {
    /// Largest amount a single withdrawal may move.
    pub withdrawal_limit: Decimal,
    /// Cap on the number of withdrawals recorded over the whole history.
    pub max_withdrawals: usize,
}

impl Default for CheckingPolicy {
    fn default() -> Self {
        Self {
            withdrawal_limit: Decimal::from(500),
            max_withdrawals: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountPolicy {
    Standard,
    Checking(CheckingPolicy),
}

impl AccountPolicy {
    /// Checking policy with the default limits.
    pub fn checking() -> Self {
        AccountPolicy::Checking(CheckingPolicy::default())
    }
}

/// Account state. The balance changes only through [`Account::deposit`] and
/// [`Account::withdraw`], and never goes negative.
#[derive(Debug)]
pub struct Account {
    number: AccountNumber,
    owner: TaxId,
    balance: Decimal,
    policy: AccountPolicy,
    history: History,
}

impl Account {
    pub fn open(number: AccountNumber, owner: TaxId, policy: AccountPolicy) -> Self {
        Self {
            number,
            owner,
            balance: Decimal::ZERO,
            policy,
            history: History::default(),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &'static str {
        BRANCH_CODE
    }

    /// Tax id of the owning client. The account does not own the client.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Recording is [`crate::transaction::Transaction::register`]'s job,
    /// after the balance mutation has succeeded.
    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Increase the balance. History is not touched here; the caller
    /// records the transaction once the operation has succeeded.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::InvalidAmount);
        }
        self.balance += amount;
        Ok(())
    }

    /// Decrease the balance. Checking policy gates run strictly before the
    /// base rule, so the tighter policy can never be bypassed; the first
    /// failing check wins.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if let AccountPolicy::Checking(policy) = self.policy {
            if amount > policy.withdrawal_limit {
                return Err(AccountError::LimitExceeded {
                    limit: policy.withdrawal_limit,
                });
            }
            let withdrawals = self.history.count_of(TransactionKind::Withdrawal);
            if withdrawals >= policy.max_withdrawals {
                return Err(AccountError::WithdrawalCountExceeded {
                    max: policy.max_withdrawals,
                });
            }
        }
        self.withdraw_base(amount)
    }

    // Base rule shared by every account variant.
    fn withdraw_base(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds);
        }
        if amount <= Decimal::ZERO {
            return Err(AccountError::InvalidAmount);
        }
        self.balance -= amount;
        Ok(())
    }
}
