use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::account::{AccountError, AccountNumber};
use crate::client::TaxId;

pub mod in_memory_registry;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Register,
    Open,
    Deposit,
    Withdrawal,
}

/// Account flavor requested when opening; checking is the default and
/// carries the default withdrawal policy.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountVariant {
    #[default]
    Checking,
    Standard,
}

/// One validated operation against the registry.
#[derive(Debug, Clone)]
pub enum Operation {
    Register {
        tax_id: TaxId,
        name: String,
        birth_date: NaiveDate,
        address: String,
    },
    Open {
        tax_id: TaxId,
        variant: AccountVariant,
    },
    Deposit {
        tax_id: TaxId,
        account: Option<AccountNumber>,
        amount: Decimal,
    },
    Withdrawal {
        tax_id: TaxId,
        account: Option<AccountNumber>,
        amount: Decimal,
    },
}

/// Routing failures, surfaced before any transaction is constructed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Client `{tax_id}` is already registered")]
    DuplicateClient { tax_id: TaxId },
    #[error("Client `{tax_id}` not found")]
    ClientNotFound { tax_id: TaxId },
    #[error("Account {number} not found for client `{tax_id}`")]
    AccountNotFound {
        tax_id: TaxId,
        number: AccountNumber,
    },
    #[error("Client `{tax_id}` has no account")]
    NoAccountForClient { tax_id: TaxId },
    #[error("Client `{tax_id}` has {count} accounts, an account number is required")]
    AccountSelectionRequired { tax_id: TaxId, count: usize },
}

/// A row that cannot be turned into an [`Operation`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OperationRowError {
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: OperationKind },
    #[error("Name, birth date and address are required to register a client")]
    MissingClientDetails,
    #[error("Invalid birth date `{value}`, expected dd-mm-yyyy")]
    InvalidBirthDate { value: String },
}

#[derive(Debug, Error)]
pub enum OperationProcessError {
    #[error(transparent)]
    RowErr(#[from] OperationRowError),
    #[error(transparent)]
    RegistryErr(#[from] RegistryError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

/// NOTE: Technically this interface is not necessary, but it is a good
/// integration point to replace the in-memory registry with something
/// persistent.
pub trait RegistryOperations {
    fn process_operation(&mut self, operation: Operation) -> Result<(), OperationProcessError>;
}
