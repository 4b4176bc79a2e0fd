use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::account::{Account, AccountNumber, AccountPolicy};
use crate::client::{Client, TaxId};
use crate::transaction::Transaction;

use super::{
    AccountVariant, Operation, OperationProcessError, RegistryError, RegistryOperations,
};

/// Holds every client and account for the lifetime of the process and
/// routes operations to them. Accounts are keyed by their monotonically
/// assigned number, so iteration follows opening order.
#[derive(Default)]
pub struct InMemoryRegistry {
    clients: HashMap<TaxId, Client>,
    accounts: BTreeMap<AccountNumber, Account>,
    last_account_number: AccountNumber,
}

impl InMemoryRegistry {
    pub fn register_client(
        &mut self,
        tax_id: TaxId,
        name: String,
        birth_date: NaiveDate,
        address: String,
    ) -> Result<(), RegistryError> {
        if self.clients.contains_key(&tax_id) {
            return Err(RegistryError::DuplicateClient { tax_id });
        }
        debug!(%tax_id, "client registered");
        let client = Client::new(tax_id.clone(), name, birth_date, address);
        self.clients.insert(tax_id, client);
        Ok(())
    }

    /// Open an account bound to an existing client. The registry assigns
    /// the next number and updates the client's account list.
    pub fn open_account(
        &mut self,
        tax_id: &str,
        variant: AccountVariant,
    ) -> Result<AccountNumber, RegistryError> {
        let client = self
            .clients
            .get_mut(tax_id)
            .ok_or_else(|| RegistryError::ClientNotFound {
                tax_id: tax_id.to_owned(),
            })?;

        self.last_account_number += 1;
        let number = self.last_account_number;
        let policy = match variant {
            AccountVariant::Checking => AccountPolicy::checking(),
            AccountVariant::Standard => AccountPolicy::Standard,
        };
        let account = Account::open(number, client.tax_id().to_owned(), policy);
        client.add_account(number);
        self.accounts.insert(number, account);
        debug!(%tax_id, number, "account opened");
        Ok(number)
    }

    pub fn find_client(&self, tax_id: &str) -> Option<&Client> {
        self.clients.get(tax_id)
    }

    /// All accounts in opening order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Resolve one of a client's accounts for reading.
    pub fn select_account(
        &self,
        tax_id: &str,
        requested: Option<AccountNumber>,
    ) -> Result<&Account, RegistryError> {
        let client = self
            .clients
            .get(tax_id)
            .ok_or_else(|| RegistryError::ClientNotFound {
                tax_id: tax_id.to_owned(),
            })?;
        let number = Self::choose_account(client, requested)?;
        self.accounts
            .get(&number)
            .ok_or_else(|| RegistryError::AccountNotFound {
                tax_id: tax_id.to_owned(),
                number,
            })
    }

    /// An explicit number must belong to the client; without one, the sole
    /// account is used.
    fn choose_account(
        client: &Client,
        requested: Option<AccountNumber>,
    ) -> Result<AccountNumber, RegistryError> {
        match requested {
            Some(number) => {
                if client.accounts().contains(&number) {
                    Ok(number)
                } else {
                    Err(RegistryError::AccountNotFound {
                        tax_id: client.tax_id().to_owned(),
                        number,
                    })
                }
            }
            None => match client.accounts() {
                [] => Err(RegistryError::NoAccountForClient {
                    tax_id: client.tax_id().to_owned(),
                }),
                [number] => Ok(*number),
                owned => Err(RegistryError::AccountSelectionRequired {
                    tax_id: client.tax_id().to_owned(),
                    count: owned.len(),
                }),
            },
        }
    }

    fn request(
        &mut self,
        tax_id: &str,
        requested: Option<AccountNumber>,
        transaction: Transaction,
    ) -> Result<(), OperationProcessError> {
        let client = self
            .clients
            .get(tax_id)
            .ok_or_else(|| RegistryError::ClientNotFound {
                tax_id: tax_id.to_owned(),
            })?;
        let number = Self::choose_account(client, requested)?;
        let account = self
            .accounts
            .get_mut(&number)
            .ok_or_else(|| RegistryError::AccountNotFound {
                tax_id: tax_id.to_owned(),
                number,
            })?;

        match client.request_transaction(account, &transaction) {
            Ok(()) => {
                debug!(%tax_id, number, kind = %transaction.kind(), "transaction applied");
                Ok(())
            }
            Err(err) => {
                warn!(%tax_id, number, %err, "transaction rejected");
                Err(err.into())
            }
        }
    }
}

impl RegistryOperations for InMemoryRegistry {
    fn process_operation(&mut self, operation: Operation) -> Result<(), OperationProcessError> {
        match operation {
            Operation::Register {
                tax_id,
                name,
                birth_date,
                address,
            } => self.register_client(tax_id, name, birth_date, address)?,
            Operation::Open { tax_id, variant } => {
                self.open_account(&tax_id, variant)?;
            }
            Operation::Deposit {
                tax_id,
                account,
                amount,
            } => self.request(&tax_id, account, Transaction::Deposit { amount })?,
            Operation::Withdrawal {
                tax_id,
                account,
                amount,
            } => self.request(&tax_id, account, Transaction::Withdrawal { amount })?,
        }
        Ok(())
    }
}
