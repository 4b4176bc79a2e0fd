use chrono::NaiveDate;

use crate::account::{Account, AccountError, AccountNumber};
use crate::transaction::Transaction;

pub type TaxId = String;

/// A registered client. Accounts are referenced by number; the registry
/// owns the account state itself.
#[derive(Debug, Clone)]
pub struct Client {
    tax_id: TaxId,
    name: String,
    birth_date: NaiveDate,
    address: String,
    accounts: Vec<AccountNumber>,
}

impl Client {
    pub fn new(tax_id: TaxId, name: String, birth_date: NaiveDate, address: String) -> Self {
        Self {
            tax_id,
            name,
            birth_date,
            address,
            accounts: Vec::new(),
        }
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Owned account numbers, in opening order.
    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    /// Uniqueness is the registry's concern, not the client's.
    pub fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }

    /// Indirection point for attaching client-level policy later without
    /// touching [`Account`] or [`Transaction`].
    pub fn request_transaction(
        &self,
        account: &mut Account,
        transaction: &Transaction,
    ) -> Result<(), AccountError> {
        transaction.register(account)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::FromPrimitive;

    use crate::account::AccountPolicy;

    use super::*;

    fn client() -> Client {
        Client::new(
            "12345678900".to_owned(),
            "Ana Souza".to_owned(),
            NaiveDate::from_ymd_opt(1990, 3, 12).unwrap(),
            "Rua das Flores 52, Centro - SP".to_owned(),
        )
    }

    #[test]
    fn add_account_keeps_opening_order() {
        let mut client = client();
        assert!(client.accounts().is_empty());

        client.add_account(3);
        client.add_account(1);
        assert_eq!(client.accounts(), &[3, 1]);
    }

    #[test]
    fn request_transaction_applies_and_records() {
        let client = client();
        let mut account = Account::open(1, client.tax_id().to_owned(), AccountPolicy::checking());

        client
            .request_transaction(
                &mut account,
                &Transaction::Deposit {
                    amount: Decimal::from_u32(10).unwrap(),
                },
            )
            .unwrap();

        assert_eq!(account.balance(), Decimal::from_u32(10).unwrap());
        assert_eq!(account.history().entries().len(), 1);
    }

    #[test]
    fn request_transaction_surfaces_rejections() {
        let client = client();
        let mut account = Account::open(1, client.tax_id().to_owned(), AccountPolicy::checking());

        let err = client
            .request_transaction(
                &mut account,
                &Transaction::Withdrawal {
                    amount: Decimal::from_u32(10).unwrap(),
                },
            )
            .unwrap_err();

        assert_eq!(err, AccountError::InsufficientFunds);
        assert!(account.history().entries().is_empty());
    }
}
