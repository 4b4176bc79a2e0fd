use std::io::Read;

use chrono::NaiveDate;
use csv::{DeserializeRecordsIntoIter, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::account::AccountNumber;
use crate::registry::{AccountVariant, Operation, OperationKind, OperationRowError};

const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

/// One operation row as it appears on the wire. Columns that a given
/// operation does not use are left empty.
#[derive(Debug, Deserialize)]
pub struct OperationRow {
    pub op: OperationKind,
    pub client: String,
    pub account: Option<AccountNumber>,
    pub amount: Option<Decimal>,
    pub name: Option<String>,
    pub birthdate: Option<String>,
    pub address: Option<String>,
    pub variant: Option<AccountVariant>,
}

impl OperationRow {
    /// Validate the row shape for its operation kind.
    pub fn into_operation(self) -> Result<Operation, OperationRowError> {
        match self.op {
            OperationKind::Register => {
                let name = self.name.ok_or(OperationRowError::MissingClientDetails)?;
                let birthdate = self
                    .birthdate
                    .ok_or(OperationRowError::MissingClientDetails)?;
                let address = self
                    .address
                    .ok_or(OperationRowError::MissingClientDetails)?;
                let birth_date = NaiveDate::parse_from_str(&birthdate, BIRTH_DATE_FORMAT)
                    .map_err(|_| OperationRowError::InvalidBirthDate { value: birthdate })?;
                Ok(Operation::Register {
                    tax_id: self.client,
                    name,
                    birth_date,
                    address,
                })
            }
            OperationKind::Open => Ok(Operation::Open {
                tax_id: self.client,
                variant: self.variant.unwrap_or_default(),
            }),
            OperationKind::Deposit => Ok(Operation::Deposit {
                tax_id: self.client,
                account: self.account,
                amount: self
                    .amount
                    .ok_or(OperationRowError::AmountRequired { kind: self.op })?,
            }),
            OperationKind::Withdrawal => Ok(Operation::Withdrawal {
                tax_id: self.client,
                account: self.account,
                amount: self
                    .amount
                    .ok_or(OperationRowError::AmountRequired { kind: self.op })?,
            }),
        }
    }
}

/// Parses an operation list in CSV format
///
/// # Panics
///
/// If a row cannot be parsed
pub struct CsvOperationParser<R> {
    iter: DeserializeRecordsIntoIter<R, OperationRow>,
}

impl<R> CsvOperationParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvOperationParser<R>
where
    R: Read,
{
    type Item = (u64, OperationRow);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row.unwrap()))
    }
}
