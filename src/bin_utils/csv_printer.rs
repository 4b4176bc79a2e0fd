use std::io::Write;

use csv::Writer;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::account::{Account, AccountNumber};

const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

// Currency values are displayed with exactly two decimal places.
fn two_decimal_places<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{amount:.2}"))
}

#[derive(Debug, Serialize)]
pub struct AccountSummary {
    pub number: AccountNumber,
    pub branch: &'static str,
    pub holder: String,
    #[serde(serialize_with = "two_decimal_places")]
    pub balance: Decimal,
}

#[derive(Debug, Serialize)]
struct StatementEntry {
    account: AccountNumber,
    kind: &'static str,
    #[serde(serialize_with = "two_decimal_places")]
    amount: Decimal,
    recorded_at: String,
}

pub fn print_accounts<W>(
    output: &mut W,
    accounts: impl Iterator<Item = AccountSummary>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for account in accounts {
        if let Err(err) = writer.serialize(account) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    flush(writer)
}

/// One row per recorded history entry, account by account in opening order.
pub fn print_statements<'a, W>(
    output: &mut W,
    accounts: impl Iterator<Item = &'a Account>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for account in accounts {
        for entry in account.history().entries() {
            let row = StatementEntry {
                account: account.number(),
                kind: entry.kind().as_str(),
                amount: entry.amount(),
                recorded_at: entry.recorded_at().format(TIMESTAMP_FORMAT).to_string(),
            };
            if let Err(err) = writer.serialize(row) {
                anyhow::bail!("Failed to write to CSV: {err}")
            }
        }
    }
    flush(writer)
}

fn flush<W: Write>(mut writer: Writer<W>) -> anyhow::Result<()> {
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
