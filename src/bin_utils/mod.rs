//! This module could be a separate crate on its own, to bootstrap [`passbook`](crate)
//! within the binary, but for simplicity purposes I include it directly.

use std::io::{Read, Write};

use crate::registry::{
    OperationProcessError, RegistryOperations, in_memory_registry::InMemoryRegistry,
};
use anyhow::Result;
use csv_parser::CsvOperationParser;
use csv_printer::{AccountSummary, print_accounts, print_statements};
pub mod csv_parser;
pub mod csv_printer;

/// Final report printed after the operation stream is exhausted.
#[derive(Debug, Clone, Copy)]
pub enum Report {
    /// One row per account: number, branch, holder, balance.
    Summaries,
    /// One row per recorded history entry.
    Statements,
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub report: Report,
    pub error_printer: Box<dyn FnMut(u64, OperationProcessError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvOperationParser::new(self.input);

        let mut registry = InMemoryRegistry::default();

        for (line, row) in parser {
            let outcome = row
                .into_operation()
                .map_err(OperationProcessError::from)
                .and_then(|operation| registry.process_operation(operation));
            if let Err(err) = outcome {
                (self.error_printer)(line, err);
            }
        }

        match self.report {
            Report::Summaries => {
                let summaries: Vec<_> = registry
                    .accounts()
                    .map(|account| AccountSummary {
                        number: account.number(),
                        branch: account.branch(),
                        holder: holder_name(&registry, account.owner()),
                        balance: account.balance(),
                    })
                    .collect();
                print_accounts(self.output, summaries.into_iter())
            }
            Report::Statements => print_statements(self.output, registry.accounts()),
        }
    }
}

fn holder_name(registry: &InMemoryRegistry, tax_id: &str) -> String {
    registry
        .find_client(tax_id)
        .map(|client| client.name().to_owned())
        .unwrap_or_else(|| tax_id.to_owned())
}
