use std::fs::File;

use anyhow::{Context, Result};
use passbook::bin_utils::{Report, Service};
use passbook::registry::OperationProcessError;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let filename = args
        .next()
        .context("Expected an operations file as the first argument")?;
    let report = match args.next().as_deref() {
        None => Report::Summaries,
        Some("--statements") => Report::Statements,
        Some(other) => anyhow::bail!("Unknown argument `{other}`"),
    };
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        report,
        error_printer: Box::new(|line, err| match err {
            OperationProcessError::AccountErr(err) => {
                // business-rule rejections, reported but never fatal
                eprintln!("Rejected at line {line}: {err}")
            }
            err => eprintln!("Error at line {line}: {err}"),
        }),
    };
    service.run()
}
