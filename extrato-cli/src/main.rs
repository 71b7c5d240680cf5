//! extrato: normalize a bank or card statement into JSON transactions.

use anyhow::Result;
use chrono::Datelike;
use clap::{Parser, ValueEnum};
use extrato_core::group_by_card;
use extrato_ingest::parsers::bradesco_credit_card::{self, DueDatePolicy};
use extrato_ingest::parsers::{nubank_bank, nubank_credit_card};
use extrato_ingest::source::PdfTextSource;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Source {
    /// Bradesco credit-card invoice (PDF)
    BradescoCreditCard,
    /// Nubank credit-card export (CSV)
    NubankCreditCard,
    /// Nubank bank-account export (CSV)
    NubankBank,
}

#[derive(Parser)]
#[command(name = "extrato", about = "Normalize bank/card statements to JSON")]
struct Cli {
    #[arg(value_enum)]
    source: Source,
    /// Statement file (PDF for bradesco-credit-card, CSV otherwise)
    path: PathBuf,
    /// Year assumed for dd/mm dates when the statement has no due date
    #[arg(long)]
    year: Option<i32>,
    /// Fail if the statement has no recognizable due-date header
    #[arg(long)]
    require_due_date: bool,
    /// Print per-card transaction groups instead of the flat statement
    #[arg(long)]
    by_card: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // wall clock stays at the edge; the parsers take the year explicitly
    let default_year = cli.year.unwrap_or_else(|| chrono::Local::now().year());
    let policy = if cli.require_due_date {
        DueDatePolicy::Required
    } else {
        DueDatePolicy::Optional
    };

    let statement = match cli.source {
        Source::BradescoCreditCard => {
            bradesco_credit_card::parse_pdf(&cli.path, &PdfTextSource, policy, default_year)?
        }
        Source::NubankCreditCard => nubank_credit_card::parse_csv(&cli.path)?,
        Source::NubankBank => nubank_bank::parse_csv(&cli.path)?,
    };

    if cli.by_card {
        println!("{}", serde_json::to_string_pretty(&group_by_card(&statement))?);
    } else {
        println!("{}", serde_json::to_string_pretty(&statement)?);
    }
    Ok(())
}
