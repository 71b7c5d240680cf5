//! Nubank credit-card statement parser (CSV export).
//!
//! Exported CSVs carry a header row and one transaction per row:
//!   date,title,amount
//!   2024-01-01,Uber* Trip,15.50
//! Amounts use `.` decimals; charges are positive, payments negative.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use extrato_core::{AccountType, Statement, Transaction};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

/// Single card export, no masked-number sections to disambiguate
pub const ACCOUNT_ID: &str = "nubank_card_0000";

const CURRENCY: &str = "BRL";

#[derive(Debug, Deserialize)]
struct Row {
    date: String,
    title: String,
    amount: Decimal,
}

/// Parse a Nubank credit-card CSV export into a statement.
pub fn parse_csv(path: impl AsRef<Path>) -> Result<Statement> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut transactions = Vec::new();
    for result in rdr.deserialize() {
        let row: Row = result.with_context(|| format!("reading {}", path.display()))?;
        let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
            .with_context(|| format!("malformed date {:?} in {}", row.date, path.display()))?;
        transactions.push(Transaction {
            date,
            description: row.title.trim().to_string(),
            amount: row.amount,
            currency: CURRENCY.to_string(),
            account_id: ACCOUNT_ID.to_string(),
            category: None,
            metadata: None,
        });
    }

    Ok(Statement::from_transactions(
        ACCOUNT_ID,
        AccountType::CreditCard,
        transactions,
    ))
}
