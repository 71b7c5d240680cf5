//! Nubank bank-account statement parser (CSV export).
//!
//! Exported CSVs carry a header row and one movement per row:
//!   Data,Valor,Identificador,Descrição
//!   14/07/2024,7568.39,abc-123,Transferência recebida pelo Pix - João
//! Only the date, value and description columns matter; the export's
//! other columns are ignored.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use extrato_core::{AccountType, Statement, Transaction};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

pub const ACCOUNT_ID: &str = "nubank_bank_0000";

const CURRENCY: &str = "BRL";

#[derive(Debug, Deserialize)]
struct Row {
    #[serde(rename = "Data")]
    date: String,
    #[serde(rename = "Valor")]
    amount: Decimal,
    #[serde(rename = "Descrição")]
    description: String,
}

/// Parse a Nubank bank-account CSV export into a statement.
pub fn parse_csv(path: impl AsRef<Path>) -> Result<Statement> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut transactions = Vec::new();
    for result in rdr.deserialize() {
        let row: Row = result.with_context(|| format!("reading {}", path.display()))?;
        let date = NaiveDate::parse_from_str(&row.date, "%d/%m/%Y")
            .with_context(|| format!("malformed date {:?} in {}", row.date, path.display()))?;
        transactions.push(Transaction {
            date,
            description: row.description.trim().to_string(),
            amount: row.amount,
            currency: CURRENCY.to_string(),
            account_id: ACCOUNT_ID.to_string(),
            category: None,
            metadata: None,
        });
    }

    Ok(Statement::from_transactions(
        ACCOUNT_ID,
        AccountType::Bank,
        transactions,
    ))
}
