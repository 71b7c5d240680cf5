//! Transaction-line parsing: `dd/mm` date, description, trailing amount.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;

use crate::date::resolve_year;
use crate::types::Transaction;

fn transaction_parts_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<date>\d{2}/\d{2})\s+(?P<description>.*?)\s+(?P<amount>[\d.,]+-?)")
            .expect("transaction parts regex")
    })
}

/// Normalize a statement amount token into an exact decimal.
///
/// `.` is the thousands separator and `,` the decimal separator; a trailing
/// `-` negates ("1.234,56-" => -1234.56). Fails when the digits left after
/// stripping separators do not form a number.
pub fn parse_amount(token: &str) -> Result<Decimal> {
    let (token, negative) = match token.strip_suffix('-') {
        Some(rest) => (rest, true),
        None => (token, false),
    };
    let normalized = token.replace('.', "").replace(',', ".");
    let amount: Decimal = normalized
        .parse()
        .with_context(|| format!("malformed amount token {token:?}"))?;
    Ok(if negative { -amount } else { amount })
}

/// Parse one statement line into a transaction, or `None` when the line is
/// not transaction-shaped (safe to call on every line of a document).
///
/// The `dd/mm` date's year is resolved against `due_date` per
/// [`resolve_year`], falling back to `default_year`. Amounts or calendar
/// dates that pass the line grammar but are malformed are errors carrying
/// the offending line.
pub fn parse_transaction(
    line: &str,
    account_id: &str,
    currency: &str,
    due_date: Option<NaiveDate>,
    default_year: i32,
) -> Result<Option<Transaction>> {
    let Some(caps) = transaction_parts_regex().captures(line) else {
        return Ok(None);
    };

    let mut parts = caps["date"].splitn(2, '/');
    // both present: the grammar guarantees dd/mm
    let day: u32 = parts.next().unwrap_or_default().parse().unwrap_or(0);
    let month: u32 = parts.next().unwrap_or_default().parse().unwrap_or(0);

    let year = resolve_year(month, due_date, default_year);
    let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
        bail!("invalid calendar date {day:02}/{month:02}/{year} in line {line:?}");
    };

    let amount = parse_amount(&caps["amount"]).with_context(|| format!("in line {line:?}"))?;

    Ok(Some(Transaction {
        date,
        description: caps["description"].trim().to_string(),
        amount,
        currency: currency.to_string(),
        account_id: account_id.to_string(),
        category: None,
        metadata: None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_with_thousands_and_negative_marker() {
        assert_eq!(parse_amount("1.234,56-").unwrap(), "-1234.56".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_amount_plain() {
        assert_eq!(parse_amount("100,00").unwrap(), "100.00".parse::<Decimal>().unwrap());
        assert_eq!(parse_amount("24,05").unwrap(), "24.05".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_amount_malformed() {
        assert!(parse_amount(".").is_err());
        assert!(parse_amount(",,").is_err());
    }

    #[test]
    fn test_parse_transaction_basic() {
        let txn = parse_transaction("06/03 PAG BOLETO BANCARIO 1.234,56-", "acct", "BRL", None, 2025)
            .unwrap()
            .unwrap();
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2025, 3, 6).unwrap());
        assert_eq!(txn.description, "PAG BOLETO BANCARIO");
        assert_eq!(txn.amount, "-1234.56".parse::<Decimal>().unwrap());
        assert_eq!(txn.currency, "BRL");
        assert_eq!(txn.account_id, "acct");
    }

    #[test]
    fn test_parse_transaction_description_with_digits() {
        let txn = parse_transaction(
            "06/03 PAO DE ACUCAR-1783 R. DE JANEIRO 24,05",
            "acct",
            "BRL",
            None,
            2025,
        )
        .unwrap()
        .unwrap();
        assert_eq!(txn.description, "PAO DE ACUCAR-1783 R. DE JANEIRO");
        assert_eq!(txn.amount, "24.05".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_parse_transaction_year_boundary() {
        // due date in January, purchase in December of the previous year
        let due = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let txn = parse_transaction("28/12 COMPRA DE NATAL 150,00", "acct", "BRL", Some(due), 2099)
            .unwrap()
            .unwrap();
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2023, 12, 28).unwrap());
        assert_eq!(txn.amount, "150.00".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_parse_transaction_rejects_non_transaction_lines() {
        assert!(
            parse_transaction("VISA INFINITE", "acct", "BRL", None, 2025)
                .unwrap()
                .is_none()
        );
        assert!(
            parse_transaction("JOHN DOE Cartão 9999 XXXX XXXX 1234", "acct", "BRL", None, 2025)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_parse_transaction_invalid_calendar_date_is_error() {
        assert!(parse_transaction("31/02 COMPRA TESTE 100,00", "acct", "BRL", None, 2025).is_err());
    }
}
