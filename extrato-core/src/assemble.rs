//! Single-pass statement assembly over extracted document lines.

use anyhow::Result;
use chrono::NaiveDate;

use crate::classify::{extract_card_suffix, is_transaction_line};
use crate::parse::parse_transaction;
use crate::types::{AccountType, Statement};

/// Card suffix used before any card header has been seen (also the fixed
/// suffix for single-card documents with no headers at all).
pub const DEFAULT_CARD_SUFFIX: &str = "0000";

/// Assembly policy shared by all line-oriented adapters.
pub struct AssembleOptions<'a> {
    /// Account id of the produced statement as a whole
    pub statement_account_id: &'a str,
    pub account_type: AccountType,
    pub currency: &'a str,
    /// Year-disambiguation anchor, if the document carries one
    pub due_date: Option<NaiveDate>,
    /// Year assumed when there is no anchor
    pub default_year: i32,
}

/// Walk the document lines once, in order, collecting transactions.
///
/// Card headers update the current card suffix; each transaction line is
/// parsed under the account id built by `account_id` from that suffix.
/// Lines that are neither are skipped; most lines of a statement are
/// boilerplate. Format errors on accepted lines
/// (malformed amount or calendar date) propagate.
pub fn assemble<S, F>(lines: &[S], opts: &AssembleOptions, account_id: F) -> Result<Statement>
where
    S: AsRef<str>,
    F: Fn(&str) -> String,
{
    let mut current_suffix = DEFAULT_CARD_SUFFIX.to_string();
    let mut transactions = Vec::new();

    for line in lines {
        let line = line.as_ref();
        if let Some(suffix) = extract_card_suffix(line) {
            current_suffix = suffix.to_string();
        }

        if is_transaction_line(line) {
            if let Some(transaction) = parse_transaction(
                line,
                &account_id(&current_suffix),
                opts.currency,
                opts.due_date,
                opts.default_year,
            )? {
                transactions.push(transaction);
            }
        }
    }

    Ok(Statement::from_transactions(
        opts.statement_account_id,
        opts.account_type,
        transactions,
    ))
}
