//! Bradesco credit-card statement parser (PDF text).
//!
//! Expected extracted-text shape, one section per card:
//!   JOHN DOE Cartão 4066 XXXX XXXX 3029
//!   06/03 PAG BOLETO BANCARIO 8.804,23- PROGRAMA DE FIDELIDADE
//!   06/03 PAO DE ACUCAR-1783 R. DE JANEIRO 24,05
//! plus a due-date header somewhere in the document:
//!   Data de Vencimento: 15/01/2025
//!
//! Transaction dates are `dd/mm`; the due date anchors the year (a January
//! due date covers December purchases of the previous year). Transactions
//! are attributed to the most recent card header; per-card grouping is a
//! post-processing step over the flat statement
//! (`extrato_core::group_by_card`).

use anyhow::{Result, bail};
use extrato_core::{AccountType, AssembleOptions, Statement, assemble, extract_due_date};
use std::path::Path;

use crate::source::TextSource;

/// Statement-level account id of the (possibly multi-card) document
pub const ACCOUNT_ID: &str = "bradesco_credit_card_multi";

const CURRENCY: &str = "BRL";

/// Whether a statement without a recognizable due-date header is usable.
///
/// `Required` treats the missing header as a structural format error (the
/// document is not a Bradesco invoice, or extraction mangled it);
/// `Optional` falls back to `default_year` for year resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDatePolicy {
    Optional,
    Required,
}

/// Parse already-extracted statement lines.
pub fn parse_lines<S: AsRef<str>>(
    lines: &[S],
    policy: DueDatePolicy,
    default_year: i32,
) -> Result<Statement> {
    let due_date = extract_due_date(lines);
    if due_date.is_none() && policy == DueDatePolicy::Required {
        bail!("statement has no due-date header (VENCIMENTO dd/mm/yyyy)");
    }

    let opts = AssembleOptions {
        statement_account_id: ACCOUNT_ID,
        account_type: AccountType::CreditCard,
        currency: CURRENCY,
        due_date,
        default_year,
    };
    assemble(lines, &opts, |suffix| format!("bradesco_credit_card_{suffix}"))
}

/// Parse a statement file, extracting its text through `source`.
pub fn parse_pdf(
    path: &Path,
    source: &impl TextSource,
    policy: DueDatePolicy,
    default_year: i32,
) -> Result<Statement> {
    let lines = source.statement_lines(path)?;
    parse_lines(&lines, policy, default_year)
}
