//! Normalized output of statement parsers (institution-agnostic)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Classification of the source account behind a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Bank,
    CreditCard,
    Investment,
}

/// A single dated monetary movement.
///
/// Sign convention: charges/debits are positive, credits/refunds/payments
/// are negative (mirrors the trailing `-` marker on card statement lines).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    /// ISO currency code ("BRL", "USD", ...)
    pub currency: String,
    /// Source account or card, e.g. "bradesco_credit_card_3029"
    pub account_id: String,
    pub category: Option<String>,
    pub metadata: Option<BTreeMap<String, String>>,
}

/// One billing/account period's transactions for one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub account_id: String,
    pub account_type: AccountType,
    /// Institution's natural order, as encountered in the source.
    pub transactions: Vec<Transaction>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Statement {
    /// Build a statement, deriving start/end as min/max transaction date.
    /// Both stay `None` when there are no transactions.
    pub fn from_transactions(
        account_id: impl Into<String>,
        account_type: AccountType,
        transactions: Vec<Transaction>,
    ) -> Self {
        let start_date = transactions.iter().map(|t| t.date).min();
        let end_date = transactions.iter().map(|t| t.date).max();
        Statement {
            account_id: account_id.into(),
            account_type,
            transactions,
            start_date,
            end_date,
        }
    }
}

/// Transactions attributed to one card of a multi-card statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Last 4 digits of the masked card number
    pub card_number: String,
    pub transactions: Vec<Transaction>,
}

/// Partition a statement's flat transaction list into per-card groups.
///
/// The card suffix is the text after the last `_` of each account id (the
/// assembler embeds it there for multi-card sources). Cards come out in
/// first-seen order; transactions keep their encounter order within a card.
pub fn group_by_card(statement: &Statement) -> Vec<Card> {
    let mut cards: Vec<Card> = Vec::new();
    for transaction in &statement.transactions {
        let suffix = transaction
            .account_id
            .rsplit('_')
            .next()
            .unwrap_or(&transaction.account_id);
        match cards.iter_mut().find(|c| c.card_number == suffix) {
            Some(card) => card.transactions.push(transaction.clone()),
            None => cards.push(Card {
                card_number: suffix.to_string(),
                transactions: vec![transaction.clone()],
            }),
        }
    }
    cards
}
