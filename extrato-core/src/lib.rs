//! extrato-core: normalized statement types and the shared line-pattern core
//! (classifier, transaction parser, year resolver, assembler).

pub mod assemble;
pub mod classify;
pub mod date;
pub mod parse;
pub mod types;

pub use assemble::{AssembleOptions, assemble};
pub use classify::{extract_card_suffix, extract_due_date, is_transaction_line};
pub use date::resolve_year;
pub use parse::{parse_amount, parse_transaction};
pub use types::{AccountType, Card, Statement, Transaction, group_by_card};
