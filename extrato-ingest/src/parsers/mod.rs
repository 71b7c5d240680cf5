pub mod bradesco_credit_card;
pub mod nubank_bank;
pub mod nubank_credit_card;
