//! Line classification for semi-structured statement text.
//!
//! Expected shapes (Bradesco credit-card PDF text):
//!   transaction:  "06/03 PAG BOLETO BANCARIO 8.804,23- PROGRAMA DE FIDELIDADE"
//!   card header:  "JOHN DOE Cartão 4066 XXXX XXXX 3029"
//!   due date:     "Data de Vencimento: 15/01/2024" (keyword VENCIMENTO)
//!
//! Classification is line-local and stateless; callers keep whatever state
//! they need (e.g. the current card) across lines.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

fn transaction_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{2}/\d{2}\s+.+?\s+[\d.,]+-?").expect("transaction regex"))
}

fn card_header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Cartão\s+\d{4}\s+XXXX\s+XXXX\s+(\d{4})").expect("card header regex")
    })
}

fn due_date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{2}/\d{2}/\d{4})").expect("due date regex"))
}

/// True iff the line looks like a transaction: `dd/mm`, a description and a
/// trailing amount (`.` thousands, `,` decimals, optional `-` marker).
/// Text after the amount is allowed and ignored.
pub fn is_transaction_line(line: &str) -> bool {
    transaction_regex().is_match(line)
}

/// If the line is a masked card header, return the last 4 digits.
pub fn extract_card_suffix(line: &str) -> Option<&str> {
    card_header_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Scan lines for the statement due date: the first line containing the
/// VENCIMENTO keyword together with a `dd/mm/yyyy` token.
pub fn extract_due_date<S: AsRef<str>>(lines: &[S]) -> Option<NaiveDate> {
    for line in lines {
        let line = line.as_ref();
        if !line.to_uppercase().contains("VENCIMENTO") {
            continue;
        }
        if let Some(caps) = due_date_regex().captures(line) {
            if let Ok(date) = NaiveDate::parse_from_str(&caps[1], "%d/%m/%Y") {
                return Some(date);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_lines_match() {
        assert!(is_transaction_line(
            "06/03 PAG BOLETO BANCARIO 1.234,56- PROGRAMA DE FIDELIDADE"
        ));
        assert!(is_transaction_line("06/03 PAO DE ACUCAR-1783 R. DE JANEIRO 24,05"));
        assert!(is_transaction_line(
            "27/02 POSTO CARDEAL RIO DE JANEIR 123,45 * Pontuação consolidada de todos os cartões do Associado."
        ));
        assert!(is_transaction_line("06/03 PAGAMENTO FATURA 1.234,56-"));
    }

    #[test]
    fn test_non_transaction_lines_do_not_match() {
        assert!(!is_transaction_line("VISA INFINITE"));
        assert!(!is_transaction_line("Data de Vencimento Total da Fatura R$"));
        assert!(!is_transaction_line("JOHN DOE Cartão 9999 XXXX XXXX 1234"));
        assert!(!is_transaction_line(""));
    }

    #[test]
    fn test_extract_card_suffix() {
        assert_eq!(
            extract_card_suffix("JOHN DOE Cartão 4066 XXXX XXXX 3029"),
            Some("3029")
        );
        // masked number without the keyword is a summary row, not a header
        assert_eq!(
            extract_card_suffix("4066 XXXX XXXX 9999 99.999,99 99.999,99 99.999,99"),
            None
        );
    }

    #[test]
    fn test_extract_due_date() {
        let lines = vec![
            "VISA INFINITE".to_string(),
            "Data de Vencimento: 15/01/2024".to_string(),
            "Vencimento 20/02/2024".to_string(),
        ];
        assert_eq!(
            extract_due_date(&lines),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }

    #[test]
    fn test_extract_due_date_missing() {
        let lines = vec!["06/03 COMPRA TESTE 100,00".to_string()];
        assert_eq!(extract_due_date(&lines), None);
    }
}
