//! extrato-ingest: statement ingestion (CSV / PDF text) and
//! institution-specific parsers.

pub mod parsers;
pub mod source;

pub use source::{PdfTextSource, TextSource};
