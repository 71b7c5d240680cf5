//! Collaborator seam for turning a document into ordered text lines.

use anyhow::{Result, anyhow};
use std::path::Path;

/// Supplies the ordered lines of a statement document, all pages
/// concatenated. Text extraction itself is a black box behind this trait;
/// any extractor that preserves page and line order will do.
pub trait TextSource {
    fn statement_lines(&self, path: &Path) -> Result<Vec<String>>;
}

/// Default extractor backed by the `pdf-extract` crate.
pub struct PdfTextSource;

impl TextSource for PdfTextSource {
    fn statement_lines(&self, path: &Path) -> Result<Vec<String>> {
        let text = pdf_extract::extract_text(path)
            .map_err(|e| anyhow!("extracting text from {}: {e}", path.display()))?;
        Ok(text.lines().map(str::to_string).collect())
    }
}
