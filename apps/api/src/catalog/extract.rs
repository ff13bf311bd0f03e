//! Document-text extraction boundary.
//!
//! Wraps `pdf-extract`. Extraction failures never reach the caller: they
//! collapse to empty text, which downstream segmentation answers with the
//! sample catalog.

use tracing::warn;

/// Extracts UTF-8 text from an in-memory PDF document.
/// Returns an empty string when the document cannot be read.
pub fn extract_text(data: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(data) {
        Ok(text) => text,
        Err(e) => {
            warn!("PDF text extraction failed: {e}");
            String::new()
        }
    }
}
