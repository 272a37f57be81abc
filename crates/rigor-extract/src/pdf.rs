//! PDF text extraction via the pure-Rust `pdf-extract` backend.

use crate::ExtractError;

/// Extract text from PDF bytes.
///
/// Page texts arrive concatenated, with the backend inserting newlines at
/// page and line boundaries. Encrypted or malformed files surface as
/// [`ExtractError::Pdf`].
pub fn extract_pdf_text(data: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractError::Pdf(e.to_string()))
}
