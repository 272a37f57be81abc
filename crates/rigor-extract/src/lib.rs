//! Document text extraction.
//!
//! Turns uploaded document bytes into plain text for the audit pipeline.
//! PDF text comes from the pure-Rust `pdf-extract` backend; DOCX files are
//! opened as zip archives and the `word/document.xml` part is walked with a
//! streaming XML reader. Extraction failures are ordinary errors here; the
//! pipeline decides what to do with them (it downgrades to empty text).

mod docx;
mod pdf;

pub use docx::extract_docx_text;
pub use pdf::extract_pdf_text;

use thiserror::Error;

/// Document formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Detect a format from a filename, case-insensitively.
    ///
    /// Returns `None` for anything that is not `.pdf` or `.docx`; callers
    /// treat unknown formats as documents with no extractable text.
    pub fn from_filename(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(DocumentFormat::Pdf)
        } else if lower.ends_with(".docx") {
            Some(DocumentFormat::Docx)
        } else {
            None
        }
    }
}

/// Errors from document text extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),
    #[error("DOCX container error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("DOCX XML error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("DOCX archive has no word/document.xml part")]
    MissingDocumentXml,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Extract plain text from document bytes in the given format.
pub fn extract_text(data: &[u8], format: DocumentFormat) -> Result<String, ExtractError> {
    match format {
        DocumentFormat::Pdf => extract_pdf_text(data),
        DocumentFormat::Docx => extract_docx_text(data),
    }
}
