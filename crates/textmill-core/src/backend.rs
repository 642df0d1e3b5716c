use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF text extraction backends.
///
/// Implementors return one string per page, in page order, with an
/// empty string for pages that carry no extractable text (pure-image
/// pages, blank pages). The policy for flattening pages into a single
/// document string lives in [`crate::extract_text`], not here.
pub trait PdfBackend: Send + Sync {
    /// Extract the text of every page of a PDF file, in page order.
    fn page_texts(&self, path: &Path) -> Result<Vec<String>, BackendError>;
}
