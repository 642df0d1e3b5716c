use std::path::Path;

pub mod backend;
pub mod batch;

pub use backend::{BackendError, PdfBackend};
pub use batch::{BatchError, process_directory};

/// Extract the full text of a PDF as a single string.
///
/// Pages are concatenated in page order; each page that yields text
/// contributes its text followed by exactly one newline. Pages with no
/// extractable text are skipped entirely and leave no trace in the
/// output — not even a blank line — so line positions in the result do
/// not correspond to page numbers. No trimming or normalization is
/// applied to what the backend returns.
///
/// A document whose every page is textless yields the empty string.
pub fn extract_text(backend: &dyn PdfBackend, path: &Path) -> Result<String, BackendError> {
    let pages = backend.page_texts(path)?;
    tracing::debug!(path = %path.display(), pages = pages.len(), "extracted page texts");

    let mut text = String::new();
    for page_text in &pages {
        if page_text.is_empty() {
            continue;
        }
        text.push_str(page_text);
        text.push('\n');
    }
    Ok(text)
}
