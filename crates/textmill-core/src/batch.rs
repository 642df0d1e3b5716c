use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::backend::{BackendError, PdfBackend};

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convert every `.pdf` file in `books_dir` to a sibling-named `.txt`
/// file in `output_dir`.
///
/// The suffix match is case-sensitive: `report.PDF` is skipped. Entries
/// are processed in whatever order the filesystem lists them. Existing
/// output files are truncated and rewritten, so re-running on unchanged
/// input is idempotent. One confirmation line per converted file is
/// written to `out`.
///
/// Both directories must already exist; this is checked up front and a
/// missing directory fails the whole run before any file is touched.
/// An extraction failure on one file also aborts the rest of the batch,
/// leaving earlier outputs in place.
///
/// Returns the number of files converted. An input directory with no
/// `.pdf` files is a successful run that converts zero files.
pub fn process_directory(
    backend: &dyn PdfBackend,
    books_dir: &Path,
    output_dir: &Path,
    out: &mut dyn Write,
) -> Result<usize, BatchError> {
    if !books_dir.is_dir() {
        return Err(BatchError::MissingDirectory(books_dir.to_path_buf()));
    }
    if !output_dir.is_dir() {
        return Err(BatchError::MissingDirectory(output_dir.to_path_buf()));
    }

    let mut converted = 0;
    for entry in fs::read_dir(books_dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        let Some(stem) = name.strip_suffix(".pdf") else {
            continue;
        };

        let text = crate::extract_text(backend, &entry.path())?;
        let output_path = output_dir.join(format!("{stem}.txt"));
        fs::write(&output_path, &text)?;
        tracing::info!(
            input = %entry.path().display(),
            output = %output_path.display(),
            "converted PDF to text"
        );
        writeln!(out, "Processed {} -> {}", name, output_path.display())?;
        converted += 1;
    }
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::Path;

    /// Backend that maps a file name to a fixed page list. Unknown
    /// names fail the way a corrupt PDF would.
    struct MapBackend(HashMap<String, Vec<String>>);

    impl MapBackend {
        fn new(entries: &[(&str, &[&str])]) -> Self {
            let map = entries
                .iter()
                .map(|(name, pages)| {
                    let pages = pages.iter().map(|p| p.to_string()).collect();
                    (name.to_string(), pages)
                })
                .collect();
            Self(map)
        }
    }

    impl PdfBackend for MapBackend {
        fn page_texts(&self, path: &Path) -> Result<Vec<String>, BackendError> {
            let name = path.file_name().unwrap().to_str().unwrap();
            self.0
                .get(name)
                .cloned()
                .ok_or_else(|| BackendError::OpenError(format!("cannot open {name}")))
        }
    }

    fn setup_dirs() -> (tempfile::TempDir, PathBuf, PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let books = tmp.path().join("books");
        let output = tmp.path().join("output");
        fs::create_dir(&books).unwrap();
        fs::create_dir(&output).unwrap();
        (tmp, books, output)
    }

    #[test]
    fn converts_only_pdf_suffixed_files() {
        let (_tmp, books, output) = setup_dirs();
        fs::write(books.join("a.pdf"), b"").unwrap();
        fs::write(books.join("b.pdf"), b"").unwrap();
        fs::write(books.join("c.txt"), b"not a pdf").unwrap();
        fs::write(books.join("d.PDF"), b"wrong case").unwrap();

        let backend = MapBackend::new(&[
            ("a.pdf", &["alpha"][..]),
            ("b.pdf", &["beta"][..]),
        ]);
        let mut out = Vec::new();
        let count = process_directory(&backend, &books, &output, &mut out).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            fs::read_to_string(output.join("a.txt")).unwrap(),
            "alpha\n"
        );
        assert_eq!(fs::read_to_string(output.join("b.txt")).unwrap(), "beta\n");
        assert!(!output.join("c.txt").exists());
        assert!(!output.join("d.txt").exists());

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("a.pdf"));
        assert!(printed.contains("b.pdf"));
        assert!(!printed.contains("d.PDF"));
    }

    #[test]
    fn empty_pages_are_dropped_from_output_files() {
        let (_tmp, books, output) = setup_dirs();
        fs::write(books.join("book.pdf"), b"").unwrap();

        let backend = MapBackend::new(&[("book.pdf", &["Hello", "", "World"][..])]);
        let mut out = Vec::new();
        process_directory(&backend, &books, &output, &mut out).unwrap();

        assert_eq!(
            fs::read_to_string(output.join("book.txt")).unwrap(),
            "Hello\nWorld\n"
        );
    }

    #[test]
    fn missing_books_dir_fails_before_any_work() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("output");
        fs::create_dir(&output).unwrap();

        let backend = MapBackend::new(&[]);
        let mut out = Vec::new();
        let err = process_directory(
            &backend,
            &tmp.path().join("nope"),
            &output,
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, BatchError::MissingDirectory(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn missing_output_dir_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let books = tmp.path().join("books");
        fs::create_dir(&books).unwrap();
        fs::write(books.join("a.pdf"), b"").unwrap();

        let backend = MapBackend::new(&[("a.pdf", &["alpha"][..])]);
        let mut out = Vec::new();
        let missing = tmp.path().join("output");
        let err = process_directory(&backend, &books, &missing, &mut out).unwrap_err();
        assert!(matches!(err, BatchError::MissingDirectory(_)));
        assert!(!missing.exists());
        assert!(out.is_empty());
    }

    #[test]
    fn empty_directory_is_a_successful_run() {
        let (_tmp, books, output) = setup_dirs();
        let backend = MapBackend::new(&[]);
        let mut out = Vec::new();
        let count = process_directory(&backend, &books, &output, &mut out).unwrap();
        assert_eq!(count, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn rerun_overwrites_rather_than_appends() {
        let (_tmp, books, output) = setup_dirs();
        fs::write(books.join("a.pdf"), b"").unwrap();

        let backend = MapBackend::new(&[("a.pdf", &["alpha"][..])]);
        let mut out = Vec::new();
        process_directory(&backend, &books, &output, &mut out).unwrap();
        let first = fs::read(output.join("a.txt")).unwrap();
        process_directory(&backend, &books, &output, &mut out).unwrap();
        let second = fs::read(output.join("a.txt")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn extraction_failure_aborts_remaining_batch() {
        let (_tmp, books, output) = setup_dirs();
        // Only some of the inputs are known to the backend; the rest
        // fail like corrupt PDFs. Directory order is not guaranteed,
        // so just assert the run errored and never produced the
        // unknown file's output.
        fs::write(books.join("good.pdf"), b"").unwrap();
        fs::write(books.join("corrupt.pdf"), b"").unwrap();

        let backend = MapBackend::new(&[("good.pdf", &["fine"][..])]);
        let mut out = Vec::new();
        let err = process_directory(&backend, &books, &output, &mut out).unwrap_err();
        assert!(matches!(err, BatchError::Backend(_)));
        assert!(!output.join("corrupt.txt").exists());
    }
}
