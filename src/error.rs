//! Error types for formtab.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for formtab operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading forms or writing spreadsheets.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input directory contains no PDF files.
    #[error("No PDF file found in {}", .0.display())]
    NoInputFiles(PathBuf),

    /// A path that should be a directory is not one.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// One PDF could not be read as a form.
    ///
    /// Exports recover from this per document and only count it.
    #[error("Failed to read form from {}: {source}", .path.display())]
    DocumentUnreadable {
        /// The offending file.
        path: PathBuf,
        /// What went wrong while opening or walking the form.
        #[source]
        source: Box<Error>,
    },

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted and cannot be opened.
    #[error("Document is encrypted")]
    Encrypted,

    /// The PDF has no interactive form.
    #[error("Document has no interactive form")]
    NotAForm,

    /// Error from the spreadsheet writer.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    /// Settings could not be loaded or stored.
    #[error("Settings error: {0}")]
    Settings(String),

    /// An export is already running on this trigger.
    #[error("An export is already in progress")]
    ExportInProgress,
}

impl Error {
    /// Wrap a per-document failure.
    pub fn unreadable(path: impl Into<PathBuf>, source: Error) -> Self {
        Error::DocumentUnreadable {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Whether this error only concerns a single document of a batch.
    pub fn is_document_error(&self) -> bool {
        matches!(self, Error::DocumentUnreadable { .. })
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Settings(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoInputFiles(PathBuf::from("forms"));
        assert_eq!(err.to_string(), "No PDF file found in forms");

        let err = Error::unreadable("a.pdf", Error::NotAForm);
        assert_eq!(
            err.to_string(),
            "Failed to read form from a.pdf: Document has no interactive form"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_document_error());
    }

    #[test]
    fn test_document_error_source() {
        use std::error::Error as _;

        let err = Error::unreadable("b.pdf", Error::Encrypted);
        assert!(err.is_document_error());
        assert_eq!(err.source().unwrap().to_string(), "Document is encrypted");
    }
}
