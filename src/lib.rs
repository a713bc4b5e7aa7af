//! # formtab
//!
//! Collect the values of PDF form fields from a folder of filled-in forms
//! into a single Excel spreadsheet.
//!
//! Each PDF becomes one row. The first column holds the file name; the
//! remaining columns are the form's field names.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> formtab::Result<()> {
//!     let result = formtab::export("./intake-forms", "./reports")?;
//!     println!("{}", result.summary());
//!     Ok(())
//! }
//! ```
//!
//! ## Cell values
//!
//! - Text fields are written as-is, with `\r` line breaks turned into `\n`.
//! - Checkboxes become `Y` when ticked and a red `N` when cleared. A
//!   checkbox with a custom export value shows that value.
//! - A field a document does not have leaves its cell empty.
//!
//! ## Columns
//!
//! By default the columns are the fields of the first PDF that can be read
//! ([`HeaderPolicy::FirstDocument`]). A fixed list can be passed instead
//! with [`ExportOptions::with_headers`].

pub mod config;
pub mod detect;
pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod scan;

// Re-export commonly used types
pub use config::{ExportFormat, JsonSettingsStore, Settings, SettingsStore};
pub use error::{Error, Result};
pub use export::{
    CellValue, ExportEvent, ExportOptions, ExportResult, ExportTrigger, Exporter, SheetWriter,
    XlsxSheetWriter,
};
pub use model::{CheckboxState, FieldValue, FormDocument, HeaderPolicy, HeaderSet};
pub use parser::{FormBackend, FormReader, LopdfBackend};
pub use scan::{list_pdf_files, scan_headers};

use std::path::Path;

/// Read the form fields of a PDF file.
///
/// # Example
///
/// ```no_run
/// let form = formtab::read_form("intake.pdf")?;
/// for (name, value) in &form.fields {
///     println!("{name}: {value:?}");
/// }
/// # Ok::<(), formtab::Error>(())
/// ```
pub fn read_form<P: AsRef<Path>>(path: P) -> Result<FormDocument> {
    FormReader::new().read_file(path)
}

/// Read the form fields of an in-memory PDF.
pub fn read_form_bytes(file_name: &str, data: &[u8]) -> Result<FormDocument> {
    FormReader::new().read_bytes(file_name, data)
}

/// Export every PDF form in `input_dir` to a new spreadsheet in
/// `output_dir`, with default options.
///
/// The file is named `<input dir name>-<yyyyMMdd-HHmmss>.xlsx`.
pub fn export<P, Q>(input_dir: P, output_dir: Q) -> Result<ExportResult>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    Exporter::new(ExportOptions::default()).export(input_dir, output_dir)
}

/// Export with custom options.
///
/// # Example
///
/// ```no_run
/// use formtab::{export_with_options, ExportOptions, HeaderSet};
///
/// let options = ExportOptions::new().with_headers(HeaderSet::parse_list("name, dob, consent"));
/// let result = export_with_options("./forms", "./out", &options)?;
/// assert_eq!(result.headers.len(), 3);
/// # Ok::<(), formtab::Error>(())
/// ```
pub fn export_with_options<P, Q>(
    input_dir: P,
    output_dir: Q,
    options: &ExportOptions,
) -> Result<ExportResult>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    Exporter::new(options.clone()).export(input_dir, output_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_read_form_bytes_empty_data() {
        let result = read_form_bytes("empty.pdf", &[]);
        assert!(matches!(result, Err(Error::DocumentUnreadable { .. })));
    }

    #[test]
    fn test_read_form_bytes_header_only() {
        // A header alone is not a parseable document
        let result = read_form_bytes("stub.pdf", b"%PDF-1.7\n%%EOF\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_read_form_missing_file() {
        let result = read_form("/definitely/not/here.pdf");
        match result {
            Err(Error::DocumentUnreadable { source, .. }) => {
                assert!(matches!(*source, Error::Io(_)));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_export_rejects_missing_input() {
        let out = tempfile::TempDir::new().unwrap();
        let result = export(out.path().join("missing"), out.path());
        assert!(matches!(result, Err(Error::NotADirectory(_))));
    }
}
