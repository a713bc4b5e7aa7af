//! Spreadsheet export of a directory of forms.
//!
//! The [`Exporter`] reads every PDF in a directory, one at a time and in
//! directory order, and writes one row per readable form:
//!
//! | row | column 0    | columns 1..=N                     |
//! |-----|-------------|-----------------------------------|
//! | 0   | `File`      | header names                      |
//! | 1.. | file name   | field value for each header       |
//!
//! Documents that cannot be read are counted and skipped.
//!
//! # Example
//!
//! ```no_run
//! use formtab::export::{ExportOptions, Exporter};
//!
//! let exporter = Exporter::new(ExportOptions::default());
//! let result = exporter.export("./forms", "./out")?;
//! println!("{}", result.summary());
//! # Ok::<(), formtab::Error>(())
//! ```

mod cell;
mod naming;
mod options;
mod result;
mod trigger;
mod writer;

pub use cell::{cell_value, CellValue, CHECKED_TEXT, UNCHECKED_TEXT};
pub use naming::{base_name, output_stem, unique_output_path, OUTPUT_EXTENSION};
pub use options::{ExportOptions, FILE_COLUMN_TITLE, TIMESTAMP_FORMAT};
pub use result::ExportResult;
pub use trigger::ExportTrigger;
pub use writer::{SheetWriter, XlsxSheetWriter};

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{Error, Result};
use crate::model::{FormDocument, HeaderSet};
use crate::parser::FormReader;
use crate::scan::list_pdf_files;

/// Progress notifications emitted during an export.
#[derive(Debug)]
pub enum ExportEvent<'a> {
    /// Input files were found
    Started {
        /// Number of PDF files to process
        total: usize,
    },
    /// A document was written as a row
    Converted {
        /// Source file
        path: &'a Path,
        /// Zero-based spreadsheet row
        row: u32,
    },
    /// A document could not be read and was skipped
    Failed {
        /// Source file
        path: &'a Path,
        /// Why it was skipped
        error: &'a Error,
    },
    /// The spreadsheet was written
    Saved {
        /// Output file
        path: &'a Path,
    },
}

/// Rows written by [`Exporter::write_table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    /// Documents written as rows
    pub rows: usize,
    /// Documents skipped because they could not be read
    pub failed: usize,
    /// Columns used
    pub headers: HeaderSet,
}

/// Exports directories of PDF forms to spreadsheets.
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    options: ExportOptions,
    reader: FormReader,
}

impl Exporter {
    /// Create an exporter.
    pub fn new(options: ExportOptions) -> Self {
        Self {
            options,
            reader: FormReader::new(),
        }
    }

    /// The options this exporter was built with.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Export every PDF form in `input_dir` to a new spreadsheet in
    /// `output_dir`.
    ///
    /// Fails with `Error::NoInputFiles` before anything is written when the
    /// directory has no PDF files. `output_dir` must already exist.
    pub fn export<P, Q>(&self, input_dir: P, output_dir: Q) -> Result<ExportResult>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        self.export_with_progress(input_dir, output_dir, |_| {})
    }

    /// Like [`Exporter::export`], reporting progress to `progress`.
    pub fn export_with_progress<P, Q, F>(
        &self,
        input_dir: P,
        output_dir: Q,
        mut progress: F,
    ) -> Result<ExportResult>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        F: FnMut(ExportEvent<'_>),
    {
        let input_dir = input_dir.as_ref();
        let output_dir = output_dir.as_ref();

        let files = list_pdf_files(input_dir)?;
        if !output_dir.is_dir() {
            return Err(Error::NotADirectory(output_dir.to_path_buf()));
        }
        progress(ExportEvent::Started { total: files.len() });

        let stem = output_stem(input_dir, &Local::now(), &self.options.timestamp_format);
        let output_path = unique_output_path(output_dir, &stem);

        let mut writer = XlsxSheetWriter::new().with_autofit(self.options.autofit);
        let table = self.write_table(&files, &mut writer, &mut progress)?;
        writer.save(&output_path)?;
        progress(ExportEvent::Saved { path: &output_path });

        let result = ExportResult {
            total: files.len(),
            succeeded: table.rows,
            output_path,
            headers: table.headers,
        };
        log::info!(
            "Exported {} of {} form(s) to {}",
            result.succeeded,
            result.total,
            result.output_path.display()
        );
        Ok(result)
    }

    /// Read `files` in order and write the header row plus one row per
    /// readable document to `writer`.
    ///
    /// Only `Error::DocumentUnreadable` is recovered from; any writer error
    /// aborts the table.
    pub fn write_table<W, F>(
        &self,
        files: &[PathBuf],
        writer: &mut W,
        mut progress: F,
    ) -> Result<TableSummary>
    where
        W: SheetWriter + ?Sized,
        F: FnMut(ExportEvent<'_>),
    {
        let mut headers = self.options.header_policy.preset().cloned();
        let mut row: u32 = 1;
        let mut failed = 0;

        for path in files {
            let doc = match self.reader.read_file(path) {
                Ok(doc) => doc,
                Err(e) if e.is_document_error() => {
                    log::warn!("{}", e);
                    failed += 1;
                    progress(ExportEvent::Failed { path, error: &e });
                    continue;
                }
                Err(e) => return Err(e),
            };

            let headers = headers.get_or_insert_with(|| {
                log::debug!("Columns taken from {}", doc.file_name);
                HeaderSet::from_document(&doc)
            });
            write_row(writer, row, &doc, headers)?;
            progress(ExportEvent::Converted { path, row });
            row += 1;
        }

        let headers = headers.unwrap_or_default();
        self.write_header_row(writer, &headers)?;

        Ok(TableSummary {
            rows: (row - 1) as usize,
            failed,
            headers,
        })
    }

    fn write_header_row<W: SheetWriter + ?Sized>(
        &self,
        writer: &mut W,
        headers: &HeaderSet,
    ) -> Result<()> {
        writer.write_cell(0, 0, &CellValue::plain(self.options.file_column_title.as_str()))?;
        for (col, name) in (1u16..).zip(headers) {
            writer.write_cell(0, col, &CellValue::plain(name.as_str()))?;
        }
        Ok(())
    }
}

fn write_row<W: SheetWriter + ?Sized>(
    writer: &mut W,
    row: u32,
    doc: &FormDocument,
    headers: &HeaderSet,
) -> Result<()> {
    writer.write_cell(row, 0, &CellValue::plain(doc.file_name.as_str()))?;
    for (col, name) in (1u16..).zip(headers) {
        writer.write_cell(row, col, &cell_value(doc.get(name)))?;
    }
    Ok(())
}
