//! Export outcome.

use std::path::PathBuf;

use serde::Serialize;

use crate::model::HeaderSet;

/// Result of exporting one directory.
#[derive(Debug, Clone, Serialize)]
pub struct ExportResult {
    /// Number of PDF files found
    pub total: usize,

    /// Number of documents written as rows
    pub succeeded: usize,

    /// Spreadsheet that was written
    pub output_path: PathBuf,

    /// Columns used, without the file name column
    pub headers: HeaderSet,
}

impl ExportResult {
    /// Number of PDF files that could not be read.
    pub fn failed(&self) -> usize {
        self.total.saturating_sub(self.succeeded)
    }

    /// File name of the written spreadsheet.
    pub fn output_file_name(&self) -> String {
        self.output_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// One-line (or two-line, with failures) message for the user.
    pub fn summary(&self) -> String {
        let saved = format!(
            "Saved {} record(s) to {}",
            self.succeeded,
            self.output_file_name()
        );
        match self.failed() {
            0 => format!("{}.", saved),
            failed => format!("{}\n{} PDF file(s) failed to read.", saved, failed),
        }
    }
}
