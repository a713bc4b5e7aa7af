//! Export options and configuration.

use crate::model::{HeaderPolicy, HeaderSet};

/// Title of the first column, which holds the source file name.
pub const FILE_COLUMN_TITLE: &str = "File";

/// Timestamp appended to output file names (`yyyyMMdd-HHmmss`).
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Options for exporting a directory of forms to a spreadsheet.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// How the columns are chosen
    pub header_policy: HeaderPolicy,

    /// Title of the file name column
    pub file_column_title: String,

    /// chrono format string for the output file name timestamp
    pub timestamp_format: String,

    /// Fit column widths to their content before saving
    pub autofit: bool,
}

impl ExportOptions {
    /// Create new export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header policy.
    pub fn with_header_policy(mut self, policy: HeaderPolicy) -> Self {
        self.header_policy = policy;
        self
    }

    /// Use a fixed header set instead of the first document's fields.
    pub fn with_headers(mut self, headers: HeaderSet) -> Self {
        self.header_policy = HeaderPolicy::Fixed(headers);
        self
    }

    /// Set the title of the file name column.
    pub fn with_file_column_title(mut self, title: impl Into<String>) -> Self {
        self.file_column_title = title.into();
        self
    }

    /// Set the timestamp format used in output file names.
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Enable or disable column autofit.
    pub fn with_autofit(mut self, autofit: bool) -> Self {
        self.autofit = autofit;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            header_policy: HeaderPolicy::FirstDocument,
            file_column_title: FILE_COLUMN_TITLE.to_string(),
            timestamp_format: TIMESTAMP_FORMAT.to_string(),
            autofit: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_options_builder() {
        let options = ExportOptions::new()
            .with_headers(HeaderSet::new(["a", "b"]))
            .with_file_column_title("Source")
            .with_autofit(false);

        assert_eq!(
            options.header_policy,
            HeaderPolicy::Fixed(HeaderSet::new(["a", "b"]))
        );
        assert_eq!(options.file_column_title, "Source");
        assert!(!options.autofit);
    }

    #[test]
    fn test_header_policy_and_timestamp() {
        let options = ExportOptions::new()
            .with_headers(HeaderSet::new(["a"]))
            .with_header_policy(HeaderPolicy::FirstDocument)
            .with_timestamp_format("%Y");

        assert_eq!(options.header_policy, HeaderPolicy::FirstDocument);
        assert_eq!(options.timestamp_format, "%Y");
    }

    #[test]
    fn test_default_options() {
        let options = ExportOptions::default();
        assert_eq!(options.header_policy, HeaderPolicy::FirstDocument);
        assert_eq!(options.file_column_title, "File");
        assert_eq!(options.timestamp_format, "%Y%m%d-%H%M%S");
        assert!(options.autofit);
    }
}
