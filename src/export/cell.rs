//! Display transform from field values to spreadsheet cells.

use crate::model::{CheckboxState, FieldValue};

/// Cell text for a ticked checkbox.
pub const CHECKED_TEXT: &str = "Y";

/// Cell text for a cleared checkbox.
pub const UNCHECKED_TEXT: &str = "N";

/// What gets written into one spreadsheet cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellValue {
    /// Cell text
    pub text: String,

    /// Render in the error colour (cleared checkboxes)
    pub emphasis: bool,
}

impl CellValue {
    /// An empty cell.
    pub fn blank() -> Self {
        Self::default()
    }

    /// A cell with default styling.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: false,
        }
    }

    /// A cell rendered in the error colour.
    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: true,
        }
    }

    /// Check if there is nothing to write.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty() && !self.emphasis
    }

    /// Check if the text spans several lines.
    pub fn is_multiline(&self) -> bool {
        self.text.contains('\n')
    }
}

/// Format a field for display.
///
/// A field the document lacks gives a blank cell.
pub fn cell_value(field: Option<&FieldValue>) -> CellValue {
    match field {
        None => CellValue::blank(),
        Some(FieldValue::Text(text)) => CellValue::plain(text.as_str()),
        Some(FieldValue::Checkbox(CheckboxState::Checked)) => CellValue::plain(CHECKED_TEXT),
        Some(FieldValue::Checkbox(CheckboxState::Unchecked)) => {
            CellValue::emphasized(UNCHECKED_TEXT)
        }
        Some(FieldValue::Checkbox(CheckboxState::Other(value))) => CellValue::plain(value.as_str()),
    }
}
