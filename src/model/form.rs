//! Form-level types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Export value a checkbox carries when it is cleared.
pub const CHECKBOX_OFF: &str = "Off";

/// Conventional export value of a ticked checkbox.
pub const CHECKBOX_ON: &str = "Yes";

/// The form fields read from one PDF file.
///
/// Fields keep the order in which the document lists them, which is the
/// order used for columns when this document defines the header set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDocument {
    /// File name of the source PDF (no directory part)
    pub file_name: String,

    /// Field name to value, in document order
    pub fields: IndexMap<String, FieldValue>,
}

impl FormDocument {
    /// Create an empty form for the given file name.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Add a field.
    ///
    /// Names are unique within a document; a repeated name keeps the first
    /// value. Empty names are ignored.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        if name.is_empty() {
            return;
        }
        self.fields.entry(name).or_insert(value);
    }

    /// Look up a field by its fully-qualified name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Field names in document order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of named fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the form has no named fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Value of a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// Text, choice and signature fields
    Text(String),
    /// Button fields (checkboxes, radio buttons, push buttons)
    Checkbox(CheckboxState),
}

impl FieldValue {
    /// Build a text value, normalising carriage returns to line feeds.
    pub fn text(raw: impl AsRef<str>) -> Self {
        FieldValue::Text(normalize_line_breaks(raw.as_ref()))
    }

    /// Build a checkbox value from the field's raw export value.
    pub fn checkbox(raw: Option<&str>) -> Self {
        FieldValue::Checkbox(CheckboxState::from_export_value(raw))
    }
}

/// Logical state of a button field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckboxState {
    /// Value is `Yes` or empty
    Checked,
    /// Value is missing or `Off`
    Unchecked,
    /// Any other export value, kept verbatim
    Other(String),
}

impl CheckboxState {
    /// Classify a checkbox export value.
    ///
    /// # Example
    /// ```
    /// use formtab::model::CheckboxState;
    ///
    /// assert_eq!(CheckboxState::from_export_value(None), CheckboxState::Unchecked);
    /// assert_eq!(CheckboxState::from_export_value(Some("Off")), CheckboxState::Unchecked);
    /// assert_eq!(CheckboxState::from_export_value(Some("Yes")), CheckboxState::Checked);
    /// assert_eq!(CheckboxState::from_export_value(Some("")), CheckboxState::Checked);
    /// assert_eq!(
    ///     CheckboxState::from_export_value(Some("Married")),
    ///     CheckboxState::Other("Married".into())
    /// );
    /// ```
    pub fn from_export_value(raw: Option<&str>) -> Self {
        match raw {
            None | Some(CHECKBOX_OFF) => CheckboxState::Unchecked,
            Some(CHECKBOX_ON) | Some("") => CheckboxState::Checked,
            Some(other) => CheckboxState::Other(other.to_string()),
        }
    }

    /// Check if the box is cleared.
    pub fn is_unchecked(&self) -> bool {
        matches!(self, CheckboxState::Unchecked)
    }
}

/// Replace CR LF pairs and lone CRs with LF.
///
/// Multi-line PDF text fields store line breaks as `\r`; spreadsheet cells
/// expect `\n`.
pub fn normalize_line_breaks(s: &str) -> String {
    if !s.contains('\r') {
        return s.to_string();
    }
    s.replace("\r\n", "\n").replace('\r', "\n")
}
