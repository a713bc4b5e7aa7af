//! Data types shared by the reader and the spreadsheet writer.
//!
//! A [`FormDocument`] is what one PDF turns into; a [`HeaderSet`] fixes the
//! spreadsheet columns for a whole export.

mod form;
mod header;

pub use form::{
    normalize_line_breaks, CheckboxState, FieldValue, FormDocument, CHECKBOX_OFF, CHECKBOX_ON,
};
pub use header::{HeaderPolicy, HeaderSet};
