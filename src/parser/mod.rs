//! PDF form parsing module.

mod backend;
mod form_reader;

pub use backend::{
    decode_text_string, FieldKind, FormBackend, LopdfBackend, RawField, RawValue,
};
pub use form_reader::FormReader;
