//! Form reader: one PDF in, one [`FormDocument`] out.

use std::fs;
use std::path::Path;

use crate::detect::sniff_version;
use crate::error::{Error, Result};
use crate::model::{FieldValue, FormDocument};

use super::backend::{FieldKind, FormBackend, LopdfBackend, RawField, RawValue};

/// Reads the interactive form of PDF files.
///
/// Every failure is reported as `Error::DocumentUnreadable` so that batch
/// callers can count it and move on.
#[derive(Debug, Clone, Default)]
pub struct FormReader {
    _private: (),
}

impl FormReader {
    /// Create a new reader.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Read the form of a PDF file.
    ///
    /// The document is parsed into memory and dropped before this returns,
    /// whether or not reading succeeded.
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<FormDocument> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let data = fs::read(path).map_err(|e| Error::unreadable(path, e.into()))?;
        self.read_bytes(file_name, &data).map_err(|e| match e {
            Error::DocumentUnreadable { source, .. } => Error::DocumentUnreadable {
                path: path.to_path_buf(),
                source,
            },
            other => Error::unreadable(path, other),
        })
    }

    /// Read the form of an in-memory PDF.
    ///
    /// `file_name` is only used to label the resulting document.
    pub fn read_bytes(&self, file_name: impl Into<String>, data: &[u8]) -> Result<FormDocument> {
        let file_name = file_name.into();
        let load = || -> Result<LopdfBackend> {
            sniff_version(data)?;
            let backend = LopdfBackend::load_bytes(data)?;
            // Field strings of an encrypted file are ciphertext
            if backend.is_encrypted() {
                return Err(Error::Encrypted);
            }
            Ok(backend)
        };

        let backend = load().map_err(|e| Error::unreadable(&file_name, e))?;
        self.read_backend(file_name.clone(), &backend)
            .map_err(|e| Error::unreadable(&file_name, e))
    }

    /// Read the form through any [`FormBackend`].
    pub fn read_backend<B: FormBackend>(
        &self,
        file_name: impl Into<String>,
        backend: &B,
    ) -> Result<FormDocument> {
        let mut doc = FormDocument::new(file_name);
        for field in backend.raw_fields()? {
            let value = field_value(&field);
            doc.insert(field.name, value);
        }
        log::debug!("Read {} field(s) from {}", doc.len(), doc.file_name);
        Ok(doc)
    }
}

/// Interpret a raw field according to its kind.
fn field_value(field: &RawField) -> FieldValue {
    match field.kind {
        FieldKind::Button => match &field.value {
            Some(RawValue::Bool(true)) => FieldValue::checkbox(Some("")),
            Some(RawValue::Bool(false)) => FieldValue::checkbox(None),
            Some(value) => FieldValue::checkbox(Some(&value.as_display())),
            None => FieldValue::checkbox(None),
        },
        _ => FieldValue::text(
            field
                .value
                .as_ref()
                .map(RawValue::as_display)
                .unwrap_or_default(),
        ),
    }
}
