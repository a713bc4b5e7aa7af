//! Spreadsheet column headers.

use super::FormDocument;
use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free list of field names used as columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderSet {
    names: Vec<String>,
}

impl HeaderSet {
    /// Build a header set, dropping empty and repeated names.
    ///
    /// The first occurrence of a name decides its column.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for name in names {
            let name = name.into();
            if !name.is_empty() && !set.contains(&name) {
                set.names.push(name);
            }
        }
        set
    }

    /// Headers of a single document, in its field order.
    pub fn from_document(doc: &FormDocument) -> Self {
        Self::new(doc.field_names())
    }

    /// Parse a comma separated header list, trimming whitespace.
    pub fn parse_list(list: &str) -> Self {
        Self::new(list.split(',').map(str::trim))
    }

    /// Check if a column exists for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Iterate over header names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of field columns (the file name column is not counted).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if there are no field columns.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<'a> IntoIterator for &'a HeaderSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

/// How the header set of an export is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HeaderPolicy {
    /// Use the fields of the first document that reads successfully.
    ///
    /// Fields that only appear in later documents get no column.
    #[default]
    FirstDocument,

    /// Use a caller-supplied header set for every document.
    Fixed(HeaderSet),
}

impl HeaderPolicy {
    /// The headers known before any document is read.
    pub fn preset(&self) -> Option<&HeaderSet> {
        match self {
            HeaderPolicy::FirstDocument => None,
            HeaderPolicy::Fixed(headers) => Some(headers),
        }
    }
}
