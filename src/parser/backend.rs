//! PDF backend abstraction layer.
//!
//! Provides a trait-based interface for reading interactive form fields,
//! isolating the concrete PDF library (lopdf) from value interpretation.

use std::collections::HashSet;

use crate::error::{Error, Result};

/// Form field type from the `/FT` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// `/Btn`: checkbox, radio button or push button
    Button,
    /// `/Tx`: single or multi-line text
    Text,
    /// `/Ch`: list box or combo box
    Choice,
    /// `/Sig`: signature
    Signature,
    /// Missing or unrecognized field type
    Unknown,
}

impl FieldKind {
    /// Parse a field type name.
    pub fn from_name(name: &[u8]) -> Self {
        match name {
            b"Btn" => FieldKind::Button,
            b"Tx" => FieldKind::Text,
            b"Ch" => FieldKind::Choice,
            b"Sig" => FieldKind::Signature,
            _ => FieldKind::Unknown,
        }
    }
}

/// A field value (`/V`) as stored in the PDF.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Text string
    Text(String),
    /// Name object, e.g. a checkbox export value
    Name(String),
    /// Array of strings or names (multi-select choice fields)
    List(Vec<String>),
    /// Boolean object
    Bool(bool),
    /// Integer or real
    Number(String),
}

impl RawValue {
    /// String representation of the value.
    ///
    /// List entries are joined with line feeds so they stay readable in a
    /// single spreadsheet cell.
    pub fn as_display(&self) -> String {
        match self {
            RawValue::Text(s) | RawValue::Name(s) | RawValue::Number(s) => s.clone(),
            RawValue::List(items) => items.join("\n"),
            RawValue::Bool(b) => b.to_string(),
        }
    }
}

/// A terminal form field.
#[derive(Debug, Clone, PartialEq)]
pub struct RawField {
    /// Fully-qualified name (partial names joined with `.`)
    pub name: String,
    /// Field type, inherited from ancestors when absent
    pub kind: FieldKind,
    /// Field value, `None` when absent or null
    pub value: Option<RawValue>,
}

/// Abstract interface for reading a PDF's interactive form.
pub trait FormBackend {
    /// Return the named terminal fields in document order.
    ///
    /// Fails with `Error::NotAForm` when the document has no AcroForm.
    fn raw_fields(&self) -> Result<Vec<RawField>>;
}

/// Decode a PDF text string.
///
/// Handles UTF-16BE with BOM and UTF-8 with BOM, then plain UTF-8, and
/// falls back to Latin-1 for PDFDocEncoding.
pub fn decode_text_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&utf16);
    }

    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_string();
    }

    bytes.iter().map(|&b| b as char).collect()
}

// ---------------------------------------------------------------------------
// LopdfBackend: concrete implementation backed by lopdf
// ---------------------------------------------------------------------------

use lopdf::{Dictionary, Document as LopdfDocument, Object, ObjectId};

/// Deeper field trees than this are treated as malformed.
const MAX_FIELD_DEPTH: usize = 32;

/// Concrete [`FormBackend`] backed by `lopdf::Document`.
///
/// The parsed document lives as long as the backend value; dropping it
/// releases everything read from the file.
pub struct LopdfBackend {
    doc: LopdfDocument,
}

/// Properties a field passes down to its kids.
#[derive(Clone, Default)]
struct Inherited {
    name: String,
    kind: Option<Vec<u8>>,
    value: Option<Object>,
}

impl LopdfBackend {
    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data)?;
        Ok(Self::from_document(doc))
    }

    /// Wrap an already parsed document.
    pub fn from_document(doc: LopdfDocument) -> Self {
        Self { doc }
    }

    /// Check if the document is encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.doc.is_encrypted()
    }

    /// Follow an indirect reference, if any.
    fn resolve<'a>(&'a self, obj: &'a Object) -> Result<&'a Object> {
        match obj {
            Object::Reference(id) => Ok(self.doc.get_object(*id)?),
            other => Ok(other),
        }
    }

    fn acroform(&self) -> Result<&Dictionary> {
        let root = self
            .doc
            .trailer
            .get(b"Root")
            .map_err(|_| Error::PdfParse("Missing document catalog".to_string()))?;
        let catalog = match self.resolve(root)? {
            Object::Dictionary(dict) => dict,
            _ => return Err(Error::PdfParse("Catalog is not a dictionary".to_string())),
        };
        let acroform = catalog.get(b"AcroForm").map_err(|_| Error::NotAForm)?;
        match self.resolve(acroform)? {
            Object::Dictionary(dict) => Ok(dict),
            _ => Err(Error::NotAForm),
        }
    }

    /// Walk one node of the field tree.
    fn collect(
        &self,
        node: &Object,
        parent: &Inherited,
        depth: usize,
        visited: &mut HashSet<ObjectId>,
        out: &mut Vec<RawField>,
    ) -> Result<()> {
        if depth > MAX_FIELD_DEPTH {
            return Err(Error::PdfParse("Form field tree is too deep".to_string()));
        }
        if let Object::Reference(id) = node {
            if !visited.insert(*id) {
                return Ok(());
            }
        }
        let dict = match self.resolve(node)? {
            Object::Dictionary(dict) => dict,
            _ => return Ok(()),
        };

        let partial = self.text_entry(dict, b"T");
        let name = match (parent.name.is_empty(), partial) {
            (_, None) => parent.name.clone(),
            (true, Some(partial)) => partial,
            (false, Some(partial)) => format!("{}.{}", parent.name, partial),
        };
        let inherited = Inherited {
            name,
            kind: self.name_entry(dict, b"FT").or_else(|| parent.kind.clone()),
            value: self
                .value_entry(dict)
                .cloned()
                .or_else(|| parent.value.clone()),
        };

        // Kids carrying their own /T are child fields; kids without one are
        // just the widget annotations of this field.
        let child_fields: Vec<&Object> = self
            .kids(dict)
            .into_iter()
            .filter(|kid| {
                matches!(self.resolve(kid), Ok(Object::Dictionary(d)) if d.has(b"T"))
            })
            .collect();

        if !child_fields.is_empty() {
            for kid in child_fields {
                self.collect(kid, &inherited, depth + 1, visited, out)?;
            }
            return Ok(());
        }

        if inherited.name.is_empty() {
            log::debug!("Skipping unnamed form field");
            return Ok(());
        }

        let kind = inherited
            .kind
            .as_deref()
            .map(FieldKind::from_name)
            .unwrap_or(FieldKind::Unknown);
        let value = match &inherited.value {
            Some(obj) => self.raw_value(obj),
            None => None,
        };
        log::debug!("Field {:?} ({:?}) = {:?}", inherited.name, kind, value);

        out.push(RawField {
            name: inherited.name,
            kind,
            value,
        });
        Ok(())
    }

    fn kids<'a>(&'a self, dict: &'a Dictionary) -> Vec<&'a Object> {
        match dict.get(b"Kids").ok().map(|k| self.resolve(k)) {
            Some(Ok(Object::Array(kids))) => kids.iter().collect(),
            _ => Vec::new(),
        }
    }

    fn value_entry<'a>(&'a self, dict: &'a Dictionary) -> Option<&'a Object> {
        let value = self.resolve(dict.get(b"V").ok()?).ok()?;
        match value {
            Object::Null => None,
            other => Some(other),
        }
    }

    fn text_entry(&self, dict: &Dictionary, key: &[u8]) -> Option<String> {
        match self.resolve(dict.get(key).ok()?).ok()? {
            Object::String(bytes, _) => Some(decode_text_string(bytes)),
            _ => None,
        }
    }

    fn name_entry(&self, dict: &Dictionary, key: &[u8]) -> Option<Vec<u8>> {
        match self.resolve(dict.get(key).ok()?).ok()? {
            Object::Name(name) => Some(name.clone()),
            _ => None,
        }
    }

    fn raw_value(&self, obj: &Object) -> Option<RawValue> {
        match self.resolve(obj).ok()? {
            Object::String(bytes, _) => Some(RawValue::Text(decode_text_string(bytes))),
            Object::Name(name) => Some(RawValue::Name(decode_text_string(name))),
            Object::Boolean(b) => Some(RawValue::Bool(*b)),
            Object::Integer(i) => Some(RawValue::Number(i.to_string())),
            Object::Real(r) => Some(RawValue::Number(r.to_string())),
            // Long text values may be stored as a text stream
            Object::Stream(stream) => {
                let content = if stream.dict.has(b"Filter") {
                    stream.decompressed_content().ok()?
                } else {
                    stream.content.clone()
                };
                Some(RawValue::Text(decode_text_string(&content)))
            }
            Object::Array(items) => Some(RawValue::List(
                items
                    .iter()
                    .filter_map(|item| match self.raw_value(item)? {
                        RawValue::List(_) => None,
                        other => Some(other.as_display()),
                    })
                    .collect(),
            )),
            _ => None,
        }
    }
}

impl FormBackend for LopdfBackend {
    fn raw_fields(&self) -> Result<Vec<RawField>> {
        let acroform = self.acroform()?;
        let fields = match acroform.get(b"Fields").ok().map(|f| self.resolve(f)) {
            Some(Ok(Object::Array(fields))) => fields,
            Some(Err(e)) => return Err(e),
            _ => return Ok(Vec::new()),
        };

        let mut out = Vec::with_capacity(fields.len());
        let mut visited = HashSet::new();
        let root = Inherited::default();
        for field in fields {
            self.collect(field, &root, 0, &mut visited, &mut out)?;
        }
        Ok(out)
    }
}

impl From<LopdfDocument> for LopdfBackend {
    fn from(doc: LopdfDocument) -> Self {
        Self::from_document(doc)
    }
}
