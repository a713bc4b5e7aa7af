//! Builders for small AcroForm PDFs used by the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use lopdf::{dictionary, Dictionary, Document, Object, StringFormat};

/// A text field with a value.
pub fn text_field(name: &str, value: &str) -> Object {
    Object::Dictionary(dictionary! {
        "FT" => "Tx",
        "T" => Object::string_literal(name),
        "V" => Object::string_literal(value),
    })
}

/// A text field with a UTF-16BE encoded value.
pub fn utf16_text_field(name: &str, value: &str) -> Object {
    let mut bytes = vec![0xFE, 0xFF];
    for unit in value.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::Dictionary(dictionary! {
        "FT" => "Tx",
        "T" => Object::string_literal(name),
        "V" => Object::String(bytes, StringFormat::Hexadecimal),
    })
}

/// A checkbox; `None` leaves out `/V`.
pub fn checkbox(name: &str, state: Option<&str>) -> Object {
    let mut dict = dictionary! {
        "FT" => "Btn",
        "T" => Object::string_literal(name),
    };
    if let Some(state) = state {
        dict.set("V", Object::Name(state.as_bytes().to_vec()));
    }
    Object::Dictionary(dict)
}

/// A field with children.
pub fn parent_field(name: &str, kids: Vec<Object>) -> Object {
    Object::Dictionary(dictionary! {
        "T" => Object::string_literal(name),
        "Kids" => kids,
    })
}

fn base_document() -> (Document, Dictionary) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(612),
            Object::Integer(792),
        ],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => Object::Integer(1),
        }),
    );
    let catalog = dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    };
    (doc, catalog)
}

fn finish(mut doc: Document, catalog: Dictionary) -> Vec<u8> {
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", catalog_id);
    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("save test PDF");
    buf
}

fn form_document(fields: Vec<Object>) -> (Document, Dictionary) {
    let (mut doc, mut catalog) = base_document();
    let refs: Vec<Object> = fields
        .into_iter()
        .map(|field| Object::Reference(doc.add_object(field)))
        .collect();
    let acroform_id = doc.add_object(dictionary! { "Fields" => refs });
    catalog.set("AcroForm", acroform_id);
    (doc, catalog)
}

/// A one-page PDF whose AcroForm holds `fields`, each as its own object.
pub fn form_pdf(fields: Vec<Object>) -> Vec<u8> {
    let (doc, catalog) = form_document(fields);
    finish(doc, catalog)
}

/// A form PDF whose trailer declares standard security handler encryption.
///
/// The field strings are left as written, so a reader that ignored the
/// `/Encrypt` entry would treat them as ciphertext.
pub fn encrypted_form_pdf(fields: Vec<Object>) -> Vec<u8> {
    let (mut doc, catalog) = form_document(fields);
    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => Object::Integer(1),
        "R" => Object::Integer(2),
        "Length" => Object::Integer(40),
        "P" => Object::Integer(-4),
        "O" => Object::String(vec![0x11; 32], StringFormat::Hexadecimal),
        "U" => Object::String(vec![0x22; 32], StringFormat::Hexadecimal),
    });
    doc.trailer.set("Encrypt", encrypt_id);
    doc.trailer.set(
        "ID",
        vec![
            Object::String(vec![0x33; 16], StringFormat::Hexadecimal),
            Object::String(vec![0x33; 16], StringFormat::Hexadecimal),
        ],
    );
    finish(doc, catalog)
}

/// A one-page PDF without an interactive form.
pub fn plain_pdf() -> Vec<u8> {
    let (doc, catalog) = base_document();
    finish(doc, catalog)
}

/// Write a form PDF into `dir` and return its path.
pub fn write_form(dir: &Path, file_name: &str, fields: Vec<Object>) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, form_pdf(fields)).expect("write test PDF");
    path
}

/// Write a file that is named like a PDF but is not one.
pub fn write_garbage(dir: &Path, file_name: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, b"this is not a pdf file").expect("write garbage");
    path
}
