//! Input directory scanning.

use std::fs;
use std::path::{Path, PathBuf};

use crate::detect::has_pdf_extension;
use crate::error::{Error, Result};
use crate::model::HeaderSet;
use crate::parser::FormReader;

/// List the PDF files directly inside `dir`.
///
/// The scan is not recursive and keeps the order in which the file system
/// returns entries. Fails with `Error::NoInputFiles` when nothing matches.
///
/// # Example
///
/// ```no_run
/// use formtab::scan::list_pdf_files;
///
/// for path in list_pdf_files("./forms")? {
///     println!("{}", path.display());
/// }
/// # Ok::<(), formtab::Error>(())
/// ```
pub fn list_pdf_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if has_pdf_extension(&path) && path.is_file() {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(Error::NoInputFiles(dir.to_path_buf()));
    }
    log::debug!("Found {} PDF file(s) in {}", files.len(), dir.display());
    Ok(files)
}

/// Find the headers an export of `dir` would use by default.
///
/// Returns the first readable document's path with its field names, or
/// `None` when no file in the directory can be read as a form. The result
/// can be edited and passed back as `HeaderPolicy::Fixed`.
pub fn scan_headers<P: AsRef<Path>>(dir: P) -> Result<Option<(PathBuf, HeaderSet)>> {
    let reader = FormReader::new();
    for path in list_pdf_files(dir)? {
        match reader.read_file(&path) {
            Ok(doc) => return Ok(Some((path, HeaderSet::from_document(&doc)))),
            Err(e) if e.is_document_error() => log::warn!("{}", e),
            Err(e) => return Err(e),
        }
    }
    Ok(None)
}
