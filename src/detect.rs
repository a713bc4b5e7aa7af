//! PDF file recognition by extension and header.

use crate::error::{Error, Result};
use std::path::Path;

/// File extension matched by the input scan (compared case-insensitively).
pub const PDF_EXTENSION: &str = "pdf";

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Readers accept the header anywhere in the first kilobyte.
const HEADER_SEARCH_WINDOW: usize = 1024;

const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Check whether a path ends in `.pdf`, ignoring case.
///
/// # Example
/// ```
/// use formtab::detect::has_pdf_extension;
///
/// assert!(has_pdf_extension("intake.PDF"));
/// assert!(!has_pdf_extension("intake.pdf.bak"));
/// ```
pub fn has_pdf_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(PDF_EXTENSION))
}

/// Locate the PDF header in `data` and return the declared version.
///
/// Returns `Error::UnknownFormat` when no `%PDF-x.y` marker appears in the
/// first kilobyte, which is how text files or images renamed to `.pdf` are
/// rejected before they reach the parser.
pub fn sniff_version(data: &[u8]) -> Result<String> {
    let window = &data[..data.len().min(HEADER_SEARCH_WINDOW)];
    let start = window
        .windows(PDF_MAGIC.len())
        .position(|w| w == PDF_MAGIC)
        .ok_or(Error::UnknownFormat)?;

    let version_start = start + PDF_MAGIC.len();
    let version_bytes = data
        .get(version_start..version_start + VERSION_LEN)
        .ok_or(Error::UnknownFormat)?;
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(&version) {
        return Err(Error::UnknownFormat);
    }
    Ok(version)
}

fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_case_insensitive() {
        assert!(has_pdf_extension("a.pdf"));
        assert!(has_pdf_extension("dir/B.Pdf"));
        assert!(!has_pdf_extension("notes.txt"));
        assert!(!has_pdf_extension("pdf"));
    }

    #[test]
    fn test_sniff_valid_header() {
        let data = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3";
        assert_eq!(sniff_version(data).unwrap(), "1.7");
    }

    #[test]
    fn test_sniff_header_after_garbage() {
        let mut data = b"\x00\x00junk from a scanner\n".to_vec();
        data.extend_from_slice(b"%PDF-1.4\n");
        assert_eq!(sniff_version(&data).unwrap(), "1.4");
    }

    #[test]
    fn test_sniff_rejects_other_formats() {
        assert!(matches!(
            sniff_version(b"<!DOCTYPE html>"),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(sniff_version(b"%PDF-"), Err(Error::UnknownFormat)));
        assert!(matches!(sniff_version(b"%PDF-x.y"), Err(Error::UnknownFormat)));
    }
}
