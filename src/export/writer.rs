//! Spreadsheet writers.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, Worksheet};

use super::cell::CellValue;
use crate::error::Result;

/// Longest string Excel accepts in a single cell.
const MAX_CELL_CHARS: usize = 32_767;

/// Sink for the cells of one export.
///
/// Rows and columns are zero-based; row 0 is the header row.
pub trait SheetWriter {
    /// Write one cell. Blank values may be skipped by the implementation.
    fn write_cell(&mut self, row: u32, col: u16, value: &CellValue) -> Result<()>;

    /// Apply sheet-wide styling and write the spreadsheet to `path`.
    fn save(&mut self, path: &Path) -> Result<()>;
}

/// [`SheetWriter`] producing an `.xlsx` file with `rust_xlsxwriter`.
///
/// Every cell is top-aligned, multi-line cells wrap, and emphasized cells
/// use a red font. The workbook is held until the writer is dropped.
pub struct XlsxSheetWriter {
    workbook: Workbook,
    worksheet: Option<Worksheet>,
    plain: Format,
    wrapped: Format,
    emphasized: Format,
    last_col: Option<u16>,
    autofit: bool,
}

impl XlsxSheetWriter {
    /// Create a writer with an empty worksheet.
    pub fn new() -> Self {
        let top = Format::new().set_align(FormatAlign::Top);
        Self {
            workbook: Workbook::new(),
            worksheet: Some(Worksheet::new()),
            wrapped: top.clone().set_text_wrap(),
            emphasized: top.clone().set_font_color(Color::Red),
            plain: top,
            last_col: None,
            autofit: true,
        }
    }

    /// Enable or disable column autofit on save.
    pub fn with_autofit(mut self, autofit: bool) -> Self {
        self.autofit = autofit;
        self
    }

    fn format_for(&self, value: &CellValue) -> &Format {
        if value.emphasis {
            &self.emphasized
        } else if value.is_multiline() {
            &self.wrapped
        } else {
            &self.plain
        }
    }
}

impl Default for XlsxSheetWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetWriter for XlsxSheetWriter {
    fn write_cell(&mut self, row: u32, col: u16, value: &CellValue) -> Result<()> {
        if value.is_blank() {
            return Ok(());
        }
        self.last_col = Some(self.last_col.map_or(col, |c| c.max(col)));

        let text = truncate_chars(&value.text, MAX_CELL_CHARS);
        if text.len() < value.text.len() {
            log::warn!("Cell ({}, {}) truncated to {} characters", row, col, MAX_CELL_CHARS);
        }

        let format = self.format_for(value).clone();
        if let Some(worksheet) = self.worksheet.as_mut() {
            worksheet.write_string_with_format(row, col, text, &format)?;
        }
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        if let Some(mut worksheet) = self.worksheet.take() {
            if let Some(last_col) = self.last_col {
                for col in 0..=last_col {
                    worksheet.set_column_format(col, &self.plain)?;
                }
            }
            if self.autofit {
                worksheet.autofit();
            }
            self.workbook.push_worksheet(worksheet);
        }
        self.workbook.save(path)?;
        log::debug!("Saved workbook to {}", path.display());
        Ok(())
    }
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abc", 5), "abc");
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ééé", 2), "éé");
    }

    #[test]
    fn test_cell_formats() {
        let writer = XlsxSheetWriter::new();
        let top = Format::new().set_align(FormatAlign::Top);

        assert_eq!(writer.plain, top);
        assert_eq!(writer.wrapped, top.clone().set_text_wrap());
        assert_eq!(
            writer.emphasized,
            Format::new()
                .set_align(FormatAlign::Top)
                .set_font_color(Color::Red)
        );
    }

    #[test]
    fn test_format_selection() {
        let writer = XlsxSheetWriter::new();
        assert_eq!(writer.format_for(&CellValue::emphasized("N")), &writer.emphasized);
        assert_eq!(writer.format_for(&CellValue::plain("a\nb")), &writer.wrapped);
        assert_eq!(writer.format_for(&CellValue::plain("a")), &writer.plain);
        // Emphasis wins over wrapping
        assert_eq!(
            writer.format_for(&CellValue::emphasized("x\ny")),
            &writer.emphasized
        );
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.xlsx");

        let mut writer = XlsxSheetWriter::new();
        writer.write_cell(0, 0, &CellValue::plain("File")).unwrap();
        writer.write_cell(1, 0, &CellValue::plain("a.pdf")).unwrap();
        writer.write_cell(1, 1, &CellValue::blank()).unwrap();
        writer.save(&path).unwrap();

        assert!(path.exists());
        assert_eq!(writer.last_col, Some(0));
    }
}
