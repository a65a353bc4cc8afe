use std::borrow::Cow;
use std::path::Path;

use tracing::debug;
use umya_spreadsheet::{Spreadsheet, Worksheet};

use crate::error::{CompileError, Result};
use crate::excel::workbook::display_name;
use crate::excel::{CellValue, Grid};

/// An xlsx template edited in place.
///
/// Only the cells the populator writes change. Styles, merged ranges,
/// column widths, formulas and the other worksheets are saved back as read.
pub struct TemplateWorkbook {
    book: Spreadsheet,
    file: String,
}

impl TemplateWorkbook {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = display_name(path);

        let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|source| {
            CompileError::ReadTemplate {
                file: file.clone(),
                source,
            }
        })?;

        debug!(file = %file, sheets = book.get_sheet_count(), "template loaded");
        Ok(Self { book, file })
    }

    /// The worksheet that receives the size quantities.
    pub fn first_sheet_mut(&mut self) -> Result<&mut Worksheet> {
        self.book
            .get_sheet_mut(&0)
            .ok_or_else(|| CompileError::NoWorksheet(self.file.clone()))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        umya_spreadsheet::writer::xlsx::write(&self.book, path.as_ref())
            .map_err(CompileError::Write)
    }
}

// umya addresses cells as (column, row).
fn coordinate(row: usize, col: usize) -> (u32, u32) {
    let clamp = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
    (clamp(col), clamp(row))
}

impl Grid for Worksheet {
    fn read_cell(&self, row: usize, col: usize) -> Cow<'_, CellValue> {
        let text = self.get_value(coordinate(row, col));
        if text.is_empty() {
            Cow::Owned(CellValue::Empty)
        } else {
            Cow::Owned(CellValue::Text(text))
        }
    }

    fn write_cell(&mut self, row: usize, col: usize, value: CellValue) {
        let at = coordinate(row, col);
        // Empty values must not create a cell.
        match value {
            CellValue::Empty => {}
            CellValue::Number(n) | CellValue::DateTime(n) => {
                self.get_cell_mut(at).set_value_number(n);
            }
            CellValue::Bool(b) => {
                self.get_cell_mut(at).set_value_bool(b);
            }
            CellValue::Text(s) | CellValue::Error(s) => {
                self.get_cell_mut(at).set_value_string(s);
            }
        }
    }

    fn last_used_row(&self) -> usize {
        self.get_highest_row() as usize
    }
}
