use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::Path;
use tracing::debug;

use crate::error::{CompileError, Result};
use crate::excel::{CellValue, Sheet};

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Open a workbook and load its first worksheet into memory.
///
/// The format is picked from the file extension (xlsx, xlsm, xls, xlsb, ods).
pub fn open_first_sheet<P: AsRef<Path>>(path: P) -> Result<Sheet> {
    let path = path.as_ref();
    let file = display_name(path);

    let mut workbook = open_workbook_auto(path).map_err(|source| CompileError::Read {
        file: file.clone(),
        source,
    })?;

    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| CompileError::NoWorksheet(file.clone()))?;

    let range = workbook
        .worksheet_range(&name)
        .map_err(|source| CompileError::Read {
            file: file.clone(),
            source,
        })?;

    let sheet = create_sheet_from_range(&name, &range);

    debug!(
        file = %file,
        sheet = %sheet.name,
        rows = sheet.last_row(),
        cols = sheet.last_col(),
        "worksheet loaded"
    );

    Ok(sheet)
}

fn create_sheet_from_range(name: &str, range: &Range<Data>) -> Sheet {
    let mut sheet = Sheet::new(name);

    // used_cells() is relative to the range start, which is not always A1.
    let (row0, col0) = range.start().unwrap_or((0, 0));

    for (row_idx, col_idx, cell) in range.used_cells() {
        let value = CellValue::from(cell);
        if value.is_blank() {
            continue;
        }
        sheet.set_value(
            row0 as usize + row_idx + 1,
            col0 as usize + col_idx + 1,
            value,
        );
    }

    sheet
}
