use std::borrow::Cow;

use crate::excel::{CellValue, Grid};

static EMPTY: CellValue = CellValue::Empty;

/// In-memory worksheet addressed by 1-based (row, column).
///
/// Index 0 of `data` and of every row is padding so that `data[row][col]`
/// lines up with spreadsheet coordinates. Rows only grow as far as their own
/// last written column.
#[derive(Clone, Debug)]
pub struct Sheet {
    pub name: String,
    pub data: Vec<Vec<CellValue>>,
    pub max_rows: usize,
    pub max_cols: usize,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: vec![Vec::new()],
            max_rows: 0,
            max_cols: 0,
        }
    }

    /// Last used row; 0 for an empty sheet.
    pub fn last_row(&self) -> usize {
        self.max_rows
    }

    /// Last used column; 0 for an empty sheet.
    pub fn last_col(&self) -> usize {
        self.max_cols
    }

    pub fn value(&self, row: usize, col: usize) -> &CellValue {
        self.data
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    /// Store a value, growing only the touched row.
    pub fn set_value(&mut self, row: usize, col: usize, value: CellValue) {
        self.ensure_cell_exists(row, col);
        self.data[row][col] = value;
        self.max_rows = self.max_rows.max(row);
        self.max_cols = self.max_cols.max(col);
    }

    fn ensure_cell_exists(&mut self, row: usize, col: usize) {
        if row >= self.data.len() {
            self.data.resize_with(row + 1, Vec::new);
        }

        let row_data = &mut self.data[row];
        if col >= row_data.len() {
            row_data.resize_with(col + 1, CellValue::default);
        }
    }

    /// Allocated cell slots, padding included.
    pub fn allocated_cells(&self) -> usize {
        self.data.iter().map(Vec::len).sum()
    }
}

impl Grid for Sheet {
    fn read_cell(&self, row: usize, col: usize) -> Cow<'_, CellValue> {
        Cow::Borrowed(self.value(row, col))
    }

    fn write_cell(&mut self, row: usize, col: usize, value: CellValue) {
        self.set_value(row, col, value);
    }

    fn last_used_row(&self) -> usize {
        self.last_row()
    }
}
