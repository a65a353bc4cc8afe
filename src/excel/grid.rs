use std::borrow::Cow;

use crate::excel::CellValue;

/// A worksheet the populator can read keys from and write sizes into.
/// Coordinates are 1-based (row, column).
pub trait Grid {
    fn read_cell(&self, row: usize, col: usize) -> Cow<'_, CellValue>;

    fn write_cell(&mut self, row: usize, col: usize, value: CellValue);

    /// Last used row; 0 for an empty sheet.
    fn last_used_row(&self) -> usize;
}
