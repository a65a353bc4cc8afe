/// Column letters for a 1-based column index (1 → `A`, 27 → `AA`).
#[must_use]
pub fn index_to_col_name(index: usize) -> String {
    let mut col_name = String::new();
    let mut n = index;

    while n > 0 {
        let remainder = (n - 1) % 26;
        col_name.insert(0, (b'A' + remainder as u8) as char);
        n = (n - 1) / 26;
    }

    if col_name.is_empty() {
        col_name.push('A');
    }

    col_name
}

// A1-style reference for a (row, col) pair
#[must_use]
pub fn cell_reference(cell: (usize, usize)) -> String {
    format!("{}{}", index_to_col_name(cell.1), cell.0)
}

/// A1-style reference for a horizontal span of `len` cells on one row.
#[must_use]
pub fn row_span_reference(row: usize, first_col: usize, len: usize) -> String {
    if len <= 1 {
        return cell_reference((row, first_col));
    }
    format!(
        "{}:{}",
        cell_reference((row, first_col)),
        cell_reference((row, first_col + len - 1))
    )
}
