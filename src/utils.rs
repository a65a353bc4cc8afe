mod helpers;

pub use helpers::{cell_reference, index_to_col_name, row_span_reference};
