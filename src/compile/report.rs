use chrono::{DateTime, Local};
use serde::Serialize;

use crate::compile::index::IndexStats;
use crate::compile::populate::PopulateStats;
use crate::layout::Gender;

/// Counters for one compilation, including the rows that were silently
/// skipped.
#[derive(Debug, Clone, Serialize)]
pub struct CompileReport {
    pub compiled_at: DateTime<Local>,
    pub gender: Gender,
    pub import_rows_scanned: usize,
    pub import_rows_skipped: usize,
    pub index_entries: usize,
    pub duplicate_keys: usize,
    pub template_rows_scanned: usize,
    pub template_rows_matched: usize,
    pub template_rows_unmatched: usize,
    pub cells_written: usize,
}

impl CompileReport {
    pub fn new(
        gender: Gender,
        index_entries: usize,
        index: IndexStats,
        populate: PopulateStats,
    ) -> Self {
        Self {
            compiled_at: Local::now(),
            gender,
            import_rows_scanned: index.rows_scanned,
            import_rows_skipped: index.rows_skipped,
            index_entries,
            duplicate_keys: index.duplicate_keys,
            template_rows_scanned: populate.rows_scanned,
            template_rows_matched: populate.rows_matched,
            template_rows_unmatched: populate.rows_unmatched,
            cells_written: populate.cells_written,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
