use serde::Serialize;
use tracing::{debug, trace};

use crate::compile::index::{ImportIndex, SkuKey};
use crate::excel::Grid;
use crate::layout::{Gender, Layout};
use crate::utils::row_span_reference;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PopulateStats {
    pub rows_scanned: usize,
    pub rows_matched: usize,
    pub rows_unmatched: usize,
    pub cells_written: usize,
}

/// Copy each matching import record's sizes into its template row.
///
/// Unmatched rows are left alone. Blank size entries are not written, so
/// whatever the template already holds at those positions stays.
pub fn populate<G: Grid + ?Sized>(
    sheet: &mut G,
    index: &ImportIndex,
    layout: &Layout,
    gender: Gender,
) -> PopulateStats {
    let mut stats = PopulateStats::default();
    let last_row = sheet.last_used_row();

    for row in layout.template_first_data_row..=last_row {
        stats.rows_scanned += 1;

        let record = SkuKey::from_parts(
            &sheet.read_cell(row, layout.template_model_col),
            &sheet.read_cell(row, layout.template_fabric_col),
            &sheet.read_cell(row, layout.template_color_col),
        )
        .and_then(|key| index.get(&key));

        let Some(record) = record else {
            trace!(row, "template row has no import match");
            stats.rows_unmatched += 1;
            continue;
        };

        stats.rows_matched += 1;
        let start_col = layout.start_column(record.scale, gender);

        for (offset, value) in record.sizes.iter().enumerate() {
            if value.is_blank() {
                continue;
            }
            sheet.write_cell(row, start_col + offset, value.clone());
            stats.cells_written += 1;
        }

        debug!(
            row,
            scale = ?record.scale,
            range = %row_span_reference(row, start_col, record.sizes.len()),
            "template row populated"
        );
    }

    stats
}
