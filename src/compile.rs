mod index;
mod populate;
mod report;

use tracing::info;

use crate::error::Result;
use crate::excel::{Grid, Sheet};
use crate::layout::{Gender, Layout};

pub use index::{
    COLOR_HEADER, FABRIC_HEADER, ImportIndex, ImportRecord, IndexStats, MODEL_HEADER, SkuKey,
    build_index,
};
pub use populate::{PopulateStats, populate};
pub use report::CompileReport;

/// Index the import sheet, then fill the template sheet in place.
///
/// The index is complete before the template is touched; on error the
/// template is left unmodified.
pub fn compile_sheets<G: Grid + ?Sized>(
    template: &mut G,
    import: &Sheet,
    layout: &Layout,
    gender: Gender,
) -> Result<CompileReport> {
    let index = build_index(import, layout, gender)?;
    let index_stats = index.stats();
    info!(
        entries = index.len(),
        scanned = index_stats.rows_scanned,
        skipped = index_stats.rows_skipped,
        duplicates = index_stats.duplicate_keys,
        "import index built"
    );

    let populate_stats = populate(template, &index, layout, gender);
    info!(
        matched = populate_stats.rows_matched,
        unmatched = populate_stats.rows_unmatched,
        cells = populate_stats.cells_written,
        "template populated"
    );

    Ok(CompileReport::new(
        gender,
        index.len(),
        index_stats,
        populate_stats,
    ))
}
