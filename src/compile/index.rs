use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{CompileError, Result};
use crate::excel::{CellValue, Sheet};
use crate::layout::{Gender, Layout, Scale};

pub const MODEL_HEADER: &str = "Model";
pub const FABRIC_HEADER: &str = "Fabric";
pub const COLOR_HEADER: &str = "Color Code";

/// Header text marking the first woman size on numeric-scale sheets.
const WOMAN_FIRST_SIZE: &str = "34";

/// Model, fabric and color code concatenated with no separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SkuKey(String);

impl SkuKey {
    /// Returns `None` when any part is blank.
    pub fn from_parts(model: &CellValue, fabric: &CellValue, color: &CellValue) -> Option<Self> {
        if model.is_blank() || fabric.is_blank() || color.is_blank() {
            return None;
        }
        let mut key = String::new();
        key.push_str(&model.as_text());
        key.push_str(&fabric.as_text());
        key.push_str(&color.as_text());
        Some(SkuKey(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportRecord {
    /// Size quantities in column order; blanks keep their slot.
    pub sizes: Vec<CellValue>,
    pub scale: Scale,
}

impl ImportRecord {
    pub fn is_numeric_scale(&self) -> bool {
        self.scale == Scale::Numeric
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub rows_scanned: usize,
    pub rows_skipped: usize,
    pub duplicate_keys: usize,
}

/// SKU lookup built from the import sheet. Read-only once built.
#[derive(Debug, Default)]
pub struct ImportIndex {
    entries: IndexMap<SkuKey, ImportRecord>,
    stats: IndexStats,
}

impl ImportIndex {
    pub fn get(&self, key: &SkuKey) -> Option<&ImportRecord> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SkuKey, &ImportRecord)> {
        self.entries.iter()
    }

    pub fn stats(&self) -> IndexStats {
        self.stats
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct KeyColumns {
    model: usize,
    fabric: usize,
    color: usize,
}

/// Read the header row left to right until the first blank cell and locate
/// the key columns by exact label.
fn locate_key_columns(sheet: &Sheet, layout: &Layout) -> Result<KeyColumns> {
    let row = layout.import_header_row;
    let headers: Vec<String> = (1..)
        .map(|col| sheet.value(row, col))
        .take_while(|value| !value.is_blank())
        .map(|value| value.as_text().into_owned())
        .collect();

    let find = |label: &'static str| {
        headers
            .iter()
            .position(|header| header == label)
            .map(|idx| idx + 1)
            .ok_or(CompileError::MissingHeader(label))
    };

    Ok(KeyColumns {
        model: find(MODEL_HEADER)?,
        fabric: find(FABRIC_HEADER)?,
        color: find(COLOR_HEADER)?,
    })
}

/// Offset into the size vector of the first header reading `34`, ignoring
/// whitespace. 0 when there is none.
fn woman_size_offset(sheet: &Sheet, layout: &Layout) -> usize {
    let first = layout.import_sizes_first_col;
    let last = sheet.last_col();
    if last < first {
        return 0;
    }

    (first..=last)
        .position(|col| {
            let header: String = sheet
                .value(layout.import_header_row, col)
                .as_text()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            header == WOMAN_FIRST_SIZE
        })
        .unwrap_or(0)
}

/// Build the SKU index from the import sheet.
///
/// Rows missing any of model, fabric, color code or scale are skipped
/// without error. A later row with the same key replaces the earlier one.
pub fn build_index(sheet: &Sheet, layout: &Layout, gender: Gender) -> Result<ImportIndex> {
    let columns = locate_key_columns(sheet, layout)?;
    debug!(
        model = columns.model,
        fabric = columns.fabric,
        color = columns.color,
        "import key columns located"
    );

    let woman_offset = match gender {
        Gender::Woman => woman_size_offset(sheet, layout),
        Gender::Man => 0,
    };

    let last_col = sheet.last_col();
    let mut index = ImportIndex::default();

    for row in layout.import_first_data_row..=sheet.last_row() {
        index.stats.rows_scanned += 1;

        let scale = sheet.value(row, layout.import_scale_col);
        let key = SkuKey::from_parts(
            sheet.value(row, columns.model),
            sheet.value(row, columns.fabric),
            sheet.value(row, columns.color),
        );

        let key = match key {
            Some(key) if !scale.is_blank() => key,
            _ => {
                trace!(row, "import row skipped: missing key or scale");
                index.stats.rows_skipped += 1;
                continue;
            }
        };

        let scale = Scale::classify(&scale.as_text());

        let mut sizes: Vec<CellValue> = (layout.import_sizes_first_col..=last_col)
            .map(|col| sheet.value(row, col).clone())
            .collect();

        if scale == Scale::Numeric && woman_offset > 0 {
            sizes.drain(..woman_offset.min(sizes.len()));
        }

        if index
            .entries
            .insert(key, ImportRecord { sizes, scale })
            .is_some()
        {
            index.stats.duplicate_keys += 1;
        }
    }

    Ok(index)
}
