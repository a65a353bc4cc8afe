mod cell;
mod grid;
mod sheet;
mod template;
mod workbook;

pub use cell::CellValue;
pub use grid::Grid;
pub use sheet::Sheet;
pub use template::TemplateWorkbook;
pub use workbook::open_first_sheet;
