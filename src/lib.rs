pub mod compile;
pub mod error;
pub mod excel;
pub mod layout;
pub mod logging;
pub mod service;
pub mod utils;

pub use compile::{CompileReport, compile_sheets};
pub use error::CompileError;
pub use layout::{Gender, Layout, Scale};
pub use service::{CompileOptions, CompiledWorkbook, Upload, UploadKind, compile_files, compile_uploads};
