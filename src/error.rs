use thiserror::Error;

use crate::service::UploadKind;

/// Failures that abort a whole compilation. Data-quality gaps in the sheets
/// (missing key fields, unmatched rows, blank sizes) are never reported here.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("{0} file is required")]
    MissingUpload(UploadKind),

    #[error("import header row has no \"{0}\" column")]
    MissingHeader(&'static str),

    #[error("unable to read workbook {file}: {source}")]
    Read {
        file: String,
        #[source]
        source: calamine::Error,
    },

    #[error("unable to open template {file}: {source}")]
    ReadTemplate {
        file: String,
        #[source]
        source: umya_spreadsheet::XlsxError,
    },

    #[error("workbook {0} has no worksheets")]
    NoWorksheet(String),

    #[error("unable to write compiled workbook: {0}")]
    Write(#[source] umya_spreadsheet::XlsxError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = CompileError> = std::result::Result<T, E>;
