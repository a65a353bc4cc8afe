use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, info};

use crate::compile::{CompileReport, compile_sheets};
use crate::error::{CompileError, Result};
use crate::excel::{TemplateWorkbook, open_first_sheet};
use crate::layout::{Gender, Layout};

pub const DEFAULT_IDENTIFIER: &str = "Hyperoom";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Template,
    Import,
}

impl fmt::Display for UploadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadKind::Template => f.write_str("template"),
            UploadKind::Import => f.write_str("import"),
        }
    }
}

/// A spreadsheet received from the caller.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(Self::new(file_name, bytes))
    }
}

#[derive(Debug, Clone)]
pub struct CompileOptions {
    pub gender: Gender,
    /// Goes into the output file name.
    pub identifier: String,
    pub layout: Layout,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            gender: Gender::default(),
            identifier: DEFAULT_IDENTIFIER.to_string(),
            layout: Layout::default(),
        }
    }
}

impl CompileOptions {
    pub fn output_file_name(&self) -> String {
        format!("TEMPLATE_{}_compilato.xlsx", self.identifier)
    }
}

#[derive(Debug, Clone)]
pub struct CompiledWorkbook {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub report: CompileReport,
}

impl CompiledWorkbook {
    /// Write the workbook under its suggested file name inside `dir`.
    pub fn write_to<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// Uploads staged on disk for the duration of one request. The directory
/// and everything in it is removed on drop.
struct Staging {
    dir: TempDir,
}

impl Staging {
    fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("sku-compiler-")
            .tempdir()?;
        debug!(dir = %dir.path().display(), "staging directory created");
        Ok(Self { dir })
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Store an upload under a kind-prefixed name so that two uploads with
    /// the same original name do not collide. Only the final path component
    /// of the client-supplied name is used.
    fn stage(&self, kind: UploadKind, upload: &Upload) -> Result<PathBuf> {
        let original = Path::new(&upload.file_name)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let name = if Path::new(&original).extension().is_some() {
            format!("{kind}-{original}")
        } else {
            format!("{kind}-{original}.xlsx")
        };

        let path = self.dir.path().join(name);
        fs::write(&path, &upload.bytes)?;
        Ok(path)
    }
}

/// Compile one request: both uploads are required, and any failure aborts
/// without output.
pub fn compile_uploads(
    template: Option<Upload>,
    import: Option<Upload>,
    options: &CompileOptions,
) -> Result<CompiledWorkbook> {
    let template = template.ok_or(CompileError::MissingUpload(UploadKind::Template))?;
    let import = import.ok_or(CompileError::MissingUpload(UploadKind::Import))?;

    info!(
        template = %template.file_name,
        import = %import.file_name,
        gender = %options.gender,
        "compilation requested"
    );

    let staging = Staging::new()?;
    let template_path = staging.stage(UploadKind::Template, &template)?;
    let import_path = staging.stage(UploadKind::Import, &import)?;

    let mut template_book = TemplateWorkbook::open(&template_path)?;
    let import_sheet = open_first_sheet(&import_path)?;

    let report = compile_sheets(
        template_book.first_sheet_mut()?,
        &import_sheet,
        &options.layout,
        options.gender,
    )?;

    let file_name = options.output_file_name();
    let output_path = staging.path().join(&file_name);
    template_book.save(&output_path)?;
    let bytes = fs::read(&output_path)?;

    info!(file = %file_name, size = bytes.len(), "compiled workbook ready");
    debug!(dir = %staging.path().display(), "removing staging directory");

    Ok(CompiledWorkbook {
        file_name,
        bytes,
        report,
    })
}

/// Read both workbooks from disk and compile them.
pub fn compile_files<P: AsRef<Path>, Q: AsRef<Path>>(
    template_path: P,
    import_path: Q,
    options: &CompileOptions,
) -> Result<CompiledWorkbook> {
    let template = Upload::from_path(template_path)?;
    let import = Upload::from_path(import_path)?;
    compile_uploads(Some(template), Some(import), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_uses_identifier() {
        let options = CompileOptions::default();
        assert_eq!(options.output_file_name(), "TEMPLATE_Hyperoom_compilato.xlsx");

        let options = CompileOptions {
            identifier: "SS25".to_string(),
            ..CompileOptions::default()
        };
        assert_eq!(options.output_file_name(), "TEMPLATE_SS25_compilato.xlsx");
    }

    #[test]
    fn missing_template_is_reported_first() {
        let err = compile_uploads(None, None, &CompileOptions::default()).unwrap_err();
        assert!(matches!(err, CompileError::MissingUpload(UploadKind::Template)));
        assert_eq!(err.to_string(), "template file is required");
    }

    #[test]
    fn missing_import_is_a_precondition_failure() {
        let template = Upload::new("t.xlsx", Vec::new());
        let err = compile_uploads(Some(template), None, &CompileOptions::default()).unwrap_err();
        assert!(matches!(err, CompileError::MissingUpload(UploadKind::Import)));
    }

    #[test]
    fn staged_names_are_prefixed_and_confined() {
        let staging = Staging::new().unwrap();
        let upload = Upload::new("../../etc/orders.xlsx", b"x".to_vec());

        let path = staging.stage(UploadKind::Import, &upload).unwrap();
        assert_eq!(path.parent(), Some(staging.path()));
        assert_eq!(path.file_name().unwrap(), "import-orders.xlsx");

        let bare = staging
            .stage(UploadKind::Template, &Upload::new("orders", b"x".to_vec()))
            .unwrap();
        assert_eq!(bare.file_name().unwrap(), "template-orders.xlsx");
    }

    #[test]
    fn staging_directory_is_removed_on_drop() {
        let staging = Staging::new().unwrap();
        let dir = staging.path().to_path_buf();
        staging
            .stage(UploadKind::Template, &Upload::new("a.xlsx", b"x".to_vec()))
            .unwrap();
        assert!(dir.exists());

        drop(staging);
        assert!(!dir.exists());
    }
}
