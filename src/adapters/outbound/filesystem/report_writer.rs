use crate::ports::outbound::ReportWriter;
use crate::shared::error::DtError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// FileSystemReportWriter adapter for writing reports into a directory
///
/// Each report is written to a temporary file in the target directory and
/// renamed over the final name once it is complete, so readers never see a
/// half-written report and a failed write leaves nothing behind.
pub struct FileSystemReportWriter {
    output_dir: PathBuf,
}

impl FileSystemReportWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// File names come from user input; they must not point outside the directory
    fn validate_file_name(&self, file_name: &str) -> Result<()> {
        let is_plain = !file_name.is_empty()
            && file_name != "."
            && file_name != ".."
            && !file_name.contains('/')
            && !file_name.contains('\\');

        if !is_plain {
            return Err(DtError::WriteFailed {
                path: self.output_dir.join(file_name),
                details: "Report file name must not contain path separators".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn write_atomically(&self, path: &Path, content: &[u8]) -> std::io::Result<()> {
        let mut temp_file = NamedTempFile::new_in(&self.output_dir)?;
        temp_file.write_all(content)?;
        temp_file.flush()?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl ReportWriter for FileSystemReportWriter {
    fn write_report(&self, file_name: &str, content: &[u8]) -> Result<PathBuf> {
        self.validate_file_name(file_name)?;
        let path = self.output_dir.join(file_name);

        // Security: never write through a symlink planted at the report name
        if path.exists() || path.is_symlink() {
            validate_not_symlink(&path, "write").map_err(|e| DtError::WriteFailed {
                path: path.clone(),
                details: e.to_string(),
            })?;
        }

        self.write_atomically(&path, content)
            .map_err(|e| DtError::WriteFailed {
                path: path.clone(),
                details: e.to_string(),
            })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "report written");
        Ok(path)
    }
}
