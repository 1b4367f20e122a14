use crate::shared::Result;
use std::path::PathBuf;

/// ReportWriter port for persisting downloaded reports
///
/// This port abstracts the destination of report files so the retrieval
/// workflow can be exercised without touching the real working directory.
pub trait ReportWriter {
    /// Persists a complete report under the given file name
    ///
    /// The write is all-or-nothing: on error no file named `file_name` is
    /// left behind with partial content.
    ///
    /// # Arguments
    /// * `file_name` - Bare file name, e.g. `Widget_2.0_VDR.json`
    /// * `content` - The full report body
    ///
    /// # Returns
    /// The path of the written file
    ///
    /// # Errors
    /// Returns a `WriteFailed` error if the file cannot be created, written
    /// or moved into place
    fn write_report(&self, file_name: &str, content: &[u8]) -> Result<PathBuf>;
}

impl<T: ReportWriter + ?Sized> ReportWriter for &T {
    fn write_report(&self, file_name: &str, content: &[u8]) -> Result<PathBuf> {
        (**self).write_report(file_name, content)
    }
}
