use dtrack_report::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock ReportWriter that keeps reports in memory, or fails every write
#[derive(Default, Clone)]
pub struct MockReportWriter {
    pub files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    fail_writes: bool,
}

impl MockReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn file(&self, name: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(name).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

impl ReportWriter for MockReportWriter {
    fn write_report(&self, file_name: &str, content: &[u8]) -> Result<PathBuf> {
        if self.fail_writes {
            return Err(DtError::WriteFailed {
                path: PathBuf::from(file_name),
                details: "No space left on device".to_string(),
            }
            .into());
        }
        self.files
            .lock()
            .unwrap()
            .insert(file_name.to_string(), content.to_vec());
        Ok(PathBuf::from(file_name))
    }
}
