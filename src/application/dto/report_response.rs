use crate::report_retrieval::domain::{ReportKind, ResolvedProject};
use crate::shared::error::DtError;
use std::path::PathBuf;

/// Result of retrieving one report
#[derive(Debug)]
pub enum ReportOutcome {
    Written { kind: ReportKind, path: PathBuf },
    Failed { kind: ReportKind, error: DtError },
}

impl ReportOutcome {
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportOutcome::Written { kind, .. } | ReportOutcome::Failed { kind, .. } => *kind,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, ReportOutcome::Written { .. })
    }
}

/// ReportResponse - Internal response DTO from the report retrieval use case
///
/// One outcome per requested report, in request order. Report failures do
/// not abort the run; whether they are fatal is decided by the caller.
#[derive(Debug)]
pub struct ReportResponse {
    pub project: ResolvedProject,
    pub outcomes: Vec<ReportOutcome>,
}

impl ReportResponse {
    pub fn new(project: ResolvedProject, outcomes: Vec<ReportOutcome>) -> Self {
        Self { project, outcomes }
    }

    pub fn written_paths(&self) -> Vec<&PathBuf> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                ReportOutcome::Written { path, .. } => Some(path),
                ReportOutcome::Failed { .. } => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<&DtError> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                ReportOutcome::Failed { error, .. } => Some(error),
                ReportOutcome::Written { .. } => None,
            })
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(ReportOutcome::is_written)
    }

    /// Converts report failures into an error when every report is required
    pub fn require_complete(&self) -> std::result::Result<(), DtError> {
        let failed = self.failures().len();
        if failed > 0 {
            return Err(DtError::ReportsIncomplete {
                failed,
                attempted: self.outcomes.len(),
            });
        }
        Ok(())
    }
}
