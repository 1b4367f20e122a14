use crate::application::dto::ReportOutcome;
use crate::ports::outbound::{DependencyTrackApi, ProgressReporter, ReportWriter};
use crate::report_retrieval::domain::{Rendering, ReportKind, ResolvedProject};
use crate::shared::error::{CallFailure, DtError};
use crate::shared::Result;
use std::path::PathBuf;

/// A report that was downloaded and written to disk
#[derive(Debug, Clone)]
pub struct FetchedReport {
    pub kind: ReportKind,
    pub path: PathBuf,
    /// The decoded report, as returned by the server
    pub document: serde_json::Value,
}

/// FetchReportsUseCase - Downloads reports for a resolved project
///
/// Each report is one GET request. The body is read and decoded in full
/// before anything is written, so a failed request never produces a file.
///
/// # Type Parameters
/// * `A` - DependencyTrackApi implementation
/// * `W` - ReportWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct FetchReportsUseCase<A, W, PR> {
    api: A,
    writer: W,
    progress_reporter: PR,
}

impl<A, W, PR> FetchReportsUseCase<A, W, PR>
where
    A: DependencyTrackApi,
    W: ReportWriter,
    PR: ProgressReporter,
{
    pub fn new(api: A, writer: W, progress_reporter: PR) -> Self {
        Self {
            api,
            writer,
            progress_reporter,
        }
    }

    /// Downloads the VDR, writes it verbatim and returns the decoded document
    pub fn fetch_vdr(&self, project: &ResolvedProject) -> Result<serde_json::Value> {
        let report = self.fetch(project, ReportKind::Vdr)?;
        Ok(report.document)
    }

    /// Downloads the policy violations and writes them pretty-printed
    pub fn fetch_policy_violations(&self, project: &ResolvedProject) -> Result<PathBuf> {
        let report = self.fetch(project, ReportKind::PolicyViolations)?;
        Ok(report.path)
    }

    /// Downloads the dependency listing and writes it pretty-printed
    pub fn fetch_dependencies(&self, project: &ResolvedProject) -> Result<PathBuf> {
        let report = self.fetch(project, ReportKind::Dependencies)?;
        Ok(report.path)
    }

    /// Attempts every report in order; one failure does not stop the others
    pub fn fetch_all(&self, project: &ResolvedProject, kinds: &[ReportKind]) -> Vec<ReportOutcome> {
        kinds
            .iter()
            .map(|&kind| match self.fetch(project, kind) {
                Ok(report) => ReportOutcome::Written {
                    kind: report.kind,
                    path: report.path,
                },
                Err(error) => {
                    self.progress_reporter.report_error(&format!(
                        "Could not retrieve the {} report: {}",
                        kind, error
                    ));
                    ReportOutcome::Failed { kind, error }
                }
            })
            .collect()
    }

    /// Downloads one report and writes it next to the others
    ///
    /// # Errors
    /// - `FetchFailed` on a non-200 status or when no response arrived
    /// - `DecodeFailed` if the body is not JSON
    /// - `WriteFailed` if the file cannot be written
    pub fn fetch(
        &self,
        project: &ResolvedProject,
        kind: ReportKind,
    ) -> std::result::Result<FetchedReport, DtError> {
        let endpoint = kind.endpoint(project.uuid());
        let fetch_failed = |cause: CallFailure| DtError::FetchFailed {
            endpoint: endpoint.to_string(),
            uuid: project.uuid().to_string(),
            cause,
        };

        self.progress_reporter
            .begin_activity(&format!("📥 Downloading {} report...", kind));
        let response = self.api.get(&endpoint);
        self.progress_reporter.end_activity();

        let response =
            response.map_err(|e| fetch_failed(CallFailure::Transport(format!("{:#}", e))))?;
        if !response.is_success() {
            return Err(fetch_failed(CallFailure::Status(response.status())));
        }

        let document = response.as_document()?;
        let content = match kind.rendering() {
            Rendering::Verbatim => response.body().to_vec(),
            Rendering::Pretty => {
                serde_json::to_vec_pretty(&document).map_err(|e| DtError::DecodeFailed {
                    endpoint: endpoint.to_string(),
                    details: e.to_string(),
                })?
            }
        };

        let file_name = project.report_file_name(kind);
        let path = self
            .writer
            .write_report(&file_name, &content)
            .map_err(|e| match e.downcast::<DtError>() {
                Ok(error) => error,
                Err(other) => DtError::WriteFailed {
                    path: PathBuf::from(&file_name),
                    details: other.to_string(),
                },
            })?;

        self.progress_reporter.report_success(&format!(
            "{} report written to {}",
            kind,
            path.display()
        ));

        Ok(FetchedReport {
            kind,
            path,
            document,
        })
    }
}
