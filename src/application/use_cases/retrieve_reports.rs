use crate::application::dto::{ReportRequest, ReportResponse};
use crate::application::use_cases::{FetchReportsUseCase, ResolveProjectUseCase};
use crate::ports::outbound::{DependencyTrackApi, ProgressReporter, ReportWriter};
use crate::shared::Result;

/// RetrieveReportsUseCase - Resolve a product version, then download its reports
///
/// Control is strictly sequential: the search must succeed before any
/// report is requested, and the reports are requested one after another.
///
/// # Type Parameters
/// * `A` - DependencyTrackApi implementation
/// * `W` - ReportWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct RetrieveReportsUseCase<A, W, PR> {
    api: A,
    writer: W,
    progress_reporter: PR,
}

impl<A, W, PR> RetrieveReportsUseCase<A, W, PR>
where
    A: DependencyTrackApi,
    W: ReportWriter,
    PR: ProgressReporter,
{
    /// Creates a new RetrieveReportsUseCase with injected dependencies
    pub fn new(api: A, writer: W, progress_reporter: PR) -> Self {
        Self {
            api,
            writer,
            progress_reporter,
        }
    }

    /// Executes the retrieval workflow
    ///
    /// # Errors
    /// Resolution errors (`SearchFailed`, `DecodeFailed`, `NotFound`) abort
    /// the run. Report errors are collected in the response instead.
    pub fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        let resolver = ResolveProjectUseCase::new(&self.api, &self.progress_reporter);
        let project = resolver.execute(&request.product_name, &request.product_version)?;

        let fetcher =
            FetchReportsUseCase::new(&self.api, &self.writer, &self.progress_reporter);
        let outcomes = fetcher.fetch_all(&project, &request.reports);

        Ok(ReportResponse::new(project, outcomes))
    }
}
