use crate::ports::outbound::{DependencyTrackApi, ProgressReporter};
use crate::report_retrieval::domain::{Endpoint, ResolvedProject};
use crate::report_retrieval::policies::VersionMatch;
use crate::shared::error::{CallFailure, DtError};
use crate::shared::Result;

/// ResolveProjectUseCase - Finds the project uuid for a product name and version
///
/// Issues one search request filtered by name and scans the returned page
/// for the first entry whose version matches exactly.
///
/// # Type Parameters
/// * `A` - DependencyTrackApi implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveProjectUseCase<A, PR> {
    api: A,
    progress_reporter: PR,
}

impl<A, PR> ResolveProjectUseCase<A, PR>
where
    A: DependencyTrackApi,
    PR: ProgressReporter,
{
    pub fn new(api: A, progress_reporter: PR) -> Self {
        Self {
            api,
            progress_reporter,
        }
    }

    /// Resolves `product_name`/`product_version` to a project on the server
    ///
    /// # Errors
    /// - `SearchFailed` if the search call failed or returned a non-200 status
    /// - `DecodeFailed` if the search body is not a list of projects
    /// - `NotFound` if no entry carries the requested version
    pub fn execute(&self, product_name: &str, product_version: &str) -> Result<ResolvedProject> {
        let endpoint = Endpoint::ProjectSearch {
            name: product_name.to_string(),
        };
        let search_failed = |cause: CallFailure| DtError::SearchFailed {
            product: product_name.to_string(),
            cause,
        };

        self.progress_reporter
            .begin_activity(&format!("🔍 Searching for project '{}'...", product_name));
        let response = self.api.get(&endpoint);
        self.progress_reporter.end_activity();

        let response =
            response.map_err(|e| search_failed(CallFailure::Transport(format!("{:#}", e))))?;
        if !response.is_success() {
            return Err(search_failed(CallFailure::Status(response.status())).into());
        }

        let candidates = response.as_project_list()?;
        tracing::debug!(
            product = product_name,
            candidates = candidates.len(),
            "search results received"
        );

        let matched = VersionMatch::first_exact(&candidates, product_version).ok_or_else(|| {
            DtError::NotFound {
                product: product_name.to_string(),
                version: product_version.to_string(),
                available: VersionMatch::available_versions(&candidates),
            }
        })?;

        let duplicates = candidates
            .iter()
            .filter(|c| c.version.as_deref() == Some(product_version))
            .count();
        if duplicates > 1 {
            tracing::warn!(
                "{} projects named '{}' carry version '{}'; using the first one ({})",
                duplicates,
                product_name,
                product_version,
                matched.uuid
            );
        }

        let project = ResolvedProject::new(
            matched.uuid.clone(),
            product_name.to_string(),
            product_version.to_string(),
        )?;

        self.progress_reporter.report_success(&format!(
            "Matched version {} of '{}' (uuid {})",
            project.version(),
            project.name(),
            project.uuid()
        ));

        Ok(project)
    }
}
