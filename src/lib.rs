//! dtrack-report - Download VDR and policy violation reports from Dependency-Track
//!
//! This library resolves a product name and version to a Dependency-Track
//! project, then downloads the project's CycloneDX Vulnerability Disclosure
//! Report and its policy violations as JSON files.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`report_retrieval`): Project identity, report kinds, version matching
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): HTTP client, file writer, console reporter
//! - **Shared** (`shared`): Error taxonomy, exit codes, path checks
//!
//! # Example
//!
//! ```no_run
//! use dtrack_report::prelude::*;
//! use std::path::PathBuf;
//! use std::time::Duration;
//!
//! # fn main() -> Result<()> {
//! let config = Config::new("dtrack.example.com", "odt_api_key")?;
//! let client = DependencyTrackClient::new(&config, Duration::from_secs(30))?;
//! let writer = FileSystemReportWriter::new(PathBuf::from("."));
//! let progress_reporter = StderrProgressReporter::new();
//!
//! let use_case = RetrieveReportsUseCase::new(client, writer, progress_reporter);
//! let response = use_case.execute(ReportRequest::new("Widget", "2.0"))?;
//! for path in response.written_paths() {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod report_retrieval;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::FileSystemReportWriter;
    pub use crate::adapters::outbound::network::DependencyTrackClient;
    pub use crate::application::dto::{ReportOutcome, ReportRequest, ReportResponse};
    pub use crate::application::use_cases::{
        FetchReportsUseCase, FetchedReport, ResolveProjectUseCase, RetrieveReportsUseCase,
    };
    pub use crate::config::Config;
    pub use crate::ports::outbound::{
        ApiResponse, DependencyTrackApi, ProgressReporter, ReportWriter,
    };
    pub use crate::report_retrieval::domain::{
        Endpoint, ProjectSearchResult, Rendering, ReportKind, ResolvedProject,
    };
    pub use crate::report_retrieval::policies::VersionMatch;
    pub use crate::shared::error::{CallFailure, DtError, ExitCode};
    pub use crate::shared::Result;
}
