/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (server, file system, console).
pub mod dependency_track_api;
pub mod progress_reporter;
pub mod report_writer;

pub use dependency_track_api::{ApiResponse, DependencyTrackApi, HTTP_OK};
pub use progress_reporter::ProgressReporter;
pub use report_writer::ReportWriter;
