/// Use cases module containing application business logic orchestration
mod fetch_reports;
mod resolve_project;
mod retrieve_reports;

pub use fetch_reports::{FetchReportsUseCase, FetchedReport};
pub use resolve_project::ResolveProjectUseCase;
pub use retrieve_reports::RetrieveReportsUseCase;
