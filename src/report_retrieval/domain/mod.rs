pub mod endpoint;
pub mod project;
pub mod report_kind;

pub use endpoint::Endpoint;
pub use project::{ProjectSearchResult, ResolvedProject};
pub use report_kind::{Rendering, ReportKind};
