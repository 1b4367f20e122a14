use crate::report_retrieval::domain::ReportKind;

/// ReportRequest - Internal request DTO for the report retrieval use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Project name as registered on the server
    pub product_name: String,
    /// Version to match exactly against the search results
    pub product_version: String,
    /// Reports to download, in order
    pub reports: Vec<ReportKind>,
}

impl ReportRequest {
    /// Creates a request for the VDR and the policy violation report
    pub fn new(product_name: impl Into<String>, product_version: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            product_version: product_version.into(),
            reports: vec![ReportKind::Vdr, ReportKind::PolicyViolations],
        }
    }

    /// Adds the dependency listing to the requested reports
    pub fn with_dependencies(mut self) -> Self {
        if !self.reports.contains(&ReportKind::Dependencies) {
            self.reports.push(ReportKind::Dependencies);
        }
        self
    }
}
