use super::Endpoint;

/// How a report body is laid out on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendering {
    /// The response body is written byte-for-byte
    Verbatim,
    /// The body is decoded and re-serialized with 2-space indentation
    Pretty,
}

/// The reports that can be downloaded for a resolved project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// CycloneDX Vulnerability Disclosure Report
    Vdr,
    PolicyViolations,
    Dependencies,
}

impl ReportKind {
    /// Human-readable name used in progress and summary lines
    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Vdr => "VDR",
            ReportKind::PolicyViolations => "policy violations",
            ReportKind::Dependencies => "dependencies",
        }
    }

    pub fn file_suffix(&self) -> &'static str {
        match self {
            ReportKind::Vdr => "_VDR.json",
            ReportKind::PolicyViolations => "_policy_violations.json",
            ReportKind::Dependencies => "_dependencies.json",
        }
    }

    pub fn rendering(&self) -> Rendering {
        match self {
            ReportKind::Vdr => Rendering::Verbatim,
            ReportKind::PolicyViolations | ReportKind::Dependencies => Rendering::Pretty,
        }
    }

    pub fn endpoint(&self, uuid: &str) -> Endpoint {
        let uuid = uuid.to_string();
        match self {
            ReportKind::Vdr => Endpoint::Vdr { uuid },
            ReportKind::PolicyViolations => Endpoint::PolicyViolations { uuid },
            ReportKind::Dependencies => Endpoint::Dependencies { uuid },
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
