use super::ReportKind;
use crate::shared::Result;
use serde::Deserialize;

/// One entry of the server's project search response
///
/// Only the fields used for resolution are decoded; everything else the
/// server sends (classifier, tags, metrics, ...) is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectSearchResult {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Projects without a version are legal on the server and come back as null
    #[serde(default)]
    pub version: Option<String>,
}

impl ProjectSearchResult {
    pub fn new(uuid: impl Into<String>, version: Option<&str>) -> Self {
        Self {
            uuid: uuid.into(),
            name: None,
            version: version.map(str::to_string),
        }
    }
}

/// A project whose identifier has been resolved on the server
///
/// `version` is the version the caller asked for, which is string-equal to
/// the version of the matched search entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProject {
    uuid: String,
    name: String,
    version: String,
}

impl ResolvedProject {
    pub fn new(uuid: String, name: String, version: String) -> Result<Self> {
        if uuid.trim().is_empty() {
            anyhow::bail!("Project uuid cannot be empty");
        }
        if name.is_empty() {
            anyhow::bail!("Project name cannot be empty");
        }
        if version.is_empty() {
            anyhow::bail!("Project version cannot be empty");
        }

        Ok(Self {
            uuid,
            name,
            version,
        })
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Output file name for a report of this project, e.g. `Widget_2.0_VDR.json`
    pub fn report_file_name(&self, kind: ReportKind) -> String {
        format!("{}_{}{}", self.name, self.version, kind.file_suffix())
    }
}

impl std::fmt::Display for ResolvedProject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.name, self.version, self.uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_project_valid() {
        let project =
            ResolvedProject::new("u2".to_string(), "Widget".to_string(), "2.0".to_string())
                .unwrap();
        assert_eq!(project.uuid(), "u2");
        assert_eq!(project.name(), "Widget");
        assert_eq!(project.version(), "2.0");
    }

    #[test]
    fn test_resolved_project_empty_uuid() {
        let result =
            ResolvedProject::new("  ".to_string(), "Widget".to_string(), "2.0".to_string());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("uuid"));
    }

    #[test]
    fn test_resolved_project_empty_version() {
        let result = ResolvedProject::new("u1".to_string(), "Widget".to_string(), String::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_report_file_names() {
        let project =
            ResolvedProject::new("u2".to_string(), "Widget".to_string(), "2.0".to_string())
                .unwrap();
        assert_eq!(project.report_file_name(ReportKind::Vdr), "Widget_2.0_VDR.json");
        assert_eq!(
            project.report_file_name(ReportKind::PolicyViolations),
            "Widget_2.0_policy_violations.json"
        );
        assert_eq!(
            project.report_file_name(ReportKind::Dependencies),
            "Widget_2.0_dependencies.json"
        );
    }

    #[test]
    fn test_search_result_ignores_unknown_fields() {
        let json = r#"{
            "uuid": "b9213f2b-c073-4b24-b03e-30ea4e65664f",
            "name": "Widget",
            "version": "2.0",
            "classifier": "APPLICATION",
            "active": true,
            "tags": []
        }"#;
        let result: ProjectSearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.uuid, "b9213f2b-c073-4b24-b03e-30ea4e65664f");
        assert_eq!(result.name.as_deref(), Some("Widget"));
        assert_eq!(result.version.as_deref(), Some("2.0"));
    }

    #[test]
    fn test_search_result_null_version() {
        let json = r#"{"uuid": "u1", "name": "Widget", "version": null}"#;
        let result: ProjectSearchResult = serde_json::from_str(json).unwrap();
        assert!(result.version.is_none());
    }

    #[test]
    fn test_display() {
        let project =
            ResolvedProject::new("u2".to_string(), "Widget".to_string(), "2.0".to_string())
                .unwrap();
        assert_eq!(project.to_string(), "Widget 2.0 (u2)");
    }
}
