/// Path prefix of the Dependency-Track REST API
pub const API_PREFIX: &str = "/api/v1";

/// Page size requested from the project search; only the first page is read
pub const SEARCH_PAGE_SIZE: u32 = 100;

/// Media type of the CycloneDX JSON export
pub const CYCLONEDX_JSON: &str = "application/vnd.cyclonedx+json";

/// Media type of every other resource
pub const APPLICATION_JSON: &str = "application/json";

/// Server resources the client reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /project?name=...`, filtered by product name
    ProjectSearch { name: String },
    /// `GET /bom/cyclonedx/project/{uuid}?variant=vdr`
    Vdr { uuid: String },
    /// `GET /violation/project/{uuid}`
    PolicyViolations { uuid: String },
    /// `GET /dependency/project/{uuid}`
    Dependencies { uuid: String },
}

impl Endpoint {
    /// Path relative to the server root, including the API prefix
    pub fn path(&self) -> String {
        match self {
            Endpoint::ProjectSearch { .. } => format!("{}/project", API_PREFIX),
            Endpoint::Vdr { uuid } => format!(
                "{}/bom/cyclonedx/project/{}",
                API_PREFIX,
                urlencoding::encode(uuid)
            ),
            Endpoint::PolicyViolations { uuid } => format!(
                "{}/violation/project/{}",
                API_PREFIX,
                urlencoding::encode(uuid)
            ),
            Endpoint::Dependencies { uuid } => format!(
                "{}/dependency/project/{}",
                API_PREFIX,
                urlencoding::encode(uuid)
            ),
        }
    }

    /// Value of the `Accept` header for this resource
    pub fn accept(&self) -> &'static str {
        match self {
            Endpoint::Vdr { .. } => CYCLONEDX_JSON,
            Endpoint::ProjectSearch { .. }
            | Endpoint::PolicyViolations { .. }
            | Endpoint::Dependencies { .. } => APPLICATION_JSON,
        }
    }

    /// Query parameters, in the order they are sent
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::ProjectSearch { name } => vec![
                ("name", name.clone()),
                ("pageNumber", "1".to_string()),
                ("pageSize", SEARCH_PAGE_SIZE.to_string()),
            ],
            Endpoint::Vdr { .. } => vec![("variant", "vdr".to_string())],
            Endpoint::PolicyViolations { .. } | Endpoint::Dependencies { .. } => Vec::new(),
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GET {}", self.path())?;
        let query = self.query();
        if !query.is_empty() {
            let pairs: Vec<String> = query
                .iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
                .collect();
            write!(f, "?{}", pairs.join("&"))?;
        }
        Ok(())
    }
}
