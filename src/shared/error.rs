use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Negative codes are runtime failures against the server; the shell sees
/// them as `256 + code` (e.g. -3 is reported as 253).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// All requested reports were written (or best-effort mode tolerated failures)
    Success = 0,
    /// Configuration file was missing and a template has been written
    SetupRequired = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Local problem unrelated to the server (e.g. unusable output directory)
    ApplicationError = 3,
    /// The HTTP session could not be constructed
    ConnectionFailure = -1,
    /// The project search call failed or returned an unusable body
    SearchFailed = -2,
    /// The search succeeded but no project had the requested version
    ProjectNotFound = -3,
    /// At least one report could not be written (strict mode only)
    ReportFailed = -4,
    /// The configuration file exists but cannot be used
    InvalidConfig = -5,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::SetupRequired => write!(f, "Setup Required (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
            ExitCode::ConnectionFailure => write!(f, "Connection Failure (-1)"),
            ExitCode::SearchFailed => write!(f, "Search Failed (-2)"),
            ExitCode::ProjectNotFound => write!(f, "Project Not Found (-3)"),
            ExitCode::ReportFailed => write!(f, "Report Failed (-4)"),
            ExitCode::InvalidConfig => write!(f, "Invalid Config (-5)"),
        }
    }
}

/// Why an HTTP call did not yield a usable response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallFailure {
    /// The server answered with a non-success status code
    Status(u16),
    /// No response arrived (connection refused, timeout, TLS error, ...)
    Transport(String),
}

impl CallFailure {
    pub fn status(&self) -> Option<u16> {
        match self {
            CallFailure::Status(code) => Some(*code),
            CallFailure::Transport(_) => None,
        }
    }
}

impl fmt::Display for CallFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallFailure::Status(code) => write!(f, "HTTP status {}", code),
            CallFailure::Transport(details) => write!(f, "no response ({})", details),
        }
    }
}

/// Application-specific errors for report retrieval.
///
/// Every variant renders as a single line; the accompanying advice is
/// available separately through [`DtError::hint`].
#[derive(Debug, Error)]
pub enum DtError {
    #[error("Configuration file not found: {path} (a template has been written)")]
    ConfigMissing { path: PathBuf },

    #[error("Invalid configuration file: {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Cannot open a session with {base_url}: {details}")]
    ConnectionFailure { base_url: String, details: String },

    #[error("Project search for '{product}' failed: {cause}")]
    SearchFailed { product: String, cause: CallFailure },

    #[error("No project '{product}' with version '{version}' on the server ({})", describe_versions(.available))]
    NotFound {
        product: String,
        version: String,
        available: Vec<String>,
    },

    #[error("{endpoint} failed for project {uuid}: {cause}")]
    FetchFailed {
        endpoint: String,
        uuid: String,
        cause: CallFailure,
    },

    #[error("Unexpected response body from {endpoint}: {details}")]
    DecodeFailed { endpoint: String, details: String },

    #[error("Failed to write to file: {path}: {details}")]
    WriteFailed { path: PathBuf, details: String },

    #[error("{failed} of {attempted} report(s) could not be retrieved")]
    ReportsIncomplete { failed: usize, attempted: usize },
}

fn describe_versions(available: &[String]) -> String {
    if available.is_empty() {
        "the search returned no projects".to_string()
    } else {
        format!("available versions: {}", available.join(", "))
    }
}

impl DtError {
    /// Maps the error to the process exit code reported by the CLI
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DtError::ConfigMissing { .. } => ExitCode::SetupRequired,
            DtError::ConfigInvalid { .. } => ExitCode::InvalidConfig,
            DtError::ConnectionFailure { .. } => ExitCode::ConnectionFailure,
            // Only the search body is decoded before the reports phase
            DtError::SearchFailed { .. } | DtError::DecodeFailed { .. } => ExitCode::SearchFailed,
            DtError::NotFound { .. } => ExitCode::ProjectNotFound,
            DtError::FetchFailed { .. }
            | DtError::WriteFailed { .. }
            | DtError::ReportsIncomplete { .. } => ExitCode::ReportFailed,
        }
    }

    /// A short piece of advice for the user, if there is one
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            DtError::ConfigMissing { .. } => {
                Some("Fill in host_name and api_key in the template, then run the command again")
            }
            DtError::ConfigInvalid { .. } => Some(
                "The file needs a [dependency_track] section with non-empty host_name and api_key",
            ),
            DtError::ConnectionFailure { .. } => {
                Some("Check host_name: it must be a bare host name or IP address, without scheme or port")
            }
            DtError::SearchFailed { cause, .. } => match cause.status() {
                Some(401) | Some(403) => {
                    Some("Verify that the API key is valid and has the VIEW_PORTFOLIO permission")
                }
                Some(_) => None,
                None => Some("Verify that the server is running and reachable on port 8081"),
            },
            DtError::NotFound { .. } => {
                Some("Product names and versions are matched exactly, including case")
            }
            DtError::WriteFailed { .. } => {
                Some("Please verify that the directory exists and you have write permissions")
            }
            DtError::FetchFailed { .. }
            | DtError::DecodeFailed { .. }
            | DtError::ReportsIncomplete { .. } => None,
        }
    }
}
