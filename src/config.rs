//! Configuration file support for dtrack-report.
//!
//! The server location and API key live in a small TOML file with a single
//! `[dependency_track]` section. When the file does not exist a template is
//! written in its place and the run stops so the user can fill it in.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::shared::error::DtError;
use crate::shared::security::{validate_file_size, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

pub const DEFAULT_CONFIG_FILENAME: &str = "config.toml";

/// Port of the Dependency-Track API server
pub const API_PORT: u16 = 8081;

const HOST_PLACEHOLDER: &str = "<dependency-track-host>";
const API_KEY_PLACEHOLDER: &str = "<api-key>";

/// Written when no configuration file exists yet
pub const CONFIG_TEMPLATE: &str = r#"# dtrack-report configuration
#
# host_name: host name or IP address of the Dependency-Track API server.
#            Requests go to http://<host_name>:8081/api/v1
# api_key:   API key of a team with the VIEW_PORTFOLIO and
#            VIEW_POLICY_VIOLATION permissions

[dependency_track]
host_name = "<dependency-track-host>"
api_key = "<api-key>"
"#;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub dependency_track: Option<ServerSection>,
    /// Captures unknown tables and keys for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, toml::Value>,
}

/// The `[dependency_track]` section.
#[derive(Debug, Deserialize, Default)]
pub struct ServerSection {
    #[serde(default)]
    pub host_name: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, toml::Value>,
}

/// Validated configuration for one run
///
/// Built once at startup and never modified afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    host_name: String,
    api_key: String,
}

impl Config {
    pub fn new(host_name: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let host_name = host_name.into().trim().to_string();
        let api_key = api_key.into().trim().to_string();

        validate_host_name(&host_name).map_err(|reason| anyhow::anyhow!(reason))?;
        if api_key.is_empty() {
            anyhow::bail!("api_key must not be empty");
        }
        if api_key == API_KEY_PLACEHOLDER {
            anyhow::bail!("api_key still holds the template placeholder");
        }

        Ok(Self { host_name, api_key })
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns a copy pointing at another host, keeping the API key
    pub fn with_host(&self, host_name: &str) -> Result<Self> {
        Self::new(host_name, self.api_key.clone())
    }

    /// Base URL of the server: `http://{host_name}:8081`, no trailing slash
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host_name, API_PORT)
    }
}

// The API key must never end up in logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host_name", &self.host_name)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Checks that a host name can be placed between `http://` and `:8081`
pub fn validate_host_name(host_name: &str) -> std::result::Result<(), String> {
    if host_name.is_empty() {
        return Err("host_name must not be empty".to_string());
    }
    if host_name == HOST_PLACEHOLDER {
        return Err("host_name still holds the template placeholder".to_string());
    }
    if host_name.contains("://") {
        return Err(format!(
            "host_name '{}' must not include a scheme; http:// is added automatically",
            host_name
        ));
    }
    if host_name.contains('/') || host_name.chars().any(char::is_whitespace) {
        return Err(format!(
            "host_name '{}' must be a bare host name or IP address",
            host_name
        ));
    }
    // Bracketed IPv6 literals are the only place a colon may appear
    if let Some(literal) = host_name
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        let is_ipv6_text = !literal.is_empty()
            && literal
                .chars()
                .all(|c| c.is_ascii_hexdigit() || c == ':' || c == '.');
        if !is_ipv6_text {
            return Err(format!(
                "host_name '{}' is not a valid IPv6 address literal",
                host_name
            ));
        }
        return Ok(());
    }
    if host_name.contains(':') {
        return Err(format!(
            "host_name '{}' must not include a port; port {} is always used",
            host_name, API_PORT
        ));
    }
    // '#', '?' and '@' would move the port out of the authority part of the URL
    let is_host_text = host_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_');
    if !is_host_text {
        return Err(format!(
            "host_name '{}' may only contain letters, digits, '-', '.' and '_'",
            host_name
        ));
    }
    Ok(())
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let invalid = |reason: String| DtError::ConfigInvalid {
        path: path.to_path_buf(),
        reason,
    };

    let metadata =
        fs::metadata(path).map_err(|e| invalid(format!("cannot read file: {}", e)))?;
    validate_file_size(metadata.len(), path, MAX_CONFIG_FILE_SIZE)
        .map_err(|e| invalid(e.to_string()))?;

    let content =
        fs::read_to_string(path).map_err(|e| invalid(format!("cannot read file: {}", e)))?;

    let file: ConfigFile = toml::from_str(&content)
        .map_err(|e| invalid(format!("not valid TOML: {}", e.message())))?;

    warn_unknown_fields(&file);

    let section = file
        .dependency_track
        .ok_or_else(|| invalid("missing [dependency_track] section".to_string()))?;

    let config =
        Config::new(section.host_name, section.api_key).map_err(|e| invalid(e.to_string()))?;
    tracing::debug!(path = %path.display(), host = config.host_name(), "configuration loaded");

    Ok(config)
}

/// Load config, writing a template first if the file does not exist.
///
/// # Errors
/// - `ConfigMissing` after the template has been written
/// - `ConfigInvalid` when the file exists but cannot be used
pub fn load_or_bootstrap(path: &Path) -> Result<Config> {
    if !path.exists() {
        write_template(path)?;
        return Err(DtError::ConfigMissing {
            path: path.to_path_buf(),
        }
        .into());
    }

    load_config_from_path(path)
}

/// Writes the configuration template, never replacing an existing file.
fn write_template(path: &Path) -> Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| DtError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: format!("cannot create configuration template: {}", e),
        })?;

    file.write_all(CONFIG_TEMPLATE.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| DtError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: format!("cannot write configuration template: {}", e),
        })?;

    tracing::info!(path = %path.display(), "configuration template written");
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(file: &ConfigFile) {
    for key in file.unknown_fields.keys() {
        tracing::warn!("Unknown config entry '{}' will be ignored", key);
    }
    if let Some(section) = &file.dependency_track {
        for key in section.unknown_fields.keys() {
            tracing::warn!(
                "Unknown config field 'dependency_track.{}' will be ignored",
                key
            );
        }
    }
}
