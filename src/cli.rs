use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use std::path::PathBuf;

use dtrack_report::config::{validate_host_name, DEFAULT_CONFIG_FILENAME};
use dtrack_report::prelude::DependencyTrackClient;

/// Download the VDR and policy violations of a product version from Dependency-Track
#[derive(Parser, Debug)]
#[command(name = "dtrack-report")]
#[command(version)]
#[command(
    about = "Download the VDR and policy violations of a product version from Dependency-Track",
    long_about = None
)]
pub struct Args {
    /// Project name as registered in Dependency-Track
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub product_name: String,

    /// Project version (matched exactly, including case)
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub product_version: String,

    /// Configuration file holding host_name and api_key
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Server host name or IP address, overriding host_name from the configuration
    #[arg(long, value_parser = parse_host)]
    pub host: Option<String>,

    /// Directory the report files are written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Timeout for each request, in seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = DependencyTrackClient::DEFAULT_TIMEOUT_SECONDS,
        value_parser = clap::value_parser!(u64).range(1..=3600)
    )]
    pub timeout: u64,

    /// Also download the project's dependency listing
    #[arg(long)]
    pub include_dependencies: bool,

    /// Exit with an error if any report could not be retrieved
    #[arg(long)]
    pub strict: bool,

    /// Print request-level diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_host(value: &str) -> Result<String, String> {
    let host = value.trim();
    validate_host_name(host)?;
    Ok(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_arguments() {
        let args = Args::try_parse_from(["dtrack-report", "Widget", "2.0"]).unwrap();
        assert_eq!(args.product_name, "Widget");
        assert_eq!(args.product_version, "2.0");
        assert_eq!(args.config, PathBuf::from("config.toml"));
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert_eq!(args.timeout, 30);
        assert!(args.host.is_none());
        assert!(!args.include_dependencies);
        assert!(!args.strict);
    }

    #[test]
    fn test_missing_version_is_rejected() {
        assert!(Args::try_parse_from(["dtrack-report", "Widget"]).is_err());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        assert!(Args::try_parse_from(["dtrack-report", "", "2.0"]).is_err());
    }

    #[test]
    fn test_all_options() {
        let args = Args::try_parse_from([
            "dtrack-report",
            "Widget",
            "2.0",
            "-c",
            "/etc/dtrack/config.toml",
            "--host",
            "192.168.1.24",
            "-o",
            "reports",
            "--timeout",
            "5",
            "--include-dependencies",
            "--strict",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.config, PathBuf::from("/etc/dtrack/config.toml"));
        assert_eq!(args.host.as_deref(), Some("192.168.1.24"));
        assert_eq!(args.output_dir, PathBuf::from("reports"));
        assert_eq!(args.timeout, 5);
        assert!(args.include_dependencies);
        assert!(args.strict);
        assert!(args.verbose);
    }

    #[test]
    fn test_host_with_scheme_is_rejected() {
        let result = Args::try_parse_from([
            "dtrack-report",
            "Widget",
            "2.0",
            "--host",
            "http://192.168.1.24",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = Args::try_parse_from(["dtrack-report", "Widget", "2.0", "--timeout", "0"]);
        assert!(result.is_err());
    }
}
