mod cli;

use cli::Args;
use dtrack_report::config;
use dtrack_report::prelude::*;
use dtrack_report::shared::security::validate_output_directory;
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command-line arguments (clap exits with code 2 on errors)
    let args = Args::parse_args();
    init_tracing(args.verbose);

    let exit_code = match run(&args) {
        Ok(code) => code,
        Err(e) => report_failure(&e),
    };

    process::exit(exit_code.as_i32());
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "dtrack_report=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}

fn run(args: &Args) -> Result<ExitCode> {
    let progress_reporter = StderrProgressReporter::new();

    // Step 1: Load configuration (writes a template on first run)
    let mut config = config::load_or_bootstrap(&args.config)?;
    if let Some(host) = &args.host {
        config = config.with_host(host)?;
    }
    validate_output_directory(&args.output_dir)?;

    // Step 2: Build the authenticated session
    let client = DependencyTrackClient::new(&config, Duration::from_secs(args.timeout))?;
    progress_reporter.report(&format!(
        "🔗 Using Dependency-Track at {}",
        config.base_url()
    ));

    // Step 3: Resolve the project and fetch its reports
    let writer = FileSystemReportWriter::new(args.output_dir.clone());
    let use_case = RetrieveReportsUseCase::new(client, writer, &progress_reporter);

    let mut request = ReportRequest::new(&args.product_name, &args.product_version);
    if args.include_dependencies {
        request = request.with_dependencies();
    }
    let response = use_case.execute(request)?;

    // Step 4: Summarize
    for path in response.written_paths() {
        println!("{}", path.display());
    }
    progress_reporter.report_completion(&format!(
        "📄 {} of {} report(s) written for {} {}",
        response.written_paths().len(),
        response.outcomes.len(),
        response.project.name(),
        response.project.version()
    ));

    if args.strict {
        response.require_complete()?;
    }

    Ok(ExitCode::Success)
}

/// Prints a one-line message (plus hint) and picks the exit code
fn report_failure(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<DtError>() {
        Some(dt_error) => {
            let exit_code = dt_error.exit_code();
            if exit_code == ExitCode::SetupRequired {
                eprintln!("⚙️  {}", dt_error);
            } else {
                eprintln!("❌ {}", dt_error);
            }
            if let Some(hint) = dt_error.hint() {
                eprintln!("💡 Hint: {}", hint);
            }
            exit_code
        }
        None => {
            eprintln!("❌ {}", error);
            ExitCode::ApplicationError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtrack_report::shared::error::CallFailure;
    use std::path::PathBuf;

    #[test]
    fn test_report_failure_maps_taxonomy() {
        let not_found: anyhow::Error = DtError::NotFound {
            product: "Widget".to_string(),
            version: "2.0".to_string(),
            available: vec![],
        }
        .into();
        assert_eq!(report_failure(&not_found), ExitCode::ProjectNotFound);

        let search_failed: anyhow::Error = DtError::SearchFailed {
            product: "Widget".to_string(),
            cause: CallFailure::Status(500),
        }
        .into();
        assert_eq!(report_failure(&search_failed), ExitCode::SearchFailed);

        let missing: anyhow::Error = DtError::ConfigMissing {
            path: PathBuf::from("config.toml"),
        }
        .into();
        assert_eq!(report_failure(&missing), ExitCode::SetupRequired);
    }

    #[test]
    fn test_report_failure_other_errors() {
        let error = anyhow::anyhow!("Output directory does not exist: /nowhere");
        assert_eq!(report_failure(&error), ExitCode::ApplicationError);
    }
}
