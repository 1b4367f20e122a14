use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::io::IsTerminal;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with stdout output.
/// Uses an indicatif spinner while waiting on the server.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
    use_color: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
            use_color: std::io::stderr().is_terminal(),
        }
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }

    fn begin_activity(&self, message: &str) {
        self.clear_spinner();
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn end_activity(&self) {
        self.clear_spinner();
    }

    fn report_success(&self, message: &str) {
        self.clear_spinner();
        if self.use_color {
            eprintln!("{} {}", "✅".green(), message);
        } else {
            eprintln!("✅ {}", message);
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_spinner();
        if self.use_color {
            eprintln!("{} {}", "❌".red(), message.red());
        } else {
            eprintln!("❌ {}", message);
        }
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        eprintln!();
        if self.use_color {
            eprintln!("{}", message.bold());
        } else {
            eprintln!("{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = StderrProgressReporter::new();
        // Can't easily test stderr output, but verify it doesn't panic
        reporter.report("Test message");
        reporter.begin_activity("Waiting");
        reporter.report_success("Done");
        reporter.report_error("Test error");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_end_activity_without_begin() {
        let reporter = StderrProgressReporter::default();
        reporter.end_activity();
        reporter.begin_activity("Waiting");
        reporter.end_activity();
        assert!(reporter.spinner.borrow().is_none());
    }
}
