/// ProgressReporter port for reporting progress during a run
///
/// This port abstracts user-facing progress output (e.g., to stderr) so that
/// report files and the final summary stay the only data the tool produces.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Starts an activity of unknown duration, such as waiting on the server
    fn begin_activity(&self, message: &str);

    /// Ends the activity started by `begin_activity`, if any
    fn end_activity(&self);

    /// Reports a step that completed successfully
    fn report_success(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the whole run
    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn begin_activity(&self, message: &str) {
        (**self).begin_activity(message)
    }

    fn end_activity(&self) {
        (**self).end_activity()
    }

    fn report_success(&self, message: &str) {
        (**self).report_success(message)
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}
