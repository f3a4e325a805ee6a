/// ProgressReporter port for diagnostics during a run
///
/// Implementations must not write to stdout, which carries the table.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Signals that a long-running step (the data fetch) has started
    ///
    /// The default just reports the message.
    fn report_waiting(&self, message: &str) {
        self.report(message);
    }

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
