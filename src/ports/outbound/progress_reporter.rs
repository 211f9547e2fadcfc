/// ProgressReporter port for operator-facing diagnostics
///
/// Everything reported here goes to the operator (stderr for the CLI), never
/// into the rendered dashboard.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports progress through the records of a feed
    ///
    /// # Arguments
    /// * `current` - Records processed so far
    /// * `total` - Records in the feed
    /// * `message` - Optional detail, e.g. the record's service name
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or a degraded feed load
    fn report_error(&self, message: &str);

    /// Reports the end of a render pass
    fn report_completion(&self, message: &str);
}
