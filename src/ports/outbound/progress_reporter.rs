/// ProgressReporter port for reporting progress during generation
///
/// This port abstracts console feedback (scanned images, link verification
/// progress, broken links) so the use case stays free of terminal details.
pub trait ProgressReporter {
    /// Reports an informational line
    fn report(&self, message: &str);

    /// Reports progress of a counted operation
    ///
    /// # Arguments
    /// * `current` - Items completed so far
    /// * `total` - Total expected items
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning line
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
