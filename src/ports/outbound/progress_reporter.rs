/// ProgressReporter port for reporting progress during report generation
///
/// Messages go to the user, not into the report; implementations must keep
/// them off stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a warning that does not stop the pipeline
    fn report_warning(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
