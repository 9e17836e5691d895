use crate::shared::Result;

/// OutputPresenter port for presenting the rendered report
///
/// This port abstracts the output destination (stdout, file, etc.).
pub trait OutputPresenter {
    /// Presents the rendered report
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is rejected by the security checks
    fn present(&self, content: &str) -> Result<()>;
}
