use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// SourceReader port for reading raw text
///
/// Used for the scan results and for template fragments alike.
#[async_trait]
pub trait SourceReader: Send + Sync {
    /// Reads the whole source as text
    ///
    /// # Arguments
    /// * `source` - File to read, or `None` for standard input (read until EOF)
    ///
    /// # Errors
    /// Returns an error if the source cannot be opened or read. Failures are
    /// not retried.
    async fn read_all(&self, source: Option<&Path>) -> Result<String>;
}
