/// Result alias used across the crate.
///
/// Domain failures are raised as [`ReportError`](crate::shared::error::ReportError)
/// and travel as `anyhow::Error` so callers can print the whole cause chain.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
