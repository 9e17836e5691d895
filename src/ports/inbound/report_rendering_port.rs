use crate::application::dto::{ReportRequest, ReportResponse};
use crate::shared::Result;
use async_trait::async_trait;

/// ReportRenderingPort - Inbound port for turning scan results into a report
///
/// The returned future is the completion continuation: it resolves to the
/// rendered document, or to the error that aborted the pipeline.
#[async_trait]
pub trait ReportRenderingPort {
    /// Reads, processes and renders one scan input
    ///
    /// # Errors
    /// Returns an error if:
    /// - The input cannot be read (file or stdin)
    /// - The input is not valid JSON
    /// - A template cannot be read or rendered
    async fn render_report(&self, request: ReportRequest) -> Result<ReportResponse>;
}
