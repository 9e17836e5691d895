use crate::report_generation::domain::ReportMetadata;
use chrono::Utc;

/// MetadataGenerator service for stamping a report with tool information
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates metadata with the current UTC timestamp (RFC 3339)
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        ReportMetadata::new(
            tool_name.to_string(),
            tool_version.to_string(),
            Utc::now().to_rfc3339(),
        )
    }

    /// Generates metadata for this tool, using the compile-time version
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
