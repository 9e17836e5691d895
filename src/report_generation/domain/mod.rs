pub mod lenient;
pub mod occurrence;
pub mod project_report;
pub mod report_metadata;
pub mod vulnerability_group;

pub use occurrence::{Severity, VulnerabilityOccurrence};
pub use project_report::{ParsedInput, ProjectPath, ProjectReport};
pub use report_metadata::ReportMetadata;
pub use vulnerability_group::{
    GroupedVulnerabilities, VulnerabilityGroup, VulnerabilityMetadata, NO_DESCRIPTION_FALLBACK,
    NO_INFO_FALLBACK,
};
