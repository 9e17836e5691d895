mod metadata_generator;
mod remediation_resolver;
mod report_merger;
mod vulnerability_grouper;

pub use metadata_generator::MetadataGenerator;
pub use remediation_resolver::{RemediationResolver, NO_REMEDIATION_TEXT};
pub use report_merger::{MergedReport, ReportMerger};
pub use vulnerability_grouper::{GroupingResult, VulnerabilityGrouper};
