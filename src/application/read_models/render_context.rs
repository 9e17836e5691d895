use crate::report_generation::domain::{GroupedVulnerabilities, ProjectPath, ReportMetadata};
use serde::Serialize;
use serde_json::{Map, Value};

/// Top-level keys a single-project [`RenderContext`] always writes; input
/// fields with these names are replaced rather than passed through.
///
/// `paths` and `reportedVulnerabilityCount` are only set for multi-project
/// input, which has no pass-through fields, so they are not listed.
pub const RESERVED_KEYS: &[&str] = &[
    "vulnerabilities",
    "uniqueCount",
    "pathsCount",
    "summary",
    "showSummaryOnly",
    "path",
    "packageManager",
    "dependencyCount",
    "generator",
];

/// Data context passed to the template renderer
///
/// Serialized with camelCase keys; templates address fields such as
/// `uniqueCount` or `showSummaryOnly` directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderContext {
    /// Groups keyed by vulnerability id, in discovery order
    pub vulnerabilities: GroupedVulnerabilities,
    pub unique_count: usize,
    pub paths_count: usize,
    /// "<N> vulnerable dependency paths"
    pub summary: String,
    pub show_summary_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_manager: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependency_count: Option<u64>,
    /// Project provenance, multi-project input only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<ProjectPath>>,
    /// Raw vulnerability total before grouping, multi-project input only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reported_vulnerability_count: Option<usize>,
    pub generator: ReportMetadata,
    /// Remaining top-level fields of a single-project input
    #[serde(flatten)]
    pub passthrough: Map<String, Value>,
}

impl RenderContext {
    pub fn is_multi_project(&self) -> bool {
        self.paths.is_some()
    }
}
