//! Builder turning parsed scan input into a [`RenderContext`]
//!
//! Single-project input is grouped directly; multi-project input is merged
//! first. Either way the grouper's counts are the ones the summary uses.

use super::render_context::{RenderContext, RESERVED_KEYS};
use crate::report_generation::domain::{
    ParsedInput, ProjectReport, ReportMetadata, VulnerabilityOccurrence,
};
use crate::report_generation::services::{MergedReport, ReportMerger, VulnerabilityGrouper};
use serde_json::Map;
use tracing::debug;

pub struct RenderContextBuilder;

impl RenderContextBuilder {
    /// Processes parsed input into the context handed to the renderer
    ///
    /// # Arguments
    /// * `input` - Single- or multi-project scan input
    /// * `summary_only` - Display flag copied verbatim into the context
    /// * `metadata` - Tool name, version and timestamp
    pub fn process(
        input: ParsedInput,
        summary_only: bool,
        metadata: ReportMetadata,
    ) -> RenderContext {
        match input {
            ParsedInput::Single(report) => Self::from_single(report, summary_only, metadata),
            ParsedInput::Multi(reports) => {
                debug!(projects = reports.len(), "merging multi-project input");
                Self::from_merged(ReportMerger::merge(reports), summary_only, metadata)
            }
        }
    }

    /// Summary line shown at the top of a report
    pub fn summary_line(paths_count: usize) -> String {
        format!("{} vulnerable dependency paths", paths_count)
    }

    fn from_single(
        report: ProjectReport,
        summary_only: bool,
        metadata: ReportMetadata,
    ) -> RenderContext {
        let mut passthrough = report.extra;
        for key in RESERVED_KEYS {
            passthrough.shift_remove(*key);
        }

        let mut context = Self::grouped(report.vulnerabilities, summary_only, metadata);
        context.path = report.path;
        context.package_manager = report.package_manager;
        context.dependency_count = report.dependency_count;
        context.passthrough = passthrough;
        context
    }

    fn from_merged(
        merged: MergedReport,
        summary_only: bool,
        metadata: ReportMetadata,
    ) -> RenderContext {
        let mut context = Self::grouped(merged.vulnerabilities, summary_only, metadata);
        context.dependency_count = Some(merged.dependency_count);
        context.paths = Some(merged.paths);
        context.reported_vulnerability_count = Some(merged.reported_vulnerability_count);
        context
    }

    fn grouped(
        occurrences: Vec<VulnerabilityOccurrence>,
        summary_only: bool,
        metadata: ReportMetadata,
    ) -> RenderContext {
        let grouping = VulnerabilityGrouper::group(occurrences);
        debug!(
            unique = grouping.unique_count,
            paths = grouping.paths_count,
            "grouped vulnerabilities"
        );

        RenderContext {
            vulnerabilities: grouping.vulnerabilities,
            unique_count: grouping.unique_count,
            paths_count: grouping.paths_count,
            summary: Self::summary_line(grouping.paths_count),
            show_summary_only: summary_only,
            path: None,
            package_manager: None,
            dependency_count: None,
            paths: None,
            reported_vulnerability_count: None,
            generator: metadata,
            passthrough: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_metadata() -> ReportMetadata {
        ReportMetadata::new(
            "vuln-digest".to_string(),
            "0.1.0".to_string(),
            "2024-01-15T10:30:00Z".to_string(),
        )
    }

    fn process(value: serde_json::Value, summary_only: bool) -> RenderContext {
        RenderContextBuilder::process(
            ParsedInput::from_value(value),
            summary_only,
            create_test_metadata(),
        )
    }

    #[test]
    fn test_single_project_grouping() {
        let context = process(
            json!({
                "vulnerabilities": [
                    {"id": "A", "title": "Shared", "severity": "high"},
                    {"id": "A", "title": "Shared", "severity": "high"},
                    {"id": "B", "title": "Other", "severity": "low"},
                    {"id": "A", "title": "Shared", "severity": "high"}
                ],
                "dependencyCount": 12,
                "path": "/srv/app",
                "packageManager": "npm"
            }),
            false,
        );

        assert_eq!(context.vulnerabilities.len(), 2);
        assert_eq!(context.unique_count, 2);
        assert_eq!(context.paths_count, 4);
        assert_eq!(context.summary, "4 vulnerable dependency paths");
        assert_eq!(context.dependency_count, Some(12));
        assert_eq!(context.path.as_deref(), Some("/srv/app"));
        assert!(!context.is_multi_project());
        assert_eq!(context.reported_vulnerability_count, None);
    }

    #[test]
    fn test_multi_project_grouping() {
        let context = process(
            json!([
                {"vulnerabilities": [{"id": "v1"}, {"id": "v2"}], "dependencyCount": 3, "path": "a", "packageManager": "npm"},
                {"vulnerabilities": [{"id": "v3"}], "dependencyCount": 4, "path": "b", "packageManager": "pip"}
            ]),
            false,
        );

        assert_eq!(context.unique_count, 3);
        assert_eq!(context.paths_count, 3);
        assert_eq!(context.summary, "3 vulnerable dependency paths");
        assert_eq!(context.dependency_count, Some(7));
        assert_eq!(context.reported_vulnerability_count, Some(3));
        let paths = context.paths.as_ref().unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[1].package_manager.as_deref(), Some("pip"));
    }

    #[test]
    fn test_multi_project_keeps_both_counts_distinct() {
        let context = process(
            json!([
                {"vulnerabilities": [{"id": "dup"}, {"id": "dup"}]},
                {"vulnerabilities": [{"id": "dup"}]}
            ]),
            false,
        );

        assert_eq!(context.unique_count, 1);
        assert_eq!(context.paths_count, 3);
        assert_eq!(context.reported_vulnerability_count, Some(3));
    }

    #[test]
    fn test_reported_count_includes_malformed_records() {
        let context = process(
            json!([
                {"vulnerabilities": [{"id": "a"}, 17, "junk"]},
                {"vulnerabilities": [{"id": "b"}]}
            ]),
            false,
        );

        assert_eq!(context.reported_vulnerability_count, Some(4));
        assert_eq!(context.unique_count, 2);
        assert_eq!(context.paths_count, 2);
    }

    #[test]
    fn test_summary_only_flag_is_copied() {
        assert!(process(json!({"vulnerabilities": []}), true).show_summary_only);
        assert!(!process(json!({"vulnerabilities": []}), false).show_summary_only);
    }

    #[test]
    fn test_passthrough_fields_survive() {
        let context = process(
            json!({
                "vulnerabilities": [],
                "projectName": "shop",
                "ok": true,
                "summary": "stale summary from the scanner",
                "uniqueCount": 99
            }),
            false,
        );

        assert_eq!(context.passthrough.get("projectName"), Some(&json!("shop")));
        assert_eq!(context.passthrough.get("ok"), Some(&json!(true)));
        assert!(!context.passthrough.contains_key("summary"));
        assert!(!context.passthrough.contains_key("uniqueCount"));
        assert_eq!(context.summary, "0 vulnerable dependency paths");
        assert_eq!(context.unique_count, 0);
    }

    #[test]
    fn test_multi_only_keys_pass_through_single_input() {
        let context = process(
            json!({
                "vulnerabilities": [],
                "paths": ["scanner", "list"],
                "reportedVulnerabilityCount": 7,
                "generator": "snyk"
            }),
            false,
        );

        assert_eq!(context.passthrough.get("paths"), Some(&json!(["scanner", "list"])));
        assert_eq!(
            context.passthrough.get("reportedVulnerabilityCount"),
            Some(&json!(7))
        );
        assert!(!context.passthrough.contains_key("generator"));

        let value = serde_json::to_value(&context).unwrap();
        assert_eq!(value["paths"], json!(["scanner", "list"]));
        assert_eq!(value["reportedVulnerabilityCount"], 7);
        assert_eq!(value["generator"]["name"], "vuln-digest");
    }

    #[test]
    fn test_malformed_top_level_degrades_to_empty() {
        for value in [json!(42), json!("text"), json!(null), json!({"vulnerabilities": {}})] {
            let context = process(value, false);
            assert!(context.vulnerabilities.is_empty());
            assert_eq!(context.unique_count, 0);
            assert_eq!(context.paths_count, 0);
        }
    }

    #[test]
    fn test_empty_multi_project_list() {
        let context = process(json!([]), false);
        assert_eq!(context.unique_count, 0);
        assert_eq!(context.dependency_count, Some(0));
        assert_eq!(context.paths.as_deref(), Some(&[][..]));
    }

    #[test]
    fn test_serialized_keys() {
        let context = process(
            json!({"vulnerabilities": [{"id": "A"}], "projectName": "shop"}),
            true,
        );
        let value = serde_json::to_value(&context).unwrap();

        assert_eq!(value["uniqueCount"], 1);
        assert_eq!(value["pathsCount"], 1);
        assert_eq!(value["showSummaryOnly"], true);
        assert_eq!(value["projectName"], "shop");
        assert_eq!(value["generator"]["name"], "vuln-digest");
        assert_eq!(
            value["vulnerabilities"]["A"]["metadata"]["description"],
            "No description available."
        );
        assert!(value.get("paths").is_none());
    }
}
