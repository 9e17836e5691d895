use crate::report_generation::domain::{ProjectPath, ProjectReport, VulnerabilityOccurrence};

/// Aggregate of several project reports
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedReport {
    /// All occurrences, in report order then occurrence order
    pub vulnerabilities: Vec<VulnerabilityOccurrence>,
    /// Sum of the raw vulnerability list lengths, malformed records included
    pub reported_vulnerability_count: usize,
    /// Sum of dependency counts (missing counts as zero)
    pub dependency_count: u64,
    /// One entry per input report, in order
    pub paths: Vec<ProjectPath>,
}

/// ReportMerger service for combining multi-project scan results
pub struct ReportMerger;

impl ReportMerger {
    /// Merges project reports into one logical report
    ///
    /// Top-level fields other than the vulnerabilities, path, package
    /// manager and dependency count are not carried over.
    pub fn merge(reports: Vec<ProjectReport>) -> MergedReport {
        let mut merged = MergedReport {
            paths: Vec::with_capacity(reports.len()),
            ..MergedReport::default()
        };

        for report in reports {
            merged.reported_vulnerability_count += report.raw_vulnerability_count;
            merged.dependency_count += report.dependency_count.unwrap_or(0);
            merged.paths.push(ProjectPath {
                path: report.path,
                package_manager: report.package_manager,
            });
            merged.vulnerabilities.extend(report.vulnerabilities);
        }

        merged
    }
}
