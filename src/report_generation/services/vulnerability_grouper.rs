use crate::report_generation::domain::{GroupedVulnerabilities, VulnerabilityOccurrence};

/// Outcome of grouping a flat list of occurrences
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupingResult {
    pub vulnerabilities: GroupedVulnerabilities,
    /// Number of distinct vulnerability ids
    pub unique_count: usize,
    /// Number of occurrences (vulnerable dependency paths)
    pub paths_count: usize,
}

/// VulnerabilityGrouper service for deduplicating occurrences by id
///
/// The first occurrence of an id decides the group's metadata; later ones
/// only extend its list. Output order is the order ids were first seen.
pub struct VulnerabilityGrouper;

impl VulnerabilityGrouper {
    /// Groups occurrences by vulnerability id
    ///
    /// # Arguments
    /// * `occurrences` - Occurrences in input order
    ///
    /// # Returns
    /// The ordered groups together with the unique and path counts
    pub fn group<I>(occurrences: I) -> GroupingResult
    where
        I: IntoIterator<Item = VulnerabilityOccurrence>,
    {
        let mut result = GroupingResult::default();

        for occurrence in occurrences {
            if result.vulnerabilities.insert(occurrence) {
                result.unique_count += 1;
            }
            result.paths_count += 1;
        }

        result
    }
}
