/// ReportResponse - response DTO of the report rendering use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportResponse {
    /// The rendered document
    pub content: String,
    /// Distinct vulnerability ids in the report
    pub unique_count: usize,
    /// Vulnerable dependency paths in the report
    pub paths_count: usize,
}

impl ReportResponse {
    pub fn new(content: String, unique_count: usize, paths_count: usize) -> Self {
        Self {
            content,
            unique_count,
            paths_count,
        }
    }
}
