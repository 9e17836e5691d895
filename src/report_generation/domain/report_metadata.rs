use serde::Serialize;

/// ReportMetadata value object: which tool rendered the report, and when
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMetadata {
    name: String,
    version: String,
    timestamp: String,
}

impl ReportMetadata {
    pub fn new(name: String, version: String, timestamp: String) -> Self {
        Self {
            name,
            version,
            timestamp,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}
