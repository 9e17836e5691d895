use super::lenient::value_to_string;
use super::occurrence::VulnerabilityOccurrence;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// One project's scan results
///
/// Fields the pipeline interprets are lifted out; everything else stays in
/// `extra` and is passed through to the render context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectReport {
    pub vulnerabilities: Vec<VulnerabilityOccurrence>,
    /// Length of the input `vulnerabilities` list, malformed records included
    pub raw_vulnerability_count: usize,
    pub path: Option<String>,
    pub package_manager: Option<String>,
    pub dependency_count: Option<u64>,
    pub extra: Map<String, Value>,
}

impl ProjectReport {
    /// Builds a report from a parsed JSON document.
    ///
    /// Non-object values produce an empty report. A `vulnerabilities` field
    /// that is not a list counts as no vulnerabilities.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut fields) = value else {
            debug!("project report is not an object; treating it as empty");
            return Self::default();
        };

        let raw = fields.shift_remove("vulnerabilities");
        let raw_vulnerability_count = raw.as_ref().and_then(Value::as_array).map_or(0, Vec::len);
        let vulnerabilities = raw.map(parse_occurrences).unwrap_or_default();
        let path = fields.shift_remove("path").as_ref().and_then(value_to_string);
        let package_manager = fields
            .shift_remove("packageManager")
            .as_ref()
            .and_then(value_to_string);
        let dependency_count = fields
            .shift_remove("dependencyCount")
            .as_ref()
            .and_then(Value::as_u64);

        Self {
            vulnerabilities,
            raw_vulnerability_count,
            path,
            package_manager,
            dependency_count,
            extra: fields,
        }
    }
}

fn parse_occurrences(value: Value) -> Vec<VulnerabilityOccurrence> {
    let Value::Array(items) = value else {
        warn!("'vulnerabilities' is not a list; no vulnerabilities will be reported");
        return Vec::new();
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(position, item)| {
            match serde_json::from_value::<VulnerabilityOccurrence>(item) {
                Ok(occurrence) => Some(occurrence),
                Err(e) => {
                    warn!(position, error = %e, "skipping malformed vulnerability record");
                    None
                }
            }
        })
        .collect()
}

/// Shape of the scan input
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedInput {
    /// A single project object (or anything that is not a list)
    Single(ProjectReport),
    /// A list of project objects, one per scanned project
    Multi(Vec<ProjectReport>),
}

impl ParsedInput {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                ParsedInput::Multi(items.into_iter().map(ProjectReport::from_value).collect())
            }
            other => ParsedInput::Single(ProjectReport::from_value(other)),
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, ParsedInput::Multi(_))
    }
}

/// Provenance of one project in a multi-project report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPath {
    pub path: Option<String>,
    pub package_manager: Option<String>,
}
