use super::lenient;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Severity level reported by the scanner
///
/// Unrecognised or missing values map to `Unknown`, which has no rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    #[default]
    Unknown,
}

impl Severity {
    /// Parses a severity string case-insensitively.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Severity::Low,
            "medium" | "moderate" => Severity::Medium,
            "high" => Severity::High,
            "critical" => Severity::Critical,
            _ => Severity::Unknown,
        }
    }

    /// Numeric rank used for ordering in templates (low 0, medium 1, high 2, critical 3)
    pub fn rank(self) -> Option<u8> {
        match self {
            Severity::Low => Some(0),
            Severity::Medium => Some(1),
            Severity::High => Some(2),
            Severity::Critical => Some(3),
            Severity::Unknown => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
            Severity::Unknown => "unknown",
        }
    }

    /// Capitalised display label
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
            Severity::Unknown => "Unknown",
        }
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_str().map(Severity::parse).unwrap_or_default())
    }
}

/// One finding of a vulnerability on one dependency path
///
/// Every field is tolerant: wrong types become `None`. Fields this crate does
/// not interpret are kept in `extra` and handed to templates untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityOccurrence {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub package_name: Option<String>,
    #[serde(default)]
    pub severity: Severity,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub info: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub fixed_in: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub package_manager: Option<String>,
    /// Installed version of the vulnerable package
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,
    /// Dependency path from the project root to the vulnerable package
    #[serde(
        default,
        deserialize_with = "lenient::string_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub from: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VulnerabilityOccurrence {
    /// Minimal occurrence, mostly useful for tests and builders
    pub fn new(id: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: id.into(),
            severity,
            ..Self::default()
        }
    }
}
