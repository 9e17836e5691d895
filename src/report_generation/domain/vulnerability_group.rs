use super::occurrence::{Severity, VulnerabilityOccurrence};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Fallback text when the first occurrence carries no `info`
pub const NO_INFO_FALLBACK: &str = "No information available.";

/// Fallback text when the first occurrence carries no `description`
pub const NO_DESCRIPTION_FALLBACK: &str = "No description available.";

/// Display metadata of a vulnerability group, frozen at the first occurrence
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityMetadata {
    pub id: String,
    pub title: Option<String>,
    pub name: Option<String>,
    pub info: String,
    pub description: String,
    pub severity: Severity,
    pub severity_value: Option<u8>,
    pub fixed_in: Option<Vec<String>>,
    pub package_manager: Option<String>,
}

impl VulnerabilityMetadata {
    /// Derives metadata from an occurrence, applying the fallback texts
    pub fn from_occurrence(occurrence: &VulnerabilityOccurrence) -> Self {
        Self {
            id: occurrence.id.clone(),
            title: occurrence.title.clone(),
            name: occurrence.package_name.clone(),
            info: occurrence
                .info
                .clone()
                .unwrap_or_else(|| NO_INFO_FALLBACK.to_string()),
            description: occurrence
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION_FALLBACK.to_string()),
            severity: occurrence.severity,
            severity_value: occurrence.severity.rank(),
            fixed_in: occurrence.fixed_in.clone(),
            package_manager: occurrence.package_manager.clone(),
        }
    }
}

/// All occurrences sharing one identifier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VulnerabilityGroup {
    list: Vec<VulnerabilityOccurrence>,
    metadata: VulnerabilityMetadata,
}

impl VulnerabilityGroup {
    /// Starts a group seeded from its first occurrence
    pub fn new(first: VulnerabilityOccurrence) -> Self {
        let metadata = VulnerabilityMetadata::from_occurrence(&first);
        Self {
            list: vec![first],
            metadata,
        }
    }

    /// Appends a later occurrence. Metadata is left as it is.
    pub fn push(&mut self, occurrence: VulnerabilityOccurrence) {
        self.list.push(occurrence);
    }

    pub fn metadata(&self) -> &VulnerabilityMetadata {
        &self.metadata
    }

    pub fn occurrences(&self) -> &[VulnerabilityOccurrence] {
        &self.list
    }

    pub fn path_count(&self) -> usize {
        self.list.len()
    }
}

/// Insertion-ordered mapping from vulnerability id to its group
///
/// Serializes as a JSON object whose keys appear in discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedVulnerabilities {
    groups: Vec<VulnerabilityGroup>,
    index: HashMap<String, usize>,
}

impl GroupedVulnerabilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files an occurrence under its id.
    ///
    /// # Returns
    /// `true` when the occurrence opened a new group
    pub fn insert(&mut self, occurrence: VulnerabilityOccurrence) -> bool {
        match self.index.get(&occurrence.id) {
            Some(&position) => {
                self.groups[position].push(occurrence);
                false
            }
            None => {
                self.index
                    .insert(occurrence.id.clone(), self.groups.len());
                self.groups.push(VulnerabilityGroup::new(occurrence));
                true
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&VulnerabilityGroup> {
        self.index.get(id).map(|&position| &self.groups[position])
    }

    /// Number of distinct ids
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in discovery order
    pub fn iter(&self) -> impl Iterator<Item = &VulnerabilityGroup> {
        self.groups.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.metadata.id.as_str())
    }

    /// Total occurrences across all groups
    pub fn path_count(&self) -> usize {
        self.groups.iter().map(VulnerabilityGroup::path_count).sum()
    }
}

impl Serialize for GroupedVulnerabilities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.metadata.id, group)?;
        }
        map.end()
    }
}
