/// Heading used for synthesized remediation blocks
const REMEDIATION_HEADING: &str = "## Remediation";

/// Remediation text when neither the description nor the fixed versions help
pub const NO_REMEDIATION_TEXT: &str =
    "## Remediation\n\nThere is no remediation available at the moment.\n";

/// RemediationResolver derives remediation markdown for one vulnerability
///
/// Sources, strictly in this order:
/// 1. the description's own "Remediation" section (from its heading to the end)
/// 2. a sentence listing the `fixedIn` versions
/// 3. [`NO_REMEDIATION_TEXT`]
pub struct RemediationResolver;

impl RemediationResolver {
    /// Resolves the remediation block for a vulnerability
    ///
    /// # Arguments
    /// * `description` - Free-text (markdown) description, if any
    /// * `fixed_in` - Versions that fix the vulnerability, if known
    ///
    /// # Returns
    /// A markdown block starting at a Remediation heading
    pub fn resolve(description: Option<&str>, fixed_in: Option<&[String]>) -> String {
        if let Some(description) = description {
            if let Some(start) = Self::find_remediation_heading(description) {
                return description[start..].to_string();
            }
        }

        match fixed_in {
            Some(versions) if !versions.is_empty() => format!(
                "{}\n\nUpgrade to one of the fixed versions: {}\n",
                REMEDIATION_HEADING,
                versions.join(", ")
            ),
            _ => NO_REMEDIATION_TEXT.to_string(),
        }
    }

    /// Returns the part of a description that precedes its Remediation section
    ///
    /// Descriptions without such a section are returned whole. Trailing
    /// whitespace is trimmed.
    pub fn overview(description: Option<&str>) -> String {
        let Some(description) = description else {
            return String::new();
        };

        let end = Self::find_remediation_heading(description).unwrap_or(description.len());
        description[..end].trim_end().to_string()
    }

    /// Byte offset of the first line that is a markdown heading titled "Remediation"
    fn find_remediation_heading(description: &str) -> Option<usize> {
        let mut offset = 0;
        for line in description.split_inclusive('\n') {
            if Self::is_remediation_heading(line) {
                return Some(offset);
            }
            offset += line.len();
        }
        None
    }

    fn is_remediation_heading(line: &str) -> bool {
        let trimmed = line.trim_start();
        let text = trimmed.trim_start_matches('#');
        let level = trimmed.len() - text.len();
        (1..=6).contains(&level)
            && text.starts_with(char::is_whitespace)
            && text.trim_start().starts_with("Remediation")
    }
}
