//! Configuration file support for vuln-digest.
//!
//! Provides YAML-based configuration through `vuln-digest.config.yml` files,
//! including data structures, file loading, validation and the merge with
//! command-line flags.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::warn;

use crate::cli::Args;
use vuln_digest::application::dto::{OutputFormat, ReportRequest};
use vuln_digest::shared::Result;

pub const CONFIG_FILENAME: &str = "vuln-digest.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub template: Option<String>,
    pub summary_only: Option<bool>,
    pub output: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if OutputFormat::from_str(format).is_err() {
            bail!(
                "Invalid config: format '{}' is not supported.\n\n\
                 💡 Hint: Use 'markdown' (or 'md') or 'json'.",
                format
            );
        }
    }

    if let Some(ref template) = config.template {
        if template.trim().is_empty() {
            bail!(
                "Invalid config: template must not be empty.\n\n\
                 💡 Hint: Remove the 'template' field to use the built-in Markdown template."
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        warn!(field = %key, "Unknown config field '{}' will be ignored.", key);
    }
}

/// Options after merging command-line flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub request: ReportRequest,
    pub output: Option<PathBuf>,
}

/// Merges flags and config. A flag that was given always wins.
pub fn resolve_options(args: &Args, config: Option<&ConfigFile>) -> Result<ResolvedOptions> {
    let format = match (args.format, config.and_then(|c| c.format.as_deref())) {
        (Some(format), _) => format,
        (None, Some(raw)) => OutputFormat::from_str(raw).map_err(anyhow::Error::msg)?,
        (None, None) => OutputFormat::default(),
    };

    let template = args
        .template
        .clone()
        .or_else(|| config.and_then(|c| c.template.as_deref()).map(PathBuf::from));

    let summary_only = args.summary || config.and_then(|c| c.summary_only).unwrap_or(false);

    let output = args
        .output
        .clone()
        .or_else(|| config.and_then(|c| c.output.as_deref()).map(PathBuf::from));

    let mut builder = ReportRequest::builder()
        .format(format)
        .summary_only(summary_only);
    if let Some(input) = &args.input {
        builder = builder.input(input.clone());
    }
    if let Some(template) = template {
        builder = builder.template(template);
    }

    Ok(ResolvedOptions {
        request: builder.build()?,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use vuln_digest::application::dto::TemplateRef;
    use std::fs;
    use tempfile::TempDir;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["vuln-digest"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: json
template: templates/report.hbs
summary_only: true
output: report.json
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
        assert_eq!(config.template.as_deref(), Some("templates/report.hbs"));
        assert_eq!(config.summary_only, Some(true));
        assert_eq!(config.output.as_deref(), Some("report.json"));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: md\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_some());
        assert_eq!(config.unwrap().format.as_deref(), Some("md"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_format_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: html\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("format 'html' is not supported"));
    }

    #[test]
    fn test_blank_template_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "template: \"   \"\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("template must not be empty"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: json
check_cve: true
severity_threshold: HIGH
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("check_cve"));
        assert!(config.unknown_fields.contains_key("severity_threshold"));
    }

    #[test]
    fn test_resolve_defaults_without_config() {
        let resolved = resolve_options(&args(&[]), None).unwrap();

        assert_eq!(resolved.request.input, None);
        assert_eq!(resolved.request.template, TemplateRef::BuiltIn);
        assert_eq!(resolved.request.format, OutputFormat::Markdown);
        assert!(!resolved.request.summary_only);
        assert_eq!(resolved.output, None);
    }

    #[test]
    fn test_resolve_uses_config_values() {
        let config = ConfigFile {
            format: Some("json".to_string()),
            template: Some("custom.hbs".to_string()),
            summary_only: Some(true),
            output: Some("out.json".to_string()),
            ..Default::default()
        };

        let resolved = resolve_options(&args(&["-i", "scan.json"]), Some(&config)).unwrap();

        assert_eq!(resolved.request.input, Some(PathBuf::from("scan.json")));
        assert_eq!(resolved.request.format, OutputFormat::Json);
        assert_eq!(
            resolved.request.template,
            TemplateRef::File(PathBuf::from("custom.hbs"))
        );
        assert!(resolved.request.summary_only);
        assert_eq!(resolved.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_resolve_flags_override_config() {
        let config = ConfigFile {
            format: Some("json".to_string()),
            template: Some("config.hbs".to_string()),
            output: Some("config.out".to_string()),
            ..Default::default()
        };

        let resolved = resolve_options(
            &args(&["-f", "markdown", "-t", "cli.hbs", "-o", "cli.md"]),
            Some(&config),
        )
        .unwrap();

        assert_eq!(resolved.request.format, OutputFormat::Markdown);
        assert_eq!(
            resolved.request.template,
            TemplateRef::File(PathBuf::from("cli.hbs"))
        );
        assert_eq!(resolved.output, Some(PathBuf::from("cli.md")));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.format.is_none());
        assert!(config.template.is_none());
        assert!(config.summary_only.is_none());
        assert!(config.output.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
