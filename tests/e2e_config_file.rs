/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Write a config file at the specified path.
fn write_config(path: &std::path::Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn single_project() -> PathBuf {
    fixtures_path().join("single-project.json")
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_format() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join("vuln-digest.config.yml"), "format: json\n");

        let output = cargo_bin_cmd!("vuln-digest")
            .current_dir(dir.path())
            .arg("-i")
            .arg(single_project())
            .output()
            .unwrap();

        assert!(output.status.success());
        let context: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(context["uniqueCount"], 2);
    }

    #[test]
    fn test_auto_discovery_applies_summary_only() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("vuln-digest.config.yml"),
            "summary_only: true\n",
        );

        cargo_bin_cmd!("vuln-digest")
            .current_dir(dir.path())
            .arg("-i")
            .arg(single_project())
            .assert()
            .success()
            .stdout(predicate::str::contains("### Detailed paths").not())
            .stdout(predicate::str::contains("| Id | Title | Severity | Package | Paths |"));
    }

    #[test]
    fn test_auto_discovery_applies_template_and_output() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("short.hbs"), "{{uniqueCount}}/{{pathsCount}}").unwrap();
        write_config(
            &dir.path().join("vuln-digest.config.yml"),
            "template: short.hbs\noutput: digest.txt\n",
        );

        cargo_bin_cmd!("vuln-digest")
            .current_dir(dir.path())
            .arg("-i")
            .arg(single_project())
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let content = fs::read_to_string(dir.path().join("digest.txt")).unwrap();
        assert_eq!(content, "2/4");
    }

    #[test]
    fn test_no_config_uses_defaults() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("vuln-digest")
            .current_dir(dir.path())
            .arg("-i")
            .arg(single_project())
            .assert()
            .success()
            .stdout(predicate::str::contains("# Vulnerability report"));
    }
}

// ============================================================================
// Explicit --config Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "format: json\n");

        cargo_bin_cmd!("vuln-digest")
            .current_dir(dir.path())
            .arg("-c")
            .arg(&config_path)
            .arg("-i")
            .arg(single_project())
            .assert()
            .success()
            .stdout(predicate::str::contains("\"pathsCount\": 4"));
    }

    #[test]
    fn test_explicit_config_missing_file() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("vuln-digest")
            .current_dir(dir.path())
            .args(["--config", "missing.yml"])
            .arg("-i")
            .arg(single_project())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("vuln-digest.config.yml"),
            "format: [[[broken",
        );

        cargo_bin_cmd!("vuln-digest")
            .current_dir(dir.path())
            .arg("-i")
            .arg(single_project())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_format_in_config() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join("vuln-digest.config.yml"), "format: pdf\n");

        cargo_bin_cmd!("vuln-digest")
            .current_dir(dir.path())
            .arg("-i")
            .arg(single_project())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("format 'pdf' is not supported"));
    }

    #[test]
    fn test_unknown_field_warning() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("vuln-digest.config.yml"),
            "format: markdown\ncheck_cve: true\n",
        );

        cargo_bin_cmd!("vuln-digest")
            .current_dir(dir.path())
            .arg("-i")
            .arg(single_project())
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Unknown config field 'check_cve' will be ignored",
            ));
    }

    #[test]
    fn test_unknown_field_warning_follows_log_filter() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("vuln-digest.config.yml"),
            "format: markdown\ncheck_cve: true\n",
        );

        cargo_bin_cmd!("vuln-digest")
            .current_dir(dir.path())
            .env("VULN_DIGEST_LOG", "error")
            .arg("-i")
            .arg(single_project())
            .assert()
            .success()
            .stderr(predicate::str::contains("check_cve").not());
    }
}

// ============================================================================
// CLI Override Tests
// ============================================================================

mod cli_override_tests {
    use super::*;

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join("vuln-digest.config.yml"), "format: json\n");

        cargo_bin_cmd!("vuln-digest")
            .current_dir(dir.path())
            .args(["-f", "markdown", "-i"])
            .arg(single_project())
            .assert()
            .success()
            .stdout(predicate::str::contains("# Vulnerability report"));
    }

    #[test]
    fn test_cli_output_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("vuln-digest.config.yml"),
            "output: from-config.md\n",
        );

        cargo_bin_cmd!("vuln-digest")
            .current_dir(dir.path())
            .args(["-o", "from-cli.md", "-i"])
            .arg(single_project())
            .assert()
            .success();

        assert!(dir.path().join("from-cli.md").exists());
        assert!(!dir.path().join("from-config.md").exists());
    }
}
