/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/evidence")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("evidence-dashboard")
            .args(["--feed", &fixture("index.json")])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("evidence-dashboard")
            .arg("--help")
            .assert()
            .code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("evidence-dashboard")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 1: Feed degraded - malformed feed still renders
    #[test]
    fn test_exit_code_malformed_feed() {
        cargo_bin_cmd!("evidence-dashboard")
            .args(["--feed", &fixture("malformed.json")])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("failed to parse"))
            .stdout(predicate::str::contains("No records"));
    }

    /// Exit code 1: Feed degraded - missing default feed
    #[test]
    fn test_exit_code_missing_default_feed() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("evidence-dashboard")
            .current_dir(dir.path())
            .assert()
            .code(1)
            .stdout(predicate::str::contains("id=\"status-line\""))
            .stdout(predicate::str::contains("<table").not());
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("evidence-dashboard")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("evidence-dashboard")
            .args(["-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid dialect value
    #[test]
    fn test_exit_code_invalid_dialect() {
        cargo_bin_cmd!("evidence-dashboard")
            .args(["--dialect", "yaml"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - explicit config file does not exist
    #[test]
    fn test_exit_code_missing_config_file() {
        cargo_bin_cmd!("evidence-dashboard")
            .args(["-c", "/nonexistent/evidence-dashboard.config.yml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("An error occurred"));
    }

    /// Exit code 3: Application error - zero timeout
    #[test]
    fn test_exit_code_zero_timeout() {
        cargo_bin_cmd!("evidence-dashboard")
            .args(["--feed", &fixture("index.json"), "--timeout", "0"])
            .assert()
            .code(3);
    }

    /// Exit code 3: Application error - invalid config value
    #[test]
    fn test_exit_code_invalid_config_value() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: pdf\n").unwrap();

        cargo_bin_cmd!("evidence-dashboard")
            .args(["-c", config_path.to_str().unwrap()])
            .assert()
            .code(3);
    }
}

mod output_tests {
    use super::*;

    #[test]
    fn test_html_output_to_stdout() {
        cargo_bin_cmd!("evidence-dashboard")
            .args(["--feed", &fixture("index.json")])
            .assert()
            .code(0)
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("records: 4 / 4"))
            .stdout(predicate::str::contains(
                "Generated at 2024-05-01T12:00:00Z from acme/deployments",
            ))
            .stdout(predicate::str::contains("<script>alert").not());
    }

    #[test]
    fn test_env_filter() {
        cargo_bin_cmd!("evidence-dashboard")
            .args(["--feed", &fixture("index.json"), "--env", "prod"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("records: 2 / 4"));
    }

    #[test]
    fn test_unmatched_env_filter_warns() {
        cargo_bin_cmd!("evidence-dashboard")
            .args(["--feed", &fixture("index.json"), "--env", "qa"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("records: 0 / 4"))
            .stderr(predicate::str::contains("Environment filter 'qa'"));
    }

    #[test]
    fn test_markdown_format() {
        cargo_bin_cmd!("evidence-dashboard")
            .args(["--feed", &fixture("index.json"), "-f", "markdown"])
            .assert()
            .code(0)
            .stdout(predicate::str::starts_with("# Latest Evidence Summary"))
            .stdout(predicate::str::contains(
                "| service | env | harbor digest | syncedAt | smoke | links |",
            ));
    }

    #[test]
    fn test_json_format() {
        let output = cargo_bin_cmd!("evidence-dashboard")
            .args(["--feed", &fixture("index.json"), "-f", "json"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(parsed["status_line"], "records: 4 / 4");
        assert_eq!(parsed["rows"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_records_dialect() {
        cargo_bin_cmd!("evidence-dashboard")
            .args([
                "--feed",
                &fixture("records.json"),
                "--dialect",
                "records",
                "-f",
                "markdown",
            ])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("records: 2 / 2"));
    }

    #[test]
    fn test_output_file() {
        let dir = TempDir::new().unwrap();
        let output_path = dir.path().join("dashboard.html");

        cargo_bin_cmd!("evidence-dashboard")
            .args([
                "--feed",
                &fixture("index.json"),
                "-o",
                output_path.to_str().unwrap(),
            ])
            .assert()
            .code(0)
            .stdout(predicate::str::is_empty());

        let content = fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("records: 4 / 4"));
    }

    #[test]
    fn test_config_file_with_cli_override() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("evidence-dashboard.config.yml");
        fs::write(
            &config_path,
            format!(
                "feed: {}\nformat: markdown\nenv: prod\n",
                fixture("index.json")
            ),
        )
        .unwrap();

        cargo_bin_cmd!("evidence-dashboard")
            .args(["-c", config_path.to_str().unwrap(), "--env", "dev"])
            .assert()
            .code(0)
            .stdout(predicate::str::starts_with("# Latest Evidence Summary"))
            .stdout(predicate::str::contains("records: 1 / 4"));
    }

    #[test]
    fn test_config_file_discovered_in_working_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("evidence-dashboard.config.yml"),
            format!("feed: {}\nformat: json\n", fixture("index.json")),
        )
        .unwrap();

        cargo_bin_cmd!("evidence-dashboard")
            .current_dir(dir.path())
            .assert()
            .code(0)
            .stdout(predicate::str::contains("\"status_line\": \"records: 4 / 4\""));
    }
}
