//! CLI integration tests
//!
//! These tests run the ruleconv binary and verify:
//! - export: output framing, exit codes, diagnostics on stderr
//! - configuration: ruleconv.toml discovery and flag overrides
//! - init: creates the config, --force behavior
//!
//! Every test runs in its own temporary directory through
//! `Command::current_dir`, so the test process never changes directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const RULES: &str = r#"{"version": 1, "rules": [
  {"domain": ["example.com"], "domain_suffix": ["example.org", ".cdn.example.org"]},
  {"domain_suffix": ["example.net"]}
]}"#;

const RULES_WITH_GAP: &str = r#"[
  {"domain": ["example.com"], "ip_cidr": ["10.0.0.0/8"]}
]"#;

const EXPECTED_TEXT: &str = "example.com\n+.example.org\n.cdn.example.org\n+.example.net";

fn ruleconv(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ruleconv").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn project(rules: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("rules.json"), rules).unwrap();
    temp_dir
}

#[test]
fn test_export_text_to_stdout() {
    let temp_dir = project(RULES);
    ruleconv(temp_dir.path())
        .args(["export", "rules.json", "--format", "text"])
        .assert()
        .success()
        .stdout(EXPECTED_TEXT)
        .stderr("");
}

#[test]
fn test_export_defaults_to_yaml() {
    let temp_dir = project(RULES);
    let output = ruleconv(temp_dir.path())
        .args(["export", "rules.json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: serde_yaml::Value = serde_yaml::from_slice(&output).unwrap();
    let lines: Vec<&str> = payload["payload"]
        .as_sequence()
        .unwrap()
        .iter()
        .map(|line| line.as_str().unwrap())
        .collect();
    assert_eq!(lines, EXPECTED_TEXT.split('\n').collect::<Vec<_>>());
}

#[test]
fn test_export_json() {
    let temp_dir = project(RULES);
    ruleconv(temp_dir.path())
        .args(["export", "rules.json", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"payload\""))
        .stdout(predicate::str::contains("\"+.example.net\""));
}

#[test]
fn test_export_from_stdin() {
    let temp_dir = TempDir::new().unwrap();
    ruleconv(temp_dir.path())
        .args(["export", "-", "-f", "text"])
        .write_stdin(RULES)
        .assert()
        .success()
        .stdout(EXPECTED_TEXT);
}

#[test]
fn test_export_to_file() {
    let temp_dir = project(RULES);
    ruleconv(temp_dir.path())
        .args(["export", "rules.json", "-f", "text", "-o", "out.txt"])
        .assert()
        .success()
        .stdout("");

    let written = fs::read_to_string(temp_dir.path().join("out.txt")).unwrap();
    assert_eq!(written, EXPECTED_TEXT);
}

#[test]
fn test_lenient_gap_warns_on_stderr() {
    let temp_dir = project(RULES_WITH_GAP);
    ruleconv(temp_dir.path())
        .args(["export", "rules.json", "-f", "text", "--color", "never"])
        .assert()
        .success()
        .stdout("example.com")
        .stderr(predicate::str::contains(
            "warning: field `ip_cidr` is not supported by meta-domain rule sets",
        ));
}

#[test]
fn test_pedantic_gap_fails_without_output() {
    let temp_dir = project(RULES_WITH_GAP);
    ruleconv(temp_dir.path())
        .args([
            "export",
            "rules.json",
            "-f",
            "text",
            "-o",
            "out.txt",
            "--pedantic",
            "--color",
            "never",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: incapable output: field `ip_cidr`"))
        .stderr(predicate::str::contains("warning:").not());

    assert!(!temp_dir.path().join("out.txt").exists());
}

#[test]
fn test_logical_rule_fails_in_lenient_mode() {
    let temp_dir = project(r#"[{"type": "logical", "mode": "and", "rules": []}]"#);
    ruleconv(temp_dir.path())
        .args(["export", "rules.json", "--color", "never"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("logical rule is not supported"));
}

#[test]
fn test_unknown_rule_type_is_parse_error() {
    let temp_dir = project(r#"[{"type": "bogus", "domain": ["a.com"]}]"#);
    ruleconv(temp_dir.path())
        .args(["export", "rules.json", "--color", "never"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error: unexpected rule type: bogus"));
}

#[test]
fn test_invalid_json_is_parse_error() {
    let temp_dir = project("{ not json");
    ruleconv(temp_dir.path())
        .args(["export", "rules.json"])
        .assert()
        .code(3);
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    ruleconv(temp_dir.path())
        .args(["export", "missing.json", "--color", "never"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error: I/O error"));
}

#[test]
fn test_config_file_in_working_directory() {
    let temp_dir = project(RULES_WITH_GAP);
    fs::write(
        temp_dir.path().join("ruleconv.toml"),
        "[policy]\npedantic = true\n\n[output]\nformat = \"text\"\n",
    )
    .unwrap();

    ruleconv(temp_dir.path())
        .args(["export", "rules.json"])
        .assert()
        .code(1);

    fs::write(temp_dir.path().join("rules.json"), RULES).unwrap();
    ruleconv(temp_dir.path())
        .args(["export", "rules.json"])
        .assert()
        .success()
        .stdout(EXPECTED_TEXT);
}

#[test]
fn test_lenient_flag_relaxes_pedantic_config() {
    let temp_dir = project(RULES_WITH_GAP);
    fs::write(
        temp_dir.path().join("ruleconv.toml"),
        "[policy]\npedantic = true\n",
    )
    .unwrap();

    ruleconv(temp_dir.path())
        .args(["export", "rules.json", "-f", "text", "--lenient", "--color", "never"])
        .assert()
        .success()
        .stdout("example.com")
        .stderr(predicate::str::contains(
            "warning: field `ip_cidr` is not supported by meta-domain rule sets",
        ));
}

#[test]
fn test_format_flag_overrides_config() {
    let temp_dir = project(RULES);
    fs::write(
        temp_dir.path().join("ruleconv.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    ruleconv(temp_dir.path())
        .args(["export", "rules.json", "-f", "text"])
        .assert()
        .success()
        .stdout(EXPECTED_TEXT);
}

#[test]
fn test_explicit_config_must_exist() {
    let temp_dir = project(RULES);
    ruleconv(temp_dir.path())
        .args(["export", "rules.json", "--config", "absent.toml", "--color", "never"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error: Configuration error"));
}

#[test]
fn test_invalid_config_is_parse_error() {
    let temp_dir = project(RULES);
    fs::write(temp_dir.path().join("ruleconv.toml"), "[policy]\nstrict = 1\n").unwrap();

    ruleconv(temp_dir.path())
        .args(["export", "rules.json"])
        .assert()
        .code(3);
}

#[test]
fn test_init_then_refuse_then_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("ruleconv.toml");

    ruleconv(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created ruleconv.toml"));
    assert!(config_path.exists());

    ruleconv(temp_dir.path())
        .args(["init", "--color", "never"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    fs::write(&config_path, "# edited\n").unwrap();
    ruleconv(temp_dir.path())
        .args(["init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overwrote ruleconv.toml"));
    assert!(fs::read_to_string(&config_path).unwrap().contains("pedantic = false"));
}
