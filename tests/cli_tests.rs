//! Integration tests for the navroute CLI
//!
//! These tests run the navroute binary and check its output and exit codes.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// Get a Command for navroute
fn navroute() -> Command {
    let mut cmd = cargo_bin_cmd!("navroute");
    cmd.env_remove("NAVROUTE_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("NAVROUTE_LOG");
    cmd
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    navroute()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: navroute"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("chats"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version_flag() {
    navroute()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("navroute "));
}

// ============================================================================
// Route
// ============================================================================

#[test]
fn test_route_sample_network() {
    navroute()
        .arg("route")
        .assert()
        .success()
        .stdout(predicate::eq(
            "Shortest distances from node A:\n\
             To A = 0\n\
             To B = 4\n\
             To C = 2\n\
             To D = 9\n\
             To E = 11\n\
             \n\
             Shortest path from A to E: A -> B -> D -> E\n",
        ));
}

#[test]
fn test_bare_invocation_runs_route() {
    navroute()
        .assert()
        .success()
        .stdout(predicate::str::contains("Shortest path from A to E: A -> B -> D -> E"));
}

#[test]
fn test_route_from_other_source() {
    navroute()
        .args(["route", "--from", "B", "--to", "E"])
        .assert()
        .success()
        .stdout(predicate::str::contains("To A = unreachable"))
        .stdout(predicate::str::contains("To E = 7"))
        .stdout(predicate::str::contains("Shortest path from B to E: B -> D -> E"));
}

#[test]
fn test_route_unreachable_target() {
    navroute()
        .args(["route", "--from", "E", "--to", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shortest path from E to A: no path"));
}

#[test]
fn test_route_to_source() {
    navroute()
        .args(["route", "--from", "C", "--to", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shortest path from C to C: C\n"));
}

#[test]
fn test_route_quiet() {
    navroute()
        .args(["--quiet", "route"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("To A = 0"))
        .stdout(predicate::str::contains("Shortest distances").not());
}

#[test]
fn test_route_unknown_source() {
    navroute()
        .args(["route", "--from", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: Z"));
}

#[test]
fn test_route_unknown_target() {
    navroute()
        .args(["route", "--to", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: Z"));
}

#[test]
fn test_route_json() {
    let output = navroute()
        .args(["--format", "json", "route"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["source"], "A");
    assert_eq!(json["distances"].as_array().unwrap().len(), 5);
    assert_eq!(json["distances"][3]["node"], "D");
    assert_eq!(json["distances"][3]["distance"], 9);
    assert_eq!(json["path"], serde_json::json!(["A", "B", "D", "E"]));
    assert_eq!(json["path_distance"], 11);
}

#[test]
fn test_json_error_envelope() {
    let output = navroute()
        .args(["--format", "json", "route", "--from", "Q"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "node_not_found");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_json_envelope_for_argument_errors() {
    let output = navroute()
        .args(["--format", "json", "chats", "--capacity", "0"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
    assert_eq!(json["error"]["code"], 2);
}

#[test]
fn test_unknown_format_is_usage_error() {
    navroute()
        .args(["--format", "records", "route"])
        .assert()
        .code(2);
}

// ============================================================================
// Configuration files
// ============================================================================

const DISCONNECTED: &str = r#"
[network]
nodes = ["S", "M", "T", "X"]
source = "S"
target = "X"

[[network.edges]]
from = "S"
to = "M"
weight = 1

[[network.edges]]
from = "M"
to = "T"
weight = 2

[[network.edges]]
from = "T"
to = "Y"
weight = 2
"#;

#[test]
fn test_route_from_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("net.toml");
    fs::write(&path, DISCONNECTED).unwrap();

    navroute()
        .arg("--config")
        .arg(&path)
        .arg("route")
        .assert()
        .success()
        .stdout(predicate::str::contains("To T = 3"))
        .stdout(predicate::str::contains("To X = unreachable"))
        .stdout(predicate::str::contains("Shortest path from S to X: no path"));
}

#[test]
fn test_config_file_from_env() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("net.toml");
    fs::write(&path, DISCONNECTED).unwrap();

    navroute()
        .env("NAVROUTE_CONFIG", &path)
        .args(["route", "--to", "T"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shortest path from S to T: S -> M -> T"));
}

#[test]
fn test_strict_rejects_dangling_edge() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("net.toml");
    fs::write(&path, DISCONNECTED).unwrap();

    navroute()
        .arg("--config")
        .arg(&path)
        .args(["route", "--strict"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("dangling edge T -> Y"));
}

#[test]
fn test_negative_weight_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("net.toml");
    fs::write(
        &path,
        "[network]\nnodes = [\"A\", \"B\"]\nedges = [{ from = \"A\", to = \"B\", weight = -1 }]\n",
    )
    .unwrap();

    navroute()
        .arg("--config")
        .arg(&path)
        .arg("route")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid weight -1"));
}

#[test]
fn test_missing_source_is_usage_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("net.toml");
    fs::write(&path, "[network]\nnodes = [\"A\"]\n").unwrap();

    navroute()
        .arg("--config")
        .arg(&path)
        .arg("route")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no source node"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempdir().unwrap();

    navroute()
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .arg("route")
        .assert()
        .code(1);
}

#[test]
fn test_config_prints_defaults() {
    let output = navroute().arg("config").output().unwrap();
    assert!(output.status.success());

    let parsed: toml::Table = toml::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    let network = parsed["network"].as_table().unwrap();
    assert_eq!(network["source"].as_str(), Some("A"));
    assert_eq!(network["nodes"].as_array().unwrap().len(), 5);
    assert_eq!(network["edges"].as_array().unwrap().len(), 7);
    assert_eq!(parsed["cache"]["capacity"].as_integer(), Some(3));
}

// ============================================================================
// Chats
// ============================================================================

#[test]
fn test_chats_demo() {
    navroute()
        .arg("chats")
        .assert()
        .success()
        .stdout(predicate::eq(
            "Active Chats (Most -> Least Recent): 103 102 101\n\
             Active Chats (Most -> Least Recent): 101 103 102\n\
             Active Chats (Most -> Least Recent): 104 101 103\n",
        ));
}

#[test]
fn test_chats_larger_capacity_keeps_everything() {
    navroute()
        .args(["chats", "--capacity", "4"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "Active Chats (Most -> Least Recent): 104 101 103 102\n",
        ));
}

#[test]
fn test_chats_zero_capacity_rejected() {
    navroute()
        .args(["chats", "--capacity", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_chats_json() {
    let output = navroute()
        .args(["--format", "json", "chats"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["capacity"], 3);
    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 5);
    assert_eq!(steps[3]["action"], "get");
    assert_eq!(steps[3]["message"], "Hello!");
    assert_eq!(steps[4]["evicted"], 102);
    assert_eq!(steps[4]["active"], serde_json::json!([104, 101, 103]));
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_verbose_logs_to_stderr() {
    navroute()
        .args(["--verbose", "route"])
        .assert()
        .success()
        .stderr(predicate::str::contains("search_stats"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let output = navroute()
        .args(["--log-level", "debug", "--log-json", "route"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(parsed.get("level").is_some());
}
