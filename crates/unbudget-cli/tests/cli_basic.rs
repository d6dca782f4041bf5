//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own temporary data directory.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_unbudget"))
        .args(args)
        .env("UNBUDGET_DATA_DIR", data_dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn stats_json(data_dir: &Path) -> serde_json::Value {
    let (stdout, stderr, code) = run_cli(data_dir, &["stats", "--json"]);
    assert_eq!(code, 0, "stats failed: {stderr}");
    serde_json::from_str(&stdout).expect("stats output is JSON")
}

#[test]
fn test_habit_select_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["habit", "select", "DoorDash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Tracking DoorDash ($25.00 per use)"));

    let (stdout, _, code) = run_cli(dir.path(), &["habit", "list", "--json"]);
    assert_eq!(code, 0);
    let rows: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(rows[0]["name"], "DoorDash");
    assert_eq!(rows[0]["perUseSpend"], 25.0);
    assert_eq!(rows[0]["loggedToday"], false);
}

#[test]
fn test_fourth_habit_drops_oldest() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["DoorDash", "Uber", "Thrift fits"] {
        assert_eq!(run_cli(dir.path(), &["habit", "select", name]).2, 0);
    }
    let (stdout, _, code) = run_cli(dir.path(), &["habit", "select", "Crypto coins"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Dropped DoorDash"));

    let stats = stats_json(dir.path());
    let names: Vec<&str> = stats["habits"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Uber", "Thrift fits", "Crypto coins"]);
}

#[test]
fn test_log_builds_streak_and_rejects_repeat() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["habit", "select", "Uber"]);

    for date in ["2024-12-31", "2025-01-01"] {
        let (stdout, stderr, code) = run_cli(dir.path(), &["log", "Uber", "--date", date]);
        assert_eq!(code, 0, "log failed: {stderr}");
        assert!(stdout.contains("Saved $12.00 by skipping Uber!"));
    }

    let (stdout, _, code) = run_cli(dir.path(), &["log", "Uber", "--date", "2025-01-01"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("already logged Uber today"));

    let stats = stats_json(dir.path());
    assert_eq!(stats["streak"], 2);
    assert_eq!(stats["totalSaved"], 24.0);
    assert_eq!(stats["habits"][0]["streak"], 2);
    assert_eq!(stats["habits"][0]["lastLoggedDate"], "2025-01-01");
}

#[test]
fn test_log_unknown_habit_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["log", "Uber"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_age_validation() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["age", "abc"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Please enter a valid"));

    let (_, _, code) = run_cli(dir.path(), &["age", "0"]);
    assert_eq!(code, 1);

    let (stdout, _, code) = run_cli(dir.path(), &["age", "25"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Age set to 25"));
    assert_eq!(stats_json(dir.path())["age"], 25);
}

#[test]
fn test_project_grid_from_profile() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(
        dir.path(),
        &["habit", "select", "DoorDash", "--monthly-spend", "$100"],
    );
    run_cli(dir.path(), &["age", "25"]);

    let (stdout, stderr, code) = run_cli(dir.path(), &["project", "--json"]);
    assert_eq!(code, 0, "project failed: {stderr}");
    let grid: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let values: Vec<i64> = grid
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["value"].as_i64().unwrap())
        .collect();
    assert_eq!(values, [1253, 7397, 18417, 351428]);
    assert_eq!(grid[3]["label"], "By Age 65");
}

#[test]
fn test_project_single_target() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(
        dir.path(),
        &["project", "--monthly", "100", "--age", "25", "--target", "26", "--json"],
    );
    assert_eq!(code, 0);
    let body: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(body["value"], 1253);

    let (_, _, code) = run_cli(
        dir.path(),
        &["project", "--monthly", "100", "--age", "30", "--target", "30"],
    );
    assert_eq!(code, 1);
}

#[test]
fn test_config_set_get() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "projection.annual_rate"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "0.08");

    assert_eq!(
        run_cli(dir.path(), &["config", "set", "projection.retirement_age", "60"]).2,
        0
    );
    let (stdout, _, _) = run_cli(dir.path(), &["config", "get", "projection.retirement_age"]);
    assert_eq!(stdout.trim(), "60");

    let (_, _, code) = run_cli(dir.path(), &["config", "get", "nope"]);
    assert_eq!(code, 1);
}

#[test]
fn test_reset_clears_profile() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["habit", "select", "Uber"]);
    assert_eq!(run_cli(dir.path(), &["reset"]).2, 0);

    let stats = stats_json(dir.path());
    assert_eq!(stats["habits"].as_array().unwrap().len(), 0);
    assert_eq!(stats["totalSaved"], 0.0);
}

#[test]
fn test_unwritable_data_dir_asks_to_retry() {
    let dir = tempfile::tempdir().unwrap();
    let not_a_dir = dir.path().join("data");
    std::fs::write(&not_a_dir, "occupied").unwrap();

    let (_, stderr, code) = run_cli(&not_a_dir, &["habit", "select", "Uber"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("Unable to save your progress. Please try again."));
}

#[test]
fn test_project_rejects_absurd_target() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, stderr, code) = run_cli(
        dir.path(),
        &["project", "--monthly", "100", "--age", "25", "--target", "400000000"],
    );
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Age must be between 1 and 120"));
    assert!(!stderr.contains("Unable to save"));
}

#[test]
fn test_log_trims_habit_name() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["habit", "select", "Uber"]);
    let (stdout, stderr, code) = run_cli(dir.path(), &["log", " Uber ", "--date", "2025-03-01"]);
    assert_eq!(code, 0, "log failed: {stderr}");
    assert!(stdout.contains("Saved $12.00 by skipping Uber!"));
}
