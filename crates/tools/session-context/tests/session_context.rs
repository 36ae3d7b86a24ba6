use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn session_context(log_path: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("session-context").unwrap();
    cmd.env("WELLNESS_LOG_PATH", log_path)
        .env_remove("WELLNESS_STRICT_VALIDATION")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn first_session_has_no_history() {
    let dir = tempdir().unwrap();

    session_context(&dir.path().join("wellness_log.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("This is the user's first check-in."));
}

#[test]
fn describes_latest_check_in() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("wellness_log.json");
    let log = serde_json::json!({
        "check_ins": [
            {"date": "2026-10-17", "time": "08:00:00", "mood": "anxious", "energy": "drained",
             "objectives": ["sleep"], "summary": ""},
            {"date": "2026-10-18", "time": "08:10:00", "mood": "tired", "energy": "low",
             "objectives": ["walk", "rest"], "summary": ""}
        ]
    });
    fs::write(&log_path, serde_json::to_string_pretty(&log).unwrap()).unwrap();

    let output = session_context(&log_path).output().unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        doc["additionalContext"],
        "Previous check-in on 2026-10-18:\n- Mood: tired\n- Energy level: low\n- Goals: walk, rest"
    );
}

#[test]
fn corrupt_log_is_reported_and_ignored() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("wellness_log.json");
    fs::write(&log_path, "{\"check_ins\": [").unwrap();

    session_context(&log_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("This is the user's first check-in."))
        .stderr(predicate::str::contains("could not load check-in log"));

    // Reading never rewrites the file.
    assert_eq!(fs::read_to_string(&log_path).unwrap(), "{\"check_ins\": [");
}
