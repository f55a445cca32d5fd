use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn egonlog(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("egonlog").expect("binary not found");
    cmd.current_dir(dir).arg("--no-color");
    cmd
}

#[test]
fn cli_log_info_goes_to_stdout() {
    let dir = tempdir().expect("create tempdir");
    egonlog(dir.path())
        .args(["log", "info", "hello", "42", r#"{"ok":true}"#])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r#"^\[\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z\] \[INFO\] hello 42 \{"ok":true\}\n$"#).unwrap())
        .stderr(predicate::str::is_empty());
}

#[test]
fn cli_log_error_and_warn_go_to_stderr() {
    let dir = tempdir().expect("create tempdir");
    egonlog(dir.path())
        .args(["log", "error", "boom"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("[ERROR] boom"));

    egonlog(dir.path())
        .args(["log", "warn", "careful"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[WARN] careful"));
}

#[test]
fn cli_level_filters_output() {
    let dir = tempdir().expect("create tempdir");
    egonlog(dir.path())
        .args(["--level", "warn", "log", "info", "hidden"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    egonlog(dir.path())
        .args(["log", "debug", "hidden"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    egonlog(dir.path())
        .args(["--level", "debug", "log", "debug", "shown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[DEBUG] shown"));
}

#[test]
fn cli_rejects_unknown_level() {
    let dir = tempdir().expect("create tempdir");
    egonlog(dir.path())
        .args(["--level", "loud", "log", "info", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown log level"));
}

#[test]
fn cli_log_without_values_prints_prefix_only() {
    let dir = tempdir().expect("create tempdir");
    egonlog(dir.path())
        .args(["log", "info"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[[^\]]+\] \[INFO\]\n$").unwrap());
}
