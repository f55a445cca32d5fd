use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn cli_time_logs_elapsed() {
    let dir = tempdir().expect("create tempdir");
    Command::cargo_bin("egonlog")
        .expect("binary not found")
        .current_dir(dir.path())
        .args(["--no-color", "time", "job", "--sleep-ms", "5"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"\[INFO\] Timer \[job\]: \d+\.\d{2} ms").unwrap());
}

#[test]
fn cli_time_failure_still_logs_timer() {
    let dir = tempdir().expect("create tempdir");
    Command::cargo_bin("egonlog")
        .expect("binary not found")
        .current_dir(dir.path())
        .args(["--no-color", "time", "job", "--sleep-ms", "1", "--fail"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Timer [job]: "))
        .stderr(predicate::str::contains("work 'job' failed"));
}

#[test]
fn cli_demo_runs() {
    let dir = tempdir().expect("create tempdir");
    Command::cargo_bin("egonlog")
        .expect("binary not found")
        .current_dir(dir.path())
        .args(["--no-color", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Timer [sync]: "))
        .stdout(predicate::str::contains("Timer [async]: "))
        .stdout(predicate::str::contains("async work returned 42"))
        .stderr(predicate::str::contains("No timer found for label: sync"));
}
