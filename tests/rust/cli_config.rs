use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn cli_discovers_config_in_current_dir() {
    let dir = tempdir().expect("create tempdir");
    std::fs::write(dir.path().join("egonlog.toml"), "[logger]\nlevel = \"debug\"\n")
        .expect("write config");

    Command::cargo_bin("egonlog")
        .expect("binary not found")
        .current_dir(dir.path())
        .args(["--no-color", "log", "debug", "from-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[DEBUG] from-config"));
}

#[test]
fn cli_level_flag_overrides_config() {
    let dir = tempdir().expect("create tempdir");
    let config = dir.path().join("custom.json");
    std::fs::write(&config, r#"{"level": "debug"}"#).expect("write config");

    Command::cargo_bin("egonlog")
        .expect("binary not found")
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["--no-color", "--level", "error", "log", "info", "quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn cli_missing_config_fails() {
    let dir = tempdir().expect("create tempdir");
    Command::cargo_bin("egonlog")
        .expect("binary not found")
        .current_dir(dir.path())
        .args(["--config", "absent.toml", "log", "info", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config"));
}
