use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn cli_table_needs_debug_level() {
    let dir = tempdir().expect("create tempdir");
    let data = r#"[{"name":"kick","hits":4}]"#;

    Command::cargo_bin("egonlog")
        .expect("binary not found")
        .current_dir(dir.path())
        .args(["--no-color", "table", data])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    Command::cargo_bin("egonlog")
        .expect("binary not found")
        .current_dir(dir.path())
        .args(["--no-color", "--level", "debug", "table", data])
        .assert()
        .success()
        .stdout(predicate::str::contains("│ (index) │ name │ hits │"))
        .stdout(predicate::str::contains("│ 0       │ kick │ 4    │"));
}

#[test]
fn cli_table_rejects_bad_json() {
    let dir = tempdir().expect("create tempdir");
    Command::cargo_bin("egonlog")
        .expect("binary not found")
        .current_dir(dir.path())
        .args(["--level", "debug", "table", "{nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn cli_highlight_needs_debug_level() {
    let dir = tempdir().expect("create tempdir");

    Command::cargo_bin("egonlog")
        .expect("binary not found")
        .current_dir(dir.path())
        .args(["--no-color", "--level", "info", "highlight", "look"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    Command::cargo_bin("egonlog")
        .expect("binary not found")
        .current_dir(dir.path())
        .args(["--no-color", "--level", "debug", "highlight", "look", "7"])
        .assert()
        .success()
        .stdout("look 7\n");
}
