use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_prints_help() {
    let mut cmd = Command::cargo_bin("egonlog").expect("binary not found");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("egonlog"))
        .stdout(predicate::str::contains("time"));
}
