use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn tasktrack() -> Command {
    Command::cargo_bin("tasktrack").unwrap()
}

#[test]
fn test_main_help_lists_commands() {
    tasktrack()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--data-dir"));
}

#[test]
fn test_config_help_lists_subcommands() {
    tasktrack()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn test_unknown_format_is_rejected() {
    tasktrack()
        .args(["demo", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
