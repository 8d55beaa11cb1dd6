//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    Test::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("encrypt"))
        .stdout(predicate::str::contains("creds"));
}

#[test]
fn test_unknown_command_fails() {
    Test::new()
        .cmd()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_version_flag() {
    Test::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_url_names_variable() {
    let t = Test::new();

    let output = t.run(&["url", "hicap", "--env", "qa"], &[]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "HICAP_QA_URL");
}

#[test]
fn test_error_output_uses_cross_prefix() {
    let t = Test::new();

    let output = t.run(&["url", "tyro"], &[]);
    assert_exit_one(&output);
    assert!(stderr(&output).starts_with("✗ "));
    assert_stderr_contains(&output, "TYRO_PROD_URL");
}

#[test]
fn test_missing_secret_prints_hint() {
    let t = Test::with_env_file(SAMPLE_ENV);

    let output = t.creds("tyro", "ts2", &[]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "→ export DECRYPT_SECRET");
}

#[test]
fn test_completions() {
    let t = Test::new();

    let output = t.run(&["completions", "bash"], &[]);
    assert_success(&output);
    assert_stdout_contains(&output, "autenv");
}
