//! Tests for the check command.

use crate::support::*;

#[test]
fn test_check_all_ok() {
    let t = Test::with_env_file(SAMPLE_ENV);
    t.write("autenv.toml", SAMPLE_CONFIG);

    let output = t.check(&[("DECRYPT_SECRET", SECRET)]);
    assert_success(&output);
    assert_stdout_contains(&output, "✓ tyro/ts2");
    assert_stdout_contains(&output, "✓ hicap/qa");
}

#[test]
fn test_check_reports_every_problem() {
    let t = Test::with_env_file(SAMPLE_ENV);
    t.write(
        "autenv.toml",
        &format!("{}\n[[target]]\naut = \"tyro\"\nenvironments = [\"qa\"]\n", SAMPLE_CONFIG),
    );

    // No DECRYPT_SECRET: tyro/ts2 cannot decrypt, tyro/qa is undefined
    let output = t.check(&[]);
    assert_exit_one(&output);
    assert_stdout_contains(&output, "✗ tyro/ts2");
    assert_stdout_contains(&output, "✓ hicap/qa");
    assert_stdout_contains(&output, "✗ tyro/qa");
    assert_stderr_contains(&output, "TYRO_QA_URL");
    assert_stderr_contains(&output, "TYRO_QA_USERNAME");
    assert_stderr_contains(&output, "DECRYPT_SECRET");
    assert_stderr_contains(&output, "3 configuration problem(s)");
    assert_stderr_contains(&output, "tyro/ts2: TYRO_TS2_PASSWORD is encrypted");
    assert_stderr_contains(&output, "tyro/qa: missing configuration: set TYRO_QA_URL");
    assert_stdout_excludes(&output, "entries ok");
}

#[test]
fn test_check_missing_config_file() {
    let t = Test::new();

    let output = t.check(&[]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "autenv.toml");
}

#[test]
fn test_check_invalid_config() {
    let t = Test::new();
    t.write("autenv.toml", "[[target]]\naut = \"tyro\"\nenvironments = []\n");

    let output = t.check(&[]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "no environments");
}

#[test]
fn test_check_custom_config_path() {
    let t = Test::with_env_file(SAMPLE_ENV);
    t.write("registry.toml", "[[target]]\naut = \"hicap\"\nenvironments = [\"qa\"]\n");

    let output = t.run(&["check", "--config", "registry.toml"], &[]);
    assert_success(&output);
    assert_stdout_contains(&output, "1 entries ok");
}
