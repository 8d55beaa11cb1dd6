//! Tests for env, url, creds and db commands.

use crate::support::*;

#[test]
fn test_env_defaults_to_prod() {
    let t = Test::new();

    let output = t.run(&["env"], &[]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "prod");
}

#[test]
fn test_env_prefers_environment_over_node_env() {
    let t = Test::new();

    let output = t.run(&["env"], &[("ENVIRONMENT", "ts2"), ("NODE_ENV", "qa")]);
    assert_eq!(stdout(&output).trim(), "ts2");

    let output = t.run(&["env"], &[("NODE_ENV", "qa")]);
    assert_eq!(stdout(&output).trim(), "qa");
}

#[test]
fn test_env_uses_registry_default() {
    let t = Test::new();
    t.write(
        "autenv.toml",
        "[autenv]\ndefault_environment = \"ts2\"\n\n[[target]]\naut = \"tyro\"\nenvironments = [\"ts2\"]\n",
    );

    let output = t.run(&["env"], &[]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "ts2");
}

#[test]
fn test_url_from_env_file() {
    let t = Test::with_env_file(SAMPLE_ENV);

    let output = t.run(&["url", "hicap", "--env", "qa"], &[]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "https://qa.hicap.test");
}

#[test]
fn test_url_uses_current_environment() {
    let t = Test::with_env_file(SAMPLE_ENV);

    let output = t.run(&["url", "tyro"], &[("ENVIRONMENT", "ts2")]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "https://ts2.tyro.test/login");
}

#[test]
fn test_process_env_overrides_env_file() {
    let t = Test::with_env_file(SAMPLE_ENV);

    let output = t.run(
        &["url", "hicap", "--env", "qa"],
        &[("HICAP_QA_URL", "https://override.test")],
    );
    assert_eq!(stdout(&output).trim(), "https://override.test");
}

#[test]
fn test_explicit_env_file_flag() {
    let t = Test::new();
    t.write("ci.env", "TYRO_QA_URL=https://qa.tyro.test\n");

    let output = t.run(&["--env-file", "ci.env", "url", "tyro", "-e", "qa"], &[]);
    assert_success(&output);
    assert_stdout_contains(&output, "https://qa.tyro.test");
}

#[test]
fn test_missing_explicit_env_file_fails() {
    let t = Test::new();

    let output = t.run(&["--env-file", "missing.env", "env"], &[]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "missing.env");
}

#[test]
fn test_creds_decrypts_password() {
    let t = Test::with_env_file(SAMPLE_ENV);

    let output = t.creds("tyro", "ts2", &[("DECRYPT_SECRET", SECRET)]);
    assert_success(&output);
    assert_stdout_contains(&output, "alice");
    assert_stdout_contains(&output, PASSWORD);
}

#[test]
fn test_creds_masks_password_by_default() {
    let t = Test::with_env_file(SAMPLE_ENV);

    let output = t.run(&["creds", "hicap", "--env", "qa"], &[]);
    assert_success(&output);
    assert_stdout_contains(&output, "bob");
    assert_stdout_contains(&output, "********");
    assert_stdout_excludes(&output, "plainPasswordNoColon");
}

#[test]
fn test_creds_json() {
    let t = Test::with_env_file(SAMPLE_ENV);

    let output = t.run(
        &["creds", "tyro", "--env", "ts2", "--json", "--show-password"],
        &[("DECRYPT_SECRET", SECRET)],
    );
    assert_success(&output);

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["aut"], "tyro");
    assert_eq!(json["environment"], "ts2");
    assert_eq!(json["username"], "alice");
    assert_eq!(json["password"], PASSWORD);
}

#[test]
fn test_creds_encrypted_without_secret() {
    let t = Test::with_env_file(SAMPLE_ENV);

    let output = t.creds("tyro", "ts2", &[]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "DECRYPT_SECRET");
    assert_stderr_contains(&output, "TYRO_TS2_PASSWORD");
}

#[test]
fn test_creds_wrong_secret_gives_guidance() {
    let t = Test::with_env_file(SAMPLE_ENV);

    let output = t.creds("tyro", "ts2", &[("DECRYPT_SECRET", "wrong")]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "could not decrypt TYRO_TS2_PASSWORD");
    assert_stderr_contains(&output, "whitespace");
}

#[test]
fn test_db_with_generic_fallback() {
    let t = Test::with_env_file(SAMPLE_ENV);

    let output = t.run(&["db", "oracle", "--show-password"], &[]);
    assert_success(&output);
    assert_stdout_contains(&output, "scott");
    assert_stdout_contains(&output, "tiger");
    assert_stdout_contains(&output, "localhost:1521/XEPDB1");
}

#[test]
fn test_db_pool_json() {
    let t = Test::with_env_file(SAMPLE_ENV);

    let output = t.run(
        &["db", "oracle", "--pool", "--json"],
        &[("ORACLE_DB_POOL_MAX", "20")],
    );
    assert_success(&output);

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["password"], "********");
    assert_eq!(json["pool"]["min"], 1);
    assert_eq!(json["pool"]["max"], 20);
    assert_eq!(json["pool"]["timeout"], 60);
}

#[test]
fn test_db_missing_lists_variables() {
    let t = Test::new();

    let output = t.run(&["db", "mysql"], &[]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "MYSQL_DB_USERNAME");
    assert_stderr_contains(&output, "MYSQL_DB_PASSWORD");
    assert_stderr_contains(&output, "MYSQL_DB_CONNECTION_STRING");
}

#[test]
fn test_creds_quoted_encrypted_password_with_comment() {
    let t = Test::with_env_file(&format!(
        "TYRO_TS2_USERNAME=alice\nTYRO_TS2_PASSWORD=\"{}\" # ts2 login\n",
        ENCRYPTED_PASSWORD
    ));

    let output = t.creds("tyro", "ts2", &[("DECRYPT_SECRET", SECRET)]);
    assert_success(&output);
    assert_stdout_contains(&output, PASSWORD);
}

const BROKEN_REGISTRY: &str = "[[target]]\naut = \"tyro\"\nenvironments = []\n";

#[test]
fn test_explicit_env_ignores_broken_registry() {
    let t = Test::with_env_file(SAMPLE_ENV);
    t.write("autenv.toml", BROKEN_REGISTRY);

    let output = t.run(&["url", "hicap", "--env", "qa"], &[]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "https://qa.hicap.test");

    let output = t.run(&["url", "tyro"], &[("ENVIRONMENT", "ts2")]);
    assert_success(&output);

    let output = t.run(&["db", "oracle"], &[]);
    assert_success(&output);
}

#[test]
fn test_broken_registry_fails_when_default_needed() {
    let t = Test::new();
    t.write("autenv.toml", BROKEN_REGISTRY);

    let output = t.run(&["env"], &[]);
    assert_exit_one(&output);
    assert_stderr_contains(&output, "no environments");
}
