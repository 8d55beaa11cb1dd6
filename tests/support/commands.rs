//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an autenv command with a clean environment.
    ///
    /// Returns a Command configured with:
    /// - no inherited environment variables
    /// - NO_COLOR set so output is plain
    /// - Current directory set to the test directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("autenv").expect("failed to find autenv binary");
        cmd.env_clear();
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run autenv with arguments and extra environment variables.
    pub fn run(&self, args: &[&str], vars: &[(&str, &str)]) -> Output {
        let mut cmd = self.cmd();
        for (k, v) in vars {
            cmd.env(k, v);
        }
        cmd.args(args).output().expect("failed to run autenv")
    }

    /// Shortcut for `autenv encrypt` command.
    pub fn encrypt(&self, plaintext: &str, secret: &str) -> Output {
        self.run(&["encrypt", plaintext, secret], &[])
    }

    /// Encrypt and return the trimmed `iv:ciphertext` value.
    pub fn encrypted(&self, plaintext: &str, secret: &str) -> String {
        let output = self.encrypt(plaintext, secret);
        assert!(
            output.status.success(),
            "encrypt failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Shortcut for `autenv decrypt` command.
    pub fn decrypt(&self, value: &str, vars: &[(&str, &str)]) -> Output {
        self.run(&["decrypt", value], vars)
    }

    /// Shortcut for `autenv creds <aut> --env <env> --show-password`.
    pub fn creds(&self, aut: &str, env: &str, vars: &[(&str, &str)]) -> Output {
        self.run(&["creds", aut, "--env", env, "--show-password"], vars)
    }

    /// Shortcut for `autenv check`.
    pub fn check(&self, vars: &[(&str, &str)]) -> Output {
        self.run(&["check"], vars)
    }
}
