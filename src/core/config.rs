//! Configuration file management.
//!
//! Handles reading and validating `autenv.toml`, the explicit list of
//! applications under test and the environments each one runs in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `autenv.toml`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub autenv: Meta,
    /// Applications under test
    #[serde(default, rename = "target")]
    pub targets: Vec<Target>,
}

/// General settings section
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Meta {
    /// Environment used when neither `ENVIRONMENT` nor `NODE_ENV` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_environment: Option<String>,
}

/// One application under test and its environments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub aut: String,
    pub environments: Vec<String>,
}

impl Config {
    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load and validate configuration from `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist,
    /// `ConfigError::Parse` if the TOML is malformed, or
    /// `ConfigError::InvalidField` if validation fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::parse(&contents)?;

        debug!(targets = config.targets.len(), "config loaded");

        Ok(config)
    }

    /// Parse and validate configuration from a string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` or `ConfigError::InvalidField`.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration structure and contents
    ///
    /// Checks:
    /// - At least one target exists
    /// - AUT and environment names are non-empty and use only `[A-Za-z0-9_]`
    /// - Every target lists at least one environment
    /// - No (AUT, environment) pair appears twice
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidField` on validation failure.
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        if self.targets.is_empty() {
            return Err(ConfigError::InvalidField {
                field: "target",
                reason: "at least one [[target]] is required".to_string(),
            }
            .into());
        }

        if let Some(env) = &self.autenv.default_environment {
            validate_name("default_environment", env)?;
        }

        let mut seen = BTreeSet::new();
        for target in &self.targets {
            validate_name("aut", &target.aut)?;

            if target.environments.is_empty() {
                return Err(ConfigError::InvalidField {
                    field: "environments",
                    reason: format!("target '{}' lists no environments", target.aut),
                }
                .into());
            }

            for env in &target.environments {
                validate_name("environments", env)?;
                if !seen.insert((target.aut.to_uppercase(), env.to_uppercase())) {
                    return Err(ConfigError::InvalidField {
                        field: "target",
                        reason: format!("duplicate entry for {}/{}", target.aut, env),
                    }
                    .into());
                }
            }
        }

        Ok(())
    }
}

/// Names end up inside variable names, so keep them to identifier characters.
fn validate_name(field: &'static str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ConfigError::InvalidField {
            field,
            reason: "name cannot be empty".to_string(),
        }
        .into());
    }

    if let Some((i, ch)) = name
        .chars()
        .enumerate()
        .find(|(_, ch)| !ch.is_ascii_alphanumeric() && *ch != '_')
    {
        return Err(ConfigError::InvalidField {
            field,
            reason: format!(
                "invalid character '{}' at position {} in '{}'",
                ch,
                i + 1,
                name
            ),
        }
        .into());
    }

    Ok(())
}
