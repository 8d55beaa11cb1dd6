//! Explicit AUT × environment registry.
//!
//! Variable names are still derived by convention (`{AUT}_{ENV}_URL`, ...),
//! but the set of pairs is declared in `autenv.toml` so every mapping can be
//! checked before a test run instead of failing at first use.

use tracing::debug;

use crate::core::config::Config;
use crate::core::domain::AutEnvironmentKey;
use crate::core::resolver::Resolver;
use crate::core::snapshot::Snapshot;
use crate::error::{ConfigError, Result};

/// Every declared (AUT, environment) pair.
#[derive(Debug, Clone)]
pub struct Registry {
    keys: Vec<AutEnvironmentKey>,
    default_environment: Option<String>,
}

/// Outcome of checking one registry entry.
#[derive(Debug, Clone)]
pub struct KeyReport {
    pub key: AutEnvironmentKey,
    pub problems: Vec<String>,
}

impl KeyReport {
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }
}

impl Registry {
    /// Enumerate the pairs declared in a validated config.
    pub fn from_config(config: &Config) -> Self {
        let keys = config
            .targets
            .iter()
            .flat_map(|t| {
                t.environments
                    .iter()
                    .map(move |env| AutEnvironmentKey::new(t.aut.clone(), env.clone()))
            })
            .collect();

        Self {
            keys,
            default_environment: config.autenv.default_environment.clone(),
        }
    }

    pub fn keys(&self) -> &[AutEnvironmentKey] {
        &self.keys
    }

    /// A resolver over `snapshot` honoring the configured default environment.
    pub fn resolver<'a>(&self, snapshot: &'a Snapshot) -> Resolver<'a> {
        let resolver = Resolver::new(snapshot);
        match &self.default_environment {
            Some(env) => resolver.with_default_environment(env.clone()),
            None => resolver,
        }
    }

    /// Resolve URL and credentials for every entry and collect what fails.
    pub fn check(&self, snapshot: &Snapshot) -> Vec<KeyReport> {
        let resolver = self.resolver(snapshot);

        self.keys
            .iter()
            .map(|key| {
                let mut problems = Vec::new();
                let env = Some(key.environment());

                if let Err(e) = resolver.aut_url(key.aut(), env) {
                    problems.push(e.to_string());
                }
                if let Err(e) = resolver.aut_credentials(key.aut(), env) {
                    problems.push(e.to_string());
                }

                debug!(%key, problems = problems.len(), "checked");
                KeyReport {
                    key: key.clone(),
                    problems,
                }
            })
            .collect()
    }

    /// Fail with every problem across all entries.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` listing each problem prefixed by its
    /// `aut/env` pair.
    pub fn validate(&self, snapshot: &Snapshot) -> Result<()> {
        let problems: Vec<String> = self
            .check(snapshot)
            .into_iter()
            .flat_map(|report| {
                let key = report.key;
                report
                    .problems
                    .into_iter()
                    .map(move |p| format!("{}: {}", key, p))
            })
            .collect();

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid { problems }.into())
        }
    }
}
