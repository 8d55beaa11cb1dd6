//! Environment snapshot.
//!
//! The resolver never reads `std::env` directly. A [`Snapshot`] is taken
//! once at startup and passed by reference, so every lookup in a run sees
//! the same values and tests can inject their own.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::core::constants;
use crate::core::domain::EnvFile;
use crate::error::{ConfigError, Result};

/// Immutable view of environment variables.
#[derive(Clone, Default)]
pub struct Snapshot {
    vars: BTreeMap<String, String>,
}

impl Snapshot {
    /// Copy the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    /// Build from explicit pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Layer a `.env` file underneath the existing variables.
    ///
    /// Variables already present win, matching dotenv semantics.
    pub fn with_env_file(mut self, file: &EnvFile) -> Self {
        let mut added = 0usize;
        for (key, value) in file.entries() {
            if !self.vars.contains_key(key) {
                self.vars.insert(key.clone(), value.clone());
                added += 1;
            }
        }
        debug!(path = %file.path().display(), added, "layered env file");
        self
    }

    /// Snapshot the process, layered over an env file.
    ///
    /// An explicit `env_file` must exist. Without one, `./.env` is used when
    /// present and silently skipped otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` or `ConfigError::ReadFile` if the
    /// explicit file cannot be loaded.
    pub fn load(env_file: Option<&Path>) -> Result<Self> {
        let snapshot = Self::from_process();

        let file = match env_file {
            Some(path) => Some(EnvFile::load(path)?),
            None => {
                let default = Path::new(constants::ENV_FILE);
                if default.is_file() {
                    Some(EnvFile::load(default)?)
                } else {
                    None
                }
            }
        };

        Ok(match file {
            Some(file) => snapshot.with_env_file(&file),
            None => snapshot,
        })
    }

    /// Value of a variable. Empty values count as unset.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Value of a variable that must be set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` naming the variable.
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| ConfigError::missing(name).into())
    }

    /// Whether a variable is set to a non-empty value.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.vars.len()
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("vars", &self.vars.len())
            .finish()
    }
}
