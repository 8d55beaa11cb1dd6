//! Configuration resolution.
//!
//! Maps logical requests (an AUT's URL, its credentials, database connection
//! parameters) onto environment variables held in a [`Snapshot`]. Passwords
//! that look encrypted are decrypted on the way out with `DECRYPT_SECRET`.
//!
//! Every call is a stateless read-through: nothing is cached, and nothing
//! explicitly requested is ever substituted with a default. The one default
//! is the environment name itself, which falls back to `prod`.

use tracing::{debug, trace};

use crate::core::cipher;
use crate::core::constants::{
    DECRYPT_SECRET_VAR, DEFAULT_ENVIRONMENT, DEFAULT_POOL_INCREMENT, DEFAULT_POOL_MAX,
    DEFAULT_POOL_MIN, DEFAULT_POOL_TIMEOUT, ENVIRONMENT_VAR, GENERIC_DB_PREFIX, NODE_ENV_VAR,
};
use crate::core::domain::{
    AutEnvironmentKey, DatabaseConfig, EncryptedSecret, PoolConfig, ResolvedCredential,
};
use crate::core::snapshot::Snapshot;
use crate::error::{ConfigError, Error, Result};

/// Resolves configuration values from a snapshot.
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    snapshot: &'a Snapshot,
    default_environment: Option<String>,
}

impl<'a> Resolver<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self {
            snapshot,
            default_environment: None,
        }
    }

    /// Use `env` instead of `prod` when no environment variable is set.
    pub fn with_default_environment(mut self, env: impl Into<String>) -> Self {
        self.default_environment = Some(env.into());
        self
    }

    /// Current environment name.
    ///
    /// `ENVIRONMENT`, then `NODE_ENV`, then the configured default, then `prod`.
    pub fn current_environment(&self) -> String {
        self.snapshot
            .get(ENVIRONMENT_VAR)
            .or_else(|| self.snapshot.get(NODE_ENV_VAR))
            .or(self.default_environment.as_deref())
            .unwrap_or(DEFAULT_ENVIRONMENT)
            .to_string()
    }

    fn key(&self, aut: &str, env: Option<&str>) -> AutEnvironmentKey {
        let env = env
            .map(str::to_string)
            .unwrap_or_else(|| self.current_environment());
        AutEnvironmentKey::new(aut, env)
    }

    /// Base URL of an AUT, from `{AUT}_{ENV}_URL`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` naming the variable if it is unset.
    pub fn aut_url(&self, aut: &str, env: Option<&str>) -> Result<String> {
        let key = self.key(aut, env);
        let var = key.vars().url;
        debug!(%key, var = %var, "resolving url");

        Ok(self.snapshot.require(&var)?.to_string())
    }

    /// Login credentials of an AUT, from `{AUT}_{ENV}_USERNAME` and
    /// `{AUT}_{ENV}_PASSWORD`.
    ///
    /// The password is decrypted if it looks encrypted; the username never is.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` listing every unset variable,
    /// `ConfigError::MissingSecret` if the password is encrypted and
    /// `DECRYPT_SECRET` is unset, or `ConfigError::Decryption` if it cannot
    /// be decrypted.
    pub fn aut_credentials(&self, aut: &str, env: Option<&str>) -> Result<ResolvedCredential> {
        let key = self.key(aut, env);
        let vars = key.vars();
        debug!(%key, "resolving credentials");

        let username = self.snapshot.get(&vars.username);
        let password = self.snapshot.get(&vars.password);

        let (username, password) = match (username, password) {
            (Some(u), Some(p)) => (u, p),
            _ => {
                let vars = [vars.username, vars.password]
                    .into_iter()
                    .filter(|v| !self.snapshot.contains(v))
                    .collect();
                return Err(ConfigError::Missing { vars }.into());
            }
        };

        let password = self.reveal(Some(vars.password.as_str()), password)?;
        Ok(ResolvedCredential::new(username, password))
    }

    /// Decrypt `value` if it looks encrypted, otherwise return it unchanged.
    ///
    /// Plaintext values never consult `DECRYPT_SECRET`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingSecret` or `ConfigError::Decryption`.
    pub fn maybe_decrypt(&self, value: &str) -> Result<String> {
        self.reveal(None, value)
    }

    /// `var` names the variable `value` came from, for error messages.
    fn reveal(&self, var: Option<&str>, value: &str) -> Result<String> {
        if !EncryptedSecret::looks_encrypted(value) {
            trace!(var, "plaintext value");
            return Ok(value.to_string());
        }

        let secret = self
            .snapshot
            .get(DECRYPT_SECRET_VAR)
            .ok_or_else(|| ConfigError::MissingSecret {
                var: var.map(str::to_string),
            })?;

        trace!(var, "decrypting value");
        cipher::decrypt(value, secret).map_err(|e| match e {
            Error::Cipher(source) => ConfigError::Decryption {
                var: var.map(str::to_string),
                source,
            }
            .into(),
            other => other,
        })
    }

    /// Database connection parameters for `db_type` (e.g. `oracle`).
    ///
    /// Each of `{DB}_DB_USERNAME`, `{DB}_DB_PASSWORD` and
    /// `{DB}_DB_CONNECTION_STRING` falls back to the generic `DB_*` variable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` listing all three type-specific names
    /// if any value is missing, or a decryption error for the password.
    pub fn database_config(&self, db_type: &str) -> Result<DatabaseConfig> {
        debug!(db_type, "resolving database config");
        self.database_for(&db_type.to_uppercase())
    }

    /// Database parameters keyed by the current environment (`{ENV}_DB_*`).
    ///
    /// # Errors
    ///
    /// Same as [`Resolver::database_config`].
    pub fn environment_database_config(&self) -> Result<DatabaseConfig> {
        let env = self.current_environment();
        debug!(env = %env, "resolving environment database config");
        self.database_for(&env.to_uppercase())
    }

    fn database_for(&self, prefix: &str) -> Result<DatabaseConfig> {
        match (
            self.db_lookup(prefix, "USERNAME"),
            self.db_lookup(prefix, "PASSWORD"),
            self.db_lookup(prefix, "CONNECTION_STRING"),
        ) {
            (Some((_, username)), Some((password_var, password)), Some((_, connect))) => {
                Ok(DatabaseConfig {
                    username: username.to_string(),
                    password: self.reveal(Some(password_var.as_str()), password)?,
                    connect_string: connect.to_string(),
                })
            }
            _ => Err(ConfigError::Missing {
                vars: vec![
                    format!("{}_DB_USERNAME", prefix),
                    format!("{}_DB_PASSWORD", prefix),
                    format!("{}_DB_CONNECTION_STRING", prefix),
                ],
            }
            .into()),
        }
    }

    /// `{PREFIX}_DB_{FIELD}`, else `DB_{FIELD}`, with the name that matched.
    fn db_lookup(&self, prefix: &str, field: &str) -> Option<(String, &str)> {
        let specific = format!("{}_DB_{}", prefix, field);
        if let Some(value) = self.snapshot.get(&specific) {
            return Some((specific, value));
        }
        let generic = format!("{}_{}", GENERIC_DB_PREFIX, field);
        self.snapshot.get(&generic).map(|value| (generic, value))
    }

    /// Database parameters plus pool sizing.
    ///
    /// `{DB}_DB_POOL_MIN|MAX|INCREMENT|TIMEOUT` fall back to `DB_POOL_*`,
    /// then to 1 / 10 / 1 / 60.
    ///
    /// # Errors
    ///
    /// As [`Resolver::database_config`], plus `ConfigError::InvalidValue`
    /// for a pool setting that is not a non-negative integer.
    pub fn database_pool_config(&self, db_type: &str) -> Result<PoolConfig> {
        let database = self.database_config(db_type)?;
        let prefix = db_type.to_uppercase();

        Ok(PoolConfig {
            database,
            pool_min: self.pool_setting(&prefix, "MIN", DEFAULT_POOL_MIN)?,
            pool_max: self.pool_setting(&prefix, "MAX", DEFAULT_POOL_MAX)?,
            pool_increment: self.pool_setting(&prefix, "INCREMENT", DEFAULT_POOL_INCREMENT)?,
            pool_timeout: self.pool_setting(&prefix, "TIMEOUT", DEFAULT_POOL_TIMEOUT)?,
        })
    }

    fn pool_setting(&self, prefix: &str, field: &str, default: u32) -> Result<u32> {
        let specific = format!("{}_DB_POOL_{}", prefix, field);
        let generic = format!("{}_POOL_{}", GENERIC_DB_PREFIX, field);

        let (var, raw) = match self.snapshot.get(&specific) {
            Some(v) => (specific, v),
            None => match self.snapshot.get(&generic) {
                Some(v) => (generic, v),
                None => return Ok(default),
            },
        };

        raw.trim().parse::<u32>().map_err(|_| {
            ConfigError::InvalidValue {
                var,
                reason: format!("expected a non-negative integer, got '{}'", raw),
            }
            .into()
        })
    }

    /// Whether credentials for `aut` resolve without error.
    pub fn has_credentials(&self, aut: &str, env: Option<&str>) -> bool {
        self.aut_credentials(aut, env).is_ok()
    }

    /// Whether database parameters for `db_type` resolve without error.
    pub fn has_database_config(&self, db_type: &str) -> bool {
        self.database_config(db_type).is_ok()
    }
}
