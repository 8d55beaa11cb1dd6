//! Resolved configuration values handed to collaborators.

use std::fmt;

use serde::Serialize;
use zeroize::Zeroize;

const REDACTED: &str = "********";

/// A decrypted username/password pair for one AUT and environment.
///
/// Built fresh on every lookup. The password is wiped on drop and never
/// shown by `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCredential {
    pub username: String,
    pub password: String,
}

impl ResolvedCredential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for ResolvedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedCredential")
            .field("username", &self.username)
            .field("password", &REDACTED)
            .finish()
    }
}

impl Drop for ResolvedCredential {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

/// Connection parameters for one database type.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseConfig {
    pub username: String,
    pub password: String,
    pub connect_string: String,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("username", &self.username)
            .field("password", &REDACTED)
            .field("connect_string", &self.connect_string)
            .finish()
    }
}

impl Drop for DatabaseConfig {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

/// Database connection parameters plus pool sizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolConfig {
    #[serde(flatten)]
    pub database: DatabaseConfig,
    pub pool_min: u32,
    pub pool_max: u32,
    pub pool_increment: u32,
    /// Seconds
    pub pool_timeout: u32,
}
