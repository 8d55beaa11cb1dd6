//! Constants used throughout autenv.
//!
//! Centralizes variable names, defaults and cipher parameters.

/// Preferred variable naming the current environment.
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Fallback variable naming the current environment.
pub const NODE_ENV_VAR: &str = "NODE_ENV";

/// Environment used when neither [`ENVIRONMENT_VAR`] nor [`NODE_ENV_VAR`] is set.
pub const DEFAULT_ENVIRONMENT: &str = "prod";

/// Variable holding the passphrase for encrypted values.
pub const DECRYPT_SECRET_VAR: &str = "DECRYPT_SECRET";

/// Variable controlling the tracing filter.
pub const LOG_VAR: &str = "AUTENV_LOG";

/// Environment variables file name (.env).
pub const ENV_FILE: &str = ".env";

/// Registry file name (autenv.toml).
pub const CONFIG_FILE: &str = "autenv.toml";

/// Separator between the IV and ciphertext segments.
pub const SEPARATOR: char = ':';

/// AES block / IV length in bytes.
pub const IV_LEN: usize = 16;

/// Derived key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// Prefix of the generic database variables (`DB_USERNAME`, ...).
pub const GENERIC_DB_PREFIX: &str = "DB";

/// Pool defaults: min, max, increment, timeout (seconds).
pub const DEFAULT_POOL_MIN: u32 = 1;
pub const DEFAULT_POOL_MAX: u32 = 10;
pub const DEFAULT_POOL_INCREMENT: u32 = 1;
pub const DEFAULT_POOL_TIMEOUT: u32 = 60;
