//! Error types.
//!
//! Errors are grouped by the layer that raises them. Every variant is
//! surfaced to the caller as-is: a missing variable or a wrong secret is
//! never transient, so nothing here is retried.

use thiserror::Error;

/// Top-level error for the library and CLI.
#[derive(Error, Debug)]
pub enum Error {
    /// Encryption or decryption of a secret failed.
    #[error(transparent)]
    Cipher(#[from] CipherError),

    /// Configuration could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The command line was incomplete.
    #[error("{0}")]
    Usage(String),

    /// Filesystem error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be produced.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the secret cipher.
#[derive(Error, Debug)]
pub enum CipherError {
    /// The value does not have the `iv_b64:cipher_b64` shape.
    #[error("invalid encrypted value format: {0}")]
    Format(String),

    /// Wrong secret or corrupt ciphertext.
    #[error("decryption failed: {0}")]
    Decryption(String),

    /// The system entropy source could not produce an IV.
    #[error("entropy source unavailable: {0}")]
    Entropy(String),
}

/// Errors from configuration resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more required environment variables are not set.
    #[error("missing configuration: set {}", .vars.join(", "))]
    Missing { vars: Vec<String> },

    /// A value is encrypted but no decryption secret is available.
    ///
    /// `var` is `None` when the value was not read from a named variable.
    #[error("{} is encrypted but DECRYPT_SECRET is not set", subject(.var))]
    MissingSecret { var: Option<String> },

    /// An encrypted value could not be decrypted with `DECRYPT_SECRET`.
    #[error(
        "could not decrypt {}: {source}; check that DECRYPT_SECRET matches the secret \
         used at encryption time and has no stray whitespace",
        subject(.var)
    )]
    Decryption {
        var: Option<String>,
        #[source]
        source: CipherError,
    },

    /// A variable is set but its value is unusable.
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// An explicitly requested file does not exist.
    #[error("file not found: {0}")]
    NotFound(String),

    /// A file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// `autenv.toml` is not valid TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// `autenv.toml` parsed but is structurally invalid.
    #[error("invalid config field '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// Registry validation found problems.
    #[error("{} configuration problem(s):\n{}", .problems.len(), .problems.join("\n"))]
    Invalid { problems: Vec<String> },
}

impl ConfigError {
    /// Shorthand for a single missing variable.
    pub fn missing(var: impl Into<String>) -> Self {
        Self::Missing {
            vars: vec![var.into()],
        }
    }
}

fn subject(var: &Option<String>) -> &str {
    var.as_deref().unwrap_or("the value")
}

pub type Result<T> = std::result::Result<T, Error>;
