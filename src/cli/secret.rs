//! Encrypt and decrypt commands.

use std::path::Path;

use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::context;
use crate::core::cipher;
use crate::core::constants::DECRYPT_SECRET_VAR;
use crate::error::{ConfigError, Error, Result};

const ENCRYPT_USAGE: &str = "usage: autenv encrypt <plaintext> <secret>";

/// Encrypt a value and print `iv:ciphertext` to stdout.
///
/// Both arguments are required; a missing one is a usage error (exit 1).
pub fn encrypt(plaintext: Option<String>, secret: Option<String>) -> Result<()> {
    let (plaintext, secret) = match (plaintext, secret) {
        (Some(p), Some(s)) if !p.is_empty() && !s.is_empty() => {
            (Zeroizing::new(p), Zeroizing::new(s))
        }
        _ => return Err(Error::Usage(ENCRYPT_USAGE.to_string())),
    };

    let encrypted = cipher::encrypt(&plaintext, &secret)?;
    // Plain output for scripting - no decoration
    println!("{}", encrypted);
    Ok(())
}

/// Decrypt a value and print the plaintext to stdout.
///
/// The passphrase comes from `--secret`, else `DECRYPT_SECRET`.
pub fn decrypt(env_file: Option<&Path>, value: &str, secret: Option<String>) -> Result<()> {
    let secret = match secret {
        Some(s) => Zeroizing::new(s),
        None => {
            debug!("no --secret given, reading {}", DECRYPT_SECRET_VAR);
            let snapshot = context::snapshot(env_file)?;
            Zeroizing::new(snapshot.require(DECRYPT_SECRET_VAR)?.to_string())
        }
    };

    if secret.is_empty() {
        return Err(ConfigError::missing(DECRYPT_SECRET_VAR).into());
    }

    let plaintext = Zeroizing::new(cipher::decrypt(value.trim(), &secret)?);
    println!("{}", plaintext.as_str());
    Ok(())
}
