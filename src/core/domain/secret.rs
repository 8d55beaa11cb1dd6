//! Encrypted secret type.
//!
//! The at-rest form of a protected value: `<base64 IV>:<base64 ciphertext>`.
//! This is the only persisted format autenv defines and is meant to live
//! inside `.env`-style files.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::core::constants::{IV_LEN, SEPARATOR};
use crate::error::CipherError;

/// A parsed `iv_b64:cipher_b64` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedSecret {
    iv: [u8; IV_LEN],
    ciphertext: Vec<u8>,
}

impl EncryptedSecret {
    /// Assemble from raw parts.
    pub fn new(iv: [u8; IV_LEN], ciphertext: Vec<u8>) -> Self {
        Self { iv, ciphertext }
    }

    /// Initialization vector
    pub fn iv(&self) -> &[u8; IV_LEN] {
        &self.iv
    }

    /// Raw ciphertext bytes
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Whether a raw value should be treated as encrypted.
    ///
    /// Any value containing the separator qualifies, so a plaintext that
    /// happens to contain `:` is classified as encrypted.
    pub fn looks_encrypted(value: &str) -> bool {
        value.contains(SEPARATOR)
    }
}

impl FromStr for EncryptedSecret {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (iv_b64, cipher_b64) = s
            .split_once(SEPARATOR)
            .ok_or_else(|| CipherError::Format("expected 'iv:ciphertext'".to_string()))?;

        if iv_b64.is_empty() || cipher_b64.is_empty() {
            return Err(CipherError::Format(
                "IV and ciphertext must both be non-empty".to_string(),
            ));
        }

        let iv_bytes = STANDARD
            .decode(iv_b64)
            .map_err(|e| CipherError::Format(format!("IV is not valid base64: {}", e)))?;
        let iv: [u8; IV_LEN] = iv_bytes.as_slice().try_into().map_err(|_| {
            CipherError::Format(format!(
                "IV must be {} bytes, got {}",
                IV_LEN,
                iv_bytes.len()
            ))
        })?;

        let ciphertext = STANDARD
            .decode(cipher_b64)
            .map_err(|e| CipherError::Format(format!("ciphertext is not valid base64: {}", e)))?;

        Ok(Self { iv, ciphertext })
    }
}

impl fmt::Display for EncryptedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            STANDARD.encode(self.iv),
            SEPARATOR,
            STANDARD.encode(&self.ciphertext)
        )
    }
}
