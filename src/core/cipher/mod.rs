//! Secret encryption.
//!
//! Reversible protection of short secrets (usually login passwords) so they
//! can sit in shared `.env` files without exposing plaintext.
//!
//! ## Format
//!
//! `<base64 IV>:<base64 ciphertext>`, produced by [`AesCbc`]. Values written
//! by the earlier Node.js helper decrypt unchanged.

use crate::error::Result;

mod aes_cbc;
mod key;

pub use aes_cbc::AesCbc;
pub use key::derive_key;

/// Passphrase-keyed symmetric cipher.
pub trait Cipher {
    /// Encrypt plaintext with a passphrase.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::Entropy` if no IV could be generated.
    fn encrypt(&self, plaintext: &str, secret: &str) -> Result<String>;

    /// Decrypt a value produced by [`Cipher::encrypt`].
    ///
    /// # Errors
    ///
    /// Returns `CipherError::Format` for a malformed value and
    /// `CipherError::Decryption` for a wrong secret or corrupt ciphertext.
    fn decrypt(&self, encrypted: &str, secret: &str) -> Result<String>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}

/// Encrypt with the default AES-256-CBC backend.
///
/// Convenience wrapper around `AesCbc::encrypt`.
pub fn encrypt(plaintext: &str, secret: &str) -> Result<String> {
    AesCbc.encrypt(plaintext, secret)
}

/// Decrypt with the default AES-256-CBC backend.
///
/// Convenience wrapper around `AesCbc::decrypt`.
pub fn decrypt(encrypted: &str, secret: &str) -> Result<String> {
    AesCbc.decrypt(encrypted, secret)
}
