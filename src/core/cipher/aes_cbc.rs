//! AES-256-CBC backend implementation.
//!
//! Key is SHA-256 of the passphrase, IV is 16 random bytes per call,
//! padding is PKCS#7. Output is `iv_b64:cipher_b64`. There is no MAC, so a
//! successful decrypt does not prove the ciphertext is untampered.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::trace;

use super::key::derive_key;
use super::Cipher;
use crate::core::constants::IV_LEN;
use crate::core::domain::EncryptedSecret;
use crate::error::{CipherError, Result};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// AES-256-CBC cipher keyed by a passphrase.
pub struct AesCbc;

impl AesCbc {
    /// Encrypt with a caller-supplied IV.
    ///
    /// Only for fixed test vectors; reusing an IV leaks plaintext equality.
    pub(crate) fn encrypt_with_iv(
        &self,
        plaintext: &str,
        secret: &str,
        iv: [u8; IV_LEN],
    ) -> Result<EncryptedSecret> {
        let key = derive_key(secret);
        let encryptor = Aes256CbcEnc::new_from_slices(&key[..], &iv)
            .map_err(|e| CipherError::Format(format!("key/IV length: {}", e)))?;
        let ciphertext = encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

        Ok(EncryptedSecret::new(iv, ciphertext))
    }
}

impl Cipher for AesCbc {
    fn name(&self) -> &'static str {
        "aes-256-cbc"
    }

    fn encrypt(&self, plaintext: &str, secret: &str) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let mut iv = [0u8; IV_LEN];
        OsRng
            .try_fill_bytes(&mut iv)
            .map_err(|e| CipherError::Entropy(e.to_string()))?;

        let encrypted = self.encrypt_with_iv(plaintext, secret, iv)?;

        trace!(ciphertext_len = encrypted.ciphertext().len(), "encrypted");
        Ok(encrypted.to_string())
    }

    fn decrypt(&self, encrypted: &str, secret: &str) -> Result<String> {
        let parsed: EncryptedSecret = encrypted.parse()?;
        trace!(ciphertext_len = parsed.ciphertext().len(), "decrypting");

        let key = derive_key(secret);
        let decryptor = Aes256CbcDec::new_from_slices(&key[..], parsed.iv())
            .map_err(|e| CipherError::Format(format!("key/IV length: {}", e)))?;
        let plaintext = decryptor
            .decrypt_padded_vec_mut::<Pkcs7>(parsed.ciphertext())
            .map_err(|_| {
                CipherError::Decryption("bad padding or corrupt ciphertext".to_string())
            })?;

        trace!(plaintext_len = plaintext.len(), "decrypted");

        String::from_utf8(plaintext).map_err(|e| {
            CipherError::Decryption(format!("plaintext is not UTF-8: {}", e)).into()
        })
    }
}
