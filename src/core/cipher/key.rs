//! Passphrase key derivation.

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::core::constants::KEY_LEN;

/// Derive the 32-byte AES key from a passphrase.
///
/// Plain SHA-256 of the UTF-8 bytes, no salt. Deterministic so the same
/// passphrase always opens values encrypted earlier. The key is wiped when
/// dropped and must not be cached.
pub fn derive_key(secret: &str) -> Zeroizing<[u8; KEY_LEN]> {
    let digest = Sha256::digest(secret.as_bytes());
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    key.copy_from_slice(&digest);
    key
}
