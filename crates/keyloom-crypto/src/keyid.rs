//! Key-identifier derivation
//!
//! A key id is the full SHA-256 digest of a key's encoded public key bytes.
//! It populates the subjectKeyIdentifier extension at issuance and links
//! certificates without embedding full keys.

use crate::digest::{digest, DigestAlgorithm};

/// Length of a derived key identifier in bytes.
pub const KEY_ID_LEN: usize = 32;

/// Derive the stable identifier for an encoded public key.
///
/// Deterministic: identical input bytes always produce the same identifier.
/// The digest is kept whole, never truncated.
pub fn derive_key_id(encoded_public_key: &[u8]) -> [u8; KEY_ID_LEN] {
    let mut id = [0u8; KEY_ID_LEN];
    id.copy_from_slice(&digest(encoded_public_key, DigestAlgorithm::Sha256));
    id
}
