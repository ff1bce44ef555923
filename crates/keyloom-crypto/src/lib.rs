//! Keyloom Cryptography Library
//!
//! Key-derivation core for the keyloom project: an HKDF-style extract/expand
//! engine over SHA-256 or SHA-512, a multi-engine XOR combiner for defense in
//! depth, and key-identifier derivation. Secret buffers (IKM copies,
//! intermediate PRKs, expansion scratch blocks) are zeroed on every exit
//! path.

pub mod digest;
pub mod error;
pub mod kdf;
pub mod keyid;

// Re-export commonly used types for convenience
pub use digest::{digest, DigestAlgorithm, DigestStream, HmacStream};
pub use error::{Error, Result};
pub use kdf::{KdfEngine, KdfMode, KdfParams, KdfParamsBuilder, MultiKdf};
pub use keyid::{derive_key_id, KEY_ID_LEN};
