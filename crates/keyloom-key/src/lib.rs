//! Keyloom Key Library
//!
//! Key-pair provider for the keyloom project: generation, SPKI DER encoding
//! of public keys, and reconstruction of public-only pairs from encoded
//! bytes with the algorithm inferred from the bytes themselves.

pub mod error;
pub mod key;
pub mod spki;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use key::KeyPair;
pub use spki::algorithm_from_spki;
pub use types::KeyAlgorithm;
