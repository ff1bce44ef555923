//! Digest and HMAC providers (SHA-256 and SHA-512)
//!
//! Streaming wrappers over `sha2` and `hmac` so multi-segment inputs can be
//! fed in insertion order without intermediate concatenation.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha512};

// ============================================================================
// Digest Algorithm Selection
// ============================================================================

/// Supported digest algorithms
///
/// Equality is by algorithm identity; the same enum also names the HMAC
/// built on that digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Default)]
pub enum DigestAlgorithm {
    /// SHA-256 (32-byte output)
    #[default]
    Sha256,
    /// SHA-512 (64-byte output)
    Sha512,
}

impl DigestAlgorithm {
    /// Output length of the digest in bytes
    pub fn output_len(&self) -> usize {
        match self {
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha512 => 64,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "SHA-256",
            DigestAlgorithm::Sha512 => "SHA-512",
        }
    }
}

// ============================================================================
// Streaming Digest
// ============================================================================

/// Incremental digest over the selected algorithm
pub enum DigestStream {
    Sha256(Sha256),
    Sha512(Sha512),
}

impl DigestStream {
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        match algorithm {
            DigestAlgorithm::Sha256 => DigestStream::Sha256(Sha256::new()),
            DigestAlgorithm::Sha512 => DigestStream::Sha512(Sha512::new()),
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        match self {
            DigestStream::Sha256(h) => h.update(data),
            DigestStream::Sha512(h) => h.update(data),
        }
    }

    pub fn finalize(self) -> Vec<u8> {
        match self {
            DigestStream::Sha256(h) => h.finalize().to_vec(),
            DigestStream::Sha512(h) => h.finalize().to_vec(),
        }
    }
}

/// Compute a one-shot digest of data using the specified algorithm
pub fn digest(data: &[u8], algorithm: DigestAlgorithm) -> Vec<u8> {
    let mut stream = DigestStream::new(algorithm);
    stream.update(data);
    stream.finalize()
}

// ============================================================================
// Streaming HMAC
// ============================================================================

/// Incremental HMAC keyed over the selected digest
pub enum HmacStream {
    Sha256(Hmac<Sha256>),
    Sha512(Hmac<Sha512>),
}

impl HmacStream {
    pub fn new(algorithm: DigestAlgorithm, key: &[u8]) -> Self {
        match algorithm {
            DigestAlgorithm::Sha256 => HmacStream::Sha256(
                Hmac::<Sha256>::new_from_slice(key).expect("hmac accepts any key length"),
            ),
            DigestAlgorithm::Sha512 => HmacStream::Sha512(
                Hmac::<Sha512>::new_from_slice(key).expect("hmac accepts any key length"),
            ),
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        match self {
            HmacStream::Sha256(m) => m.update(data),
            HmacStream::Sha512(m) => m.update(data),
        }
    }

    pub fn finalize(self) -> Vec<u8> {
        match self {
            HmacStream::Sha256(m) => m.finalize().into_bytes().to_vec(),
            HmacStream::Sha512(m) => m.finalize().into_bytes().to_vec(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
