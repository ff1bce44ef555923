//! Key pairs
//!
//! A [`KeyPair`] holds a public half and, when generated locally, a private
//! half. Pairs reconstructed from encoded public-key bytes are public-only;
//! the algorithm is inferred from the bytes themselves.

use pkcs8::{DecodePublicKey, EncodePublicKey};

use crate::{
    error::{Error, Result},
    spki::algorithm_from_spki,
    types::KeyAlgorithm,
};

/// A key pair over one of the supported algorithms
#[derive(Debug, Clone)]
pub enum KeyPair {
    Ed25519 {
        signing: Option<ed25519_dalek::SigningKey>,
        verifying: ed25519_dalek::VerifyingKey,
    },
    P256 {
        signing: Option<p256::ecdsa::SigningKey>,
        verifying: p256::ecdsa::VerifyingKey,
    },
}

impl KeyPair {
    /// Generate a fresh key pair from a random seed
    pub fn generate(algorithm: KeyAlgorithm) -> Result<Self> {
        let mut seed = [0u8; 32];
        getrandom::fill(&mut seed).map_err(|e| Error::GetrandomError(e.to_string()))?;

        match algorithm {
            KeyAlgorithm::Ed25519 => {
                let signing = ed25519_dalek::SigningKey::from_bytes(&seed);
                let verifying = signing.verifying_key();
                Ok(KeyPair::Ed25519 {
                    signing: Some(signing),
                    verifying,
                })
            }
            KeyAlgorithm::P256 => {
                let signing = p256::ecdsa::SigningKey::from_slice(&seed)
                    .map_err(|e| Error::KeyError(format!("invalid P-256 scalar: {e}")))?;
                let verifying = *signing.verifying_key();
                Ok(KeyPair::P256 {
                    signing: Some(signing),
                    verifying,
                })
            }
        }
    }

    pub fn algorithm(&self) -> KeyAlgorithm {
        match self {
            KeyPair::Ed25519 { .. } => KeyAlgorithm::Ed25519,
            KeyPair::P256 { .. } => KeyAlgorithm::P256,
        }
    }

    /// Whether the private half is present
    pub fn has_private(&self) -> bool {
        match self {
            KeyPair::Ed25519 { signing, .. } => signing.is_some(),
            KeyPair::P256 { signing, .. } => signing.is_some(),
        }
    }

    /// Encode the public key as SPKI DER
    pub fn public_key_der(&self) -> Result<Vec<u8>> {
        let document = match self {
            KeyPair::Ed25519 { verifying, .. } => verifying.to_public_key_der()?,
            KeyPair::P256 { verifying, .. } => verifying.to_public_key_der()?,
        };
        Ok(document.as_bytes().to_vec())
    }

    /// Reconstruct a public-only key pair from SPKI DER bytes
    ///
    /// The algorithm is inferred from the encoded bytes alone.
    pub fn from_public_der(der: &[u8]) -> Result<Self> {
        match algorithm_from_spki(der)? {
            KeyAlgorithm::Ed25519 => {
                let verifying = ed25519_dalek::VerifyingKey::from_public_key_der(der)?;
                Ok(KeyPair::Ed25519 {
                    signing: None,
                    verifying,
                })
            }
            KeyAlgorithm::P256 => {
                let verifying = p256::ecdsa::VerifyingKey::from_public_key_der(der)?;
                Ok(KeyPair::P256 {
                    signing: None,
                    verifying,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_ed25519() {
        let pair = KeyPair::generate(KeyAlgorithm::Ed25519).unwrap();
        assert_eq!(pair.algorithm(), KeyAlgorithm::Ed25519);
        assert!(pair.has_private());
    }

    #[test]
    fn test_generate_p256() {
        let pair = KeyPair::generate(KeyAlgorithm::P256).unwrap();
        assert_eq!(pair.algorithm(), KeyAlgorithm::P256);
        assert!(pair.has_private());
    }

    #[test]
    fn test_public_der_round_trip_ed25519() {
        let pair = KeyPair::generate(KeyAlgorithm::Ed25519).unwrap();
        let der = pair.public_key_der().unwrap();

        let parsed = KeyPair::from_public_der(&der).unwrap();
        assert_eq!(parsed.algorithm(), KeyAlgorithm::Ed25519);
        assert!(!parsed.has_private());
        assert_eq!(parsed.public_key_der().unwrap(), der);
    }

    #[test]
    fn test_public_der_round_trip_p256() {
        let pair = KeyPair::generate(KeyAlgorithm::P256).unwrap();
        let der = pair.public_key_der().unwrap();

        let parsed = KeyPair::from_public_der(&der).unwrap();
        assert_eq!(parsed.algorithm(), KeyAlgorithm::P256);
        assert!(!parsed.has_private());
        assert_eq!(parsed.public_key_der().unwrap(), der);
    }

    #[test]
    fn test_algorithm_inferred_from_bytes() {
        let ed = KeyPair::generate(KeyAlgorithm::Ed25519).unwrap();
        let p = KeyPair::generate(KeyAlgorithm::P256).unwrap();
        assert_eq!(
            algorithm_from_spki(&ed.public_key_der().unwrap()).unwrap(),
            KeyAlgorithm::Ed25519
        );
        assert_eq!(
            algorithm_from_spki(&p.public_key_der().unwrap()).unwrap(),
            KeyAlgorithm::P256
        );
    }

    #[test]
    fn test_distinct_pairs_encode_differently() {
        let a = KeyPair::generate(KeyAlgorithm::Ed25519).unwrap();
        let b = KeyPair::generate(KeyAlgorithm::Ed25519).unwrap();
        assert_ne!(a.public_key_der().unwrap(), b.public_key_der().unwrap());
    }

    #[test]
    fn test_malformed_bytes_rejected() {
        assert!(KeyPair::from_public_der(b"garbage").is_err());
    }
}
