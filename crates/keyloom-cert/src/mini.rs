//! Mini-certificates
//!
//! A mini-certificate binds a subject name, a public key and a usage set
//! into one canonical byte sequence without a full X.509 stack. It carries
//! no issuer, no validity window and no signature; it is an unsigned,
//! locally-trusted structure, and its "validation" is structural only.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use keyloom_crypto::derive_key_id;
use keyloom_key::KeyPair;

use crate::{
    ca::CaStatus,
    error::Result,
    extensions::{Extension, ExtensionSet},
    serial::SerialSource,
    usage::{decode_key_usage, encode_key_usage, KeyUsageKind, KeyUsageSet},
};

/// A certificate subject: a name plus an optional serial number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectId {
    name: String,
    serial: Option<u64>,
}

impl SubjectId {
    /// Subject with no serial, as mini-certificates use
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            serial: None,
        }
    }

    pub fn with_serial(name: impl Into<String>, serial: u64) -> Self {
        Self {
            name: name.into(),
            serial: Some(serial),
        }
    }

    /// Subject with a serial drawn from an injected source
    pub fn with_serial_from(name: impl Into<String>, source: &mut dyn SerialSource) -> Self {
        Self::with_serial(name, source.next_serial())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn serial(&self) -> Option<u64> {
        self.serial
    }
}

/// The fields round-tripped through the canonical encoded form
#[derive(Serialize, Deserialize)]
struct MiniCertPayload {
    subject_name: String,
    public_key: Vec<u8>,
    extensions: ExtensionSet,
}

/// A compact certificate: subject + public key + usage, canonically encoded
///
/// Immutable once constructed. Freshly created certificates retain the full
/// key pair; parsed ones carry the public half only.
#[derive(Debug, Clone)]
pub struct MiniCertificate {
    subject: SubjectId,
    key_pair: KeyPair,
    usage: KeyUsageSet,
    encoded: Vec<u8>,
}

impl MiniCertificate {
    /// Create a fresh mini-certificate and encode it immediately.
    ///
    /// The extension set carries a critical keyUsage entry, a critical
    /// basicConstraints entry when Certificate usage is requested, and the
    /// subject key identifier derived from the encoded public key.
    pub fn create(subject_name: &str, key_pair: KeyPair, usage: KeyUsageSet) -> Result<Self> {
        let public_key = key_pair.public_key_der()?;

        let mut extensions = ExtensionSet::new();
        encode_key_usage(usage, &mut extensions)?;
        if usage.contains(KeyUsageKind::Certificate) {
            CaStatus::from_leaf(true).write_extensions(&mut extensions)?;
        }
        extensions.add(
            false,
            Extension::SubjectKeyId {
                key_id: derive_key_id(&public_key).to_vec(),
            },
        )?;

        let payload = MiniCertPayload {
            subject_name: subject_name.to_string(),
            public_key,
            extensions,
        };
        let encoded = serde_json::to_vec(&payload)?;

        Ok(Self {
            subject: SubjectId::new(subject_name),
            key_pair,
            usage,
            encoded,
        })
    }

    /// Parse a previously encoded mini-certificate.
    ///
    /// The key pair is reconstructed public-only from the embedded encoded
    /// public key; the algorithm is inferred from those bytes.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let payload: MiniCertPayload = serde_json::from_slice(bytes)?;
        let key_pair = KeyPair::from_public_der(&payload.public_key)?;
        let usage = decode_key_usage(&payload.extensions);

        Ok(Self {
            subject: SubjectId::new(payload.subject_name),
            key_pair,
            usage,
            encoded: bytes.to_vec(),
        })
    }

    pub fn subject(&self) -> &SubjectId {
        &self.subject
    }

    /// Mini-certificates carry no issuer binding
    pub fn issuer(&self) -> Option<&SubjectId> {
        None
    }

    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }

    pub fn usage(&self) -> KeyUsageSet {
        self.usage
    }

    /// The canonical encoded form, as a defensive copy
    pub fn encoded(&self) -> Vec<u8> {
        self.encoded.clone()
    }

    /// No validity window is modeled; every date is acceptable
    pub fn is_valid_on(&self, _date: OffsetDateTime) -> bool {
        true
    }

    pub fn is_self_signed(&self) -> bool {
        false
    }

    /// Structural validation only.
    ///
    /// No cryptographic signature is checked: a mini-certificate has no
    /// issuer by construction, and a successful parse is treated as
    /// validity. Callers needing signature-backed trust must layer it above
    /// this type.
    pub fn validate_certificate(&self, _signer: &MiniCertificate) -> bool {
        true
    }
}
