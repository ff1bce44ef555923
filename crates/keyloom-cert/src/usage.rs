//! Key usage
//!
//! Maps the internal usage-flag set to and from the keyUsage extension's bit
//! string. Certificate (signing other certificates) is special: it is granted
//! only when basicConstraints marks the certificate as a CA *and* the
//! keyCertSign bit is asserted. Every other usage maps 1:1 to one extension
//! bit, where a bit counts as asserted if the keyUsage extension is absent
//! entirely or present with the bit set. The permissive absence rule is
//! deliberate and preserved; see the crate docs.

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    extensions::{Extension, ExtensionSet},
};

/// The cryptographic operations a key pair can be authorized to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyUsageKind {
    /// Signing other certificates (keyCertSign; requires CA status)
    Certificate,
    /// Digital signatures over arbitrary data (digitalSignature)
    Signature,
    /// Non-repudiation signatures (nonRepudiation)
    NonRepudiation,
    /// Key agreement (keyAgreement)
    Agreement,
    /// Encrypting keys for transport (keyEncipherment)
    KeyEncrypt,
    /// Encrypting raw data (dataEncipherment)
    DataEncrypt,
    /// Agreement restricted to encipherment (encipherOnly)
    EncryptOnly,
    /// Agreement restricted to decipherment (decipherOnly)
    DecryptOnly,
}

impl KeyUsageKind {
    pub const ALL: [KeyUsageKind; 8] = [
        KeyUsageKind::Certificate,
        KeyUsageKind::Signature,
        KeyUsageKind::NonRepudiation,
        KeyUsageKind::Agreement,
        KeyUsageKind::KeyEncrypt,
        KeyUsageKind::DataEncrypt,
        KeyUsageKind::EncryptOnly,
        KeyUsageKind::DecryptOnly,
    ];

    /// The kind's bit in X.509 keyUsage numbering
    fn x509_bit(&self) -> u16 {
        match self {
            KeyUsageKind::Signature => 1 << 0,
            KeyUsageKind::NonRepudiation => 1 << 1,
            KeyUsageKind::KeyEncrypt => 1 << 2,
            KeyUsageKind::DataEncrypt => 1 << 3,
            KeyUsageKind::Agreement => 1 << 4,
            KeyUsageKind::Certificate => 1 << 5,
            KeyUsageKind::EncryptOnly => 1 << 7,
            KeyUsageKind::DecryptOnly => 1 << 8,
        }
    }
}

/// A bit-set over the eight usage kinds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyUsageSet(u16);

impl KeyUsageSet {
    pub fn none() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        let mut set = Self::none();
        for kind in KeyUsageKind::ALL {
            set.insert(kind);
        }
        set
    }

    pub fn with(kind: KeyUsageKind) -> Self {
        let mut set = Self::none();
        set.insert(kind);
        set
    }

    pub fn insert(&mut self, kind: KeyUsageKind) {
        self.0 |= kind.x509_bit();
    }

    pub fn remove(&mut self, kind: KeyUsageKind) {
        self.0 &= !kind.x509_bit();
    }

    pub fn contains(&self, kind: KeyUsageKind) -> bool {
        self.0 & kind.x509_bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = KeyUsageKind> + '_ {
        KeyUsageKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }

    /// The raw keyUsage bits in X.509 numbering
    pub fn bits(&self) -> u16 {
        self.0
    }
}

/// Emit a critical keyUsage extension carrying the set's bits.
///
/// A basicConstraints entry is written separately via `CaStatus` when
/// Certificate usage is being granted.
pub fn encode_key_usage(usage: KeyUsageSet, extensions: &mut ExtensionSet) -> Result<()> {
    extensions.add(true, Extension::KeyUsage { bits: usage.bits() })
}

/// Resolve the usage set declared by a certificate's extensions.
pub fn decode_key_usage(extensions: &ExtensionSet) -> KeyUsageSet {
    let is_ca = extensions
        .basic_constraints()
        .map(|(is_ca, _)| is_ca)
        .unwrap_or(false);
    let declared = extensions.key_usage_bits();
    let asserted = |kind: KeyUsageKind| match declared {
        // No usage constraint declared at all: permissive
        None => true,
        Some(bits) => bits & kind.x509_bit() != 0,
    };

    let mut usage = KeyUsageSet::none();
    for kind in KeyUsageKind::ALL {
        let granted = match kind {
            KeyUsageKind::Certificate => is_ca && asserted(kind),
            _ => asserted(kind),
        };
        if granted {
            usage.insert(kind);
        }
    }
    usage
}
