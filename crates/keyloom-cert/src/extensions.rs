//! Certificate extensions
//!
//! Each extension kind is a variant of one closed sum type, so downstream
//! code matches on the variant instead of inspecting opaque blobs. A set
//! holds at most one entry per kind and round-trips through a byte codec;
//! malformed bytes are a distinct error, never conflated with "extension
//! absent".

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The extension kinds understood by this trust layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Extension {
    /// CA marker with an optional path-length constraint
    BasicConstraints {
        is_ca: bool,
        path_len: Option<u32>,
    },
    /// Key-usage bits in X.509 bit numbering
    KeyUsage { bits: u16 },
    /// Identifier of the subject's public key
    SubjectKeyId { key_id: Vec<u8> },
    /// Identifier of the issuing key
    AuthorityKeyId { key_id: Vec<u8> },
}

impl Extension {
    fn kind_name(&self) -> &'static str {
        match self {
            Extension::BasicConstraints { .. } => "basicConstraints",
            Extension::KeyUsage { .. } => "keyUsage",
            Extension::SubjectKeyId { .. } => "subjectKeyId",
            Extension::AuthorityKeyId { .. } => "authorityKeyId",
        }
    }

    fn same_kind(&self, other: &Extension) -> bool {
        self.kind_name() == other.kind_name()
    }
}

/// One extension plus its criticality flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionEntry {
    pub critical: bool,
    pub extension: Extension,
}

/// An ordered set of extensions, at most one entry per kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionSet {
    entries: Vec<ExtensionEntry>,
}

impl ExtensionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an extension; fails if its kind is already present
    pub fn add(&mut self, critical: bool, extension: Extension) -> Result<()> {
        if self
            .entries
            .iter()
            .any(|entry| entry.extension.same_kind(&extension))
        {
            return Err(Error::DuplicateExtension(extension.kind_name()));
        }
        self.entries.push(ExtensionEntry {
            critical,
            extension,
        });
        Ok(())
    }

    pub fn entries(&self) -> &[ExtensionEntry] {
        &self.entries
    }

    pub fn basic_constraints(&self) -> Option<(bool, Option<u32>)> {
        self.entries.iter().find_map(|entry| match entry.extension {
            Extension::BasicConstraints { is_ca, path_len } => Some((is_ca, path_len)),
            _ => None,
        })
    }

    pub fn key_usage_bits(&self) -> Option<u16> {
        self.entries.iter().find_map(|entry| match entry.extension {
            Extension::KeyUsage { bits } => Some(bits),
            _ => None,
        })
    }

    pub fn subject_key_id(&self) -> Option<&[u8]> {
        self.entries.iter().find_map(|entry| match &entry.extension {
            Extension::SubjectKeyId { key_id } => Some(key_id.as_slice()),
            _ => None,
        })
    }

    pub fn authority_key_id(&self) -> Option<&[u8]> {
        self.entries.iter().find_map(|entry| match &entry.extension {
            Extension::AuthorityKeyId { key_id } => Some(key_id.as_slice()),
            _ => None,
        })
    }

    /// Serialize the set to its byte form
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Parse a set from its byte form
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_read_back() {
        let mut set = ExtensionSet::new();
        set.add(
            true,
            Extension::BasicConstraints {
                is_ca: true,
                path_len: Some(3),
            },
        )
        .unwrap();
        set.add(true, Extension::KeyUsage { bits: 0b10_0001 }).unwrap();
        set.add(
            false,
            Extension::SubjectKeyId {
                key_id: vec![1, 2, 3],
            },
        )
        .unwrap();

        assert_eq!(set.basic_constraints(), Some((true, Some(3))));
        assert_eq!(set.key_usage_bits(), Some(0b10_0001));
        assert_eq!(set.subject_key_id(), Some(&[1u8, 2, 3][..]));
        assert_eq!(set.authority_key_id(), None);
    }

    #[test]
    fn test_duplicate_kind_rejected() {
        let mut set = ExtensionSet::new();
        set.add(true, Extension::KeyUsage { bits: 1 }).unwrap();
        let err = set.add(true, Extension::KeyUsage { bits: 2 }).unwrap_err();
        assert!(matches!(err, Error::DuplicateExtension("keyUsage")));
    }

    #[test]
    fn test_byte_round_trip() {
        let mut set = ExtensionSet::new();
        set.add(
            true,
            Extension::BasicConstraints {
                is_ca: true,
                path_len: None,
            },
        )
        .unwrap();
        set.add(
            false,
            Extension::AuthorityKeyId {
                key_id: vec![0xAA; 32],
            },
        )
        .unwrap();

        let bytes = set.to_bytes().unwrap();
        let parsed = ExtensionSet::from_bytes(&bytes).unwrap();
        assert_eq!(parsed, set);
    }

    #[test]
    fn test_malformed_bytes_is_an_error() {
        let result = ExtensionSet::from_bytes(b"{not json");
        assert!(matches!(result, Err(Error::EncodingError(_))));
    }

    #[test]
    fn test_criticality_preserved() {
        let mut set = ExtensionSet::new();
        set.add(true, Extension::KeyUsage { bits: 0 }).unwrap();
        set.add(
            false,
            Extension::SubjectKeyId { key_id: vec![7] },
        )
        .unwrap();

        let parsed = ExtensionSet::from_bytes(&set.to_bytes().unwrap()).unwrap();
        assert!(parsed.entries()[0].critical);
        assert!(!parsed.entries()[1].critical);
    }
}
