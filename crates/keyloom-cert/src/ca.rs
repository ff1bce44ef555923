//! CA status
//!
//! Tracks whether a key pair may sign other certificates and how many
//! further delegation hops remain. The path length grows by exactly one per
//! signing hop away from the leaf, and an unconstrained signer contributes 0
//! to its first CA child rather than propagating "unconstrained"; that
//! asymmetry is part of the trust model and is preserved exactly.

use crate::{
    error::Result,
    extensions::{Extension, ExtensionSet},
    usage::{KeyUsageKind, KeyUsageSet},
};

/// Whether a certificate is a CA, and its path-length constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaStatus {
    is_ca: bool,
    path_len: Option<u32>,
}

impl CaStatus {
    /// Status for a certificate that is not issuing-linked; no path length
    pub fn from_leaf(is_ca: bool) -> Self {
        Self {
            is_ca,
            path_len: None,
        }
    }

    /// CA status with an explicit path-length constraint
    pub fn from_path_len(path_len: u32) -> Self {
        Self {
            is_ca: true,
            path_len: Some(path_len),
        }
    }

    /// Derive a child's status from the requested usage and its signer.
    ///
    /// Pure function; neither side holds a reference to the other. A child
    /// granted Certificate usage sits one hop further from the leaf than its
    /// signer; a signer without a constraint contributes 0. A child without
    /// Certificate usage is not a CA and carries no path length.
    pub fn derive_from_signer(requested: KeyUsageSet, signer: &CaStatus) -> Self {
        if requested.contains(KeyUsageKind::Certificate) {
            Self {
                is_ca: true,
                path_len: Some(signer.path_len.map(|p| p + 1).unwrap_or(0)),
            }
        } else {
            Self::from_leaf(false)
        }
    }

    /// Read CA facts out of a certificate's extensions.
    ///
    /// A basicConstraints entry marked CA wraps its (possibly absent)
    /// path-length constraint; anything else is a non-CA leaf.
    pub fn parse_from_extensions(extensions: &ExtensionSet) -> Self {
        match extensions.basic_constraints() {
            Some((true, path_len)) => Self {
                is_ca: true,
                path_len,
            },
            _ => Self::from_leaf(false),
        }
    }

    /// Emit this status as a critical basicConstraints entry.
    pub fn write_extensions(&self, extensions: &mut ExtensionSet) -> Result<()> {
        extensions.add(
            true,
            Extension::BasicConstraints {
                is_ca: self.is_ca,
                path_len: self.path_len,
            },
        )
    }

    pub fn is_ca(&self) -> bool {
        self.is_ca
    }

    /// `None` means unconstrained (meaningful only for CAs)
    pub fn path_len(&self) -> Option<u32> {
        self.path_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn cert_usage() -> KeyUsageSet {
        KeyUsageSet::with(KeyUsageKind::Certificate)
    }

    #[test]
    fn test_from_leaf_has_no_path_len() {
        assert_eq!(CaStatus::from_leaf(true).path_len(), None);
        assert_eq!(CaStatus::from_leaf(false).path_len(), None);
        assert!(CaStatus::from_leaf(true).is_ca());
        assert!(!CaStatus::from_leaf(false).is_ca());
    }

    #[test]
    fn test_from_path_len_is_always_ca() {
        let status = CaStatus::from_path_len(4);
        assert!(status.is_ca());
        assert_eq!(status.path_len(), Some(4));
    }

    #[test]
    fn test_unconstrained_signer_contributes_zero() {
        let root = CaStatus::from_leaf(true);
        let child = CaStatus::derive_from_signer(cert_usage(), &root);
        assert!(child.is_ca());
        assert_eq!(child.path_len(), Some(0));
    }

    #[test]
    fn test_path_len_grows_by_one_per_hop() {
        // Root at depth 0 is unconstrained; the child at depth k has
        // path_len == k - 1.
        let mut signer = CaStatus::from_leaf(true);
        assert_eq!(signer.path_len(), None);
        for depth in 1..=6u32 {
            let child = CaStatus::derive_from_signer(cert_usage(), &signer);
            assert_eq!(child.path_len(), Some(depth - 1));
            signer = child;
        }
    }

    #[test]
    fn test_non_certificate_usage_yields_non_ca() {
        let signer = CaStatus::from_path_len(7);
        let child =
            CaStatus::derive_from_signer(KeyUsageSet::with(KeyUsageKind::Signature), &signer);
        assert!(!child.is_ca());
        assert_eq!(child.path_len(), None);
    }

    #[test]
    fn test_extension_round_trip() {
        for status in [
            CaStatus::from_leaf(true),
            CaStatus::from_leaf(false),
            CaStatus::from_path_len(0),
            CaStatus::from_path_len(9),
        ] {
            let mut extensions = ExtensionSet::new();
            status.write_extensions(&mut extensions).unwrap();

            let parsed = CaStatus::parse_from_extensions(&extensions);
            if status.is_ca() {
                assert_eq!(parsed, status);
            } else {
                // Non-CA parses back as a plain leaf.
                assert_eq!(parsed, CaStatus::from_leaf(false));
            }
        }
    }

    #[test]
    fn test_write_is_critical() {
        let mut extensions = ExtensionSet::new();
        CaStatus::from_path_len(1)
            .write_extensions(&mut extensions)
            .unwrap();
        assert!(extensions.entries()[0].critical);
    }

    #[test]
    fn test_write_reports_duplicate() {
        let mut extensions = ExtensionSet::new();
        CaStatus::from_leaf(true)
            .write_extensions(&mut extensions)
            .unwrap();
        let err = CaStatus::from_leaf(true)
            .write_extensions(&mut extensions)
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateExtension(_)));
    }

    #[test]
    fn test_absent_constraints_parse_as_leaf() {
        let extensions = ExtensionSet::new();
        let status = CaStatus::parse_from_extensions(&extensions);
        assert_eq!(status, CaStatus::from_leaf(false));
    }
}
