//! KDF parameter bag
//!
//! Parameters are assembled through [`KdfParamsBuilder`] and frozen by one of
//! the mode-selection calls, which validate eagerly: expand-only without a
//! PRK and a zero target length are rejected at build time, never at
//! derivation time. A [`KdfParams`] is consumed by exactly one
//! `derive_bytes` call and zeroes every byte buffer it holds on drop.

use std::mem;

use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Derivation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KdfMode {
    /// Extraction only; the output is the PRK itself
    ExtractOnly,
    /// Expansion only, over a caller-supplied PRK
    ExpandOnly,
    /// Extract, then pipe the intermediate PRK straight into expand
    ExtractThenExpand,
}

impl KdfMode {
    /// Whether this mode runs the extract phase
    pub fn extracts(&self) -> bool {
        matches!(self, KdfMode::ExtractOnly | KdfMode::ExtractThenExpand)
    }

    /// Whether this mode runs the expand phase
    pub fn expands(&self) -> bool {
        matches!(self, KdfMode::ExpandOnly | KdfMode::ExtractThenExpand)
    }
}

/// Immutable-after-build derivation parameters
///
/// Segment lists preserve insertion order; each builder call appended a copy.
#[derive(Debug, Clone)]
pub struct KdfParams {
    ikm: Vec<Vec<u8>>,
    salt: Vec<Vec<u8>>,
    info: Vec<Vec<u8>>,
    mode: KdfMode,
    length: usize,
    prk: Option<Vec<u8>>,
}

impl KdfParams {
    pub fn ikm_segments(&self) -> &[Vec<u8>] {
        &self.ikm
    }

    pub fn salt_segments(&self) -> &[Vec<u8>] {
        &self.salt
    }

    pub fn info_segments(&self) -> &[Vec<u8>] {
        &self.info
    }

    pub fn mode(&self) -> KdfMode {
        self.mode
    }

    /// Target output length in bytes; zero for extract-only
    pub fn length(&self) -> usize {
        self.length
    }

    /// The caller-supplied PRK; present iff the mode is expand-only
    pub fn prk(&self) -> Option<&[u8]> {
        self.prk.as_deref()
    }
}

impl Drop for KdfParams {
    fn drop(&mut self) {
        zeroize_segments(&mut self.ikm);
        zeroize_segments(&mut self.salt);
        zeroize_segments(&mut self.info);
        if let Some(prk) = self.prk.as_mut() {
            prk.zeroize();
        }
    }
}

fn zeroize_segments(segments: &mut [Vec<u8>]) {
    for segment in segments.iter_mut() {
        segment.zeroize();
    }
}

/// Builder for [`KdfParams`]
///
/// `ikm`/`salt`/`info` accumulate: repeated calls append further segments
/// rather than overwrite. The mode-selection methods consume the builder.
#[derive(Debug, Default)]
pub struct KdfParamsBuilder {
    ikm: Vec<Vec<u8>>,
    salt: Vec<Vec<u8>>,
    info: Vec<Vec<u8>>,
}

impl KdfParamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an input-keying-material segment
    pub fn ikm(mut self, segment: &[u8]) -> Self {
        self.ikm.push(segment.to_vec());
        self
    }

    /// Append a salt segment
    pub fn salt(mut self, segment: &[u8]) -> Self {
        self.salt.push(segment.to_vec());
        self
    }

    /// Append an info (context) segment
    pub fn info(mut self, segment: &[u8]) -> Self {
        self.info.push(segment.to_vec());
        self
    }

    /// Finalize for extraction only
    pub fn extract_only(mut self) -> Result<KdfParams> {
        Ok(self.freeze(KdfMode::ExtractOnly, 0, None))
    }

    /// Finalize for expansion only, over a caller-supplied PRK
    pub fn expand_only(mut self, prk: &[u8], length: usize) -> Result<KdfParams> {
        if prk.is_empty() {
            return Err(Error::Configuration(
                "expand-only derivation requires a non-empty PRK".to_string(),
            ));
        }
        check_length(length)?;
        Ok(self.freeze(KdfMode::ExpandOnly, length, Some(prk.to_vec())))
    }

    /// Finalize for extract-then-expand
    pub fn extract_then_expand(mut self, length: usize) -> Result<KdfParams> {
        check_length(length)?;
        Ok(self.freeze(KdfMode::ExtractThenExpand, length, None))
    }

    fn freeze(&mut self, mode: KdfMode, length: usize, prk: Option<Vec<u8>>) -> KdfParams {
        KdfParams {
            ikm: mem::take(&mut self.ikm),
            salt: mem::take(&mut self.salt),
            info: mem::take(&mut self.info),
            mode,
            length,
            prk,
        }
    }
}

impl Drop for KdfParamsBuilder {
    fn drop(&mut self) {
        zeroize_segments(&mut self.ikm);
        zeroize_segments(&mut self.salt);
        zeroize_segments(&mut self.info);
    }
}

fn check_length(length: usize) -> Result<()> {
    if length == 0 {
        return Err(Error::Configuration(
            "target length must be positive".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_accumulate_in_order() {
        let params = KdfParamsBuilder::new()
            .ikm(b"first")
            .ikm(b"second")
            .salt(b"s1")
            .info(b"i1")
            .info(b"i2")
            .extract_then_expand(32)
            .unwrap();

        assert_eq!(params.ikm_segments(), &[b"first".to_vec(), b"second".to_vec()]);
        assert_eq!(params.salt_segments(), &[b"s1".to_vec()]);
        assert_eq!(params.info_segments(), &[b"i1".to_vec(), b"i2".to_vec()]);
        assert_eq!(params.mode(), KdfMode::ExtractThenExpand);
        assert_eq!(params.length(), 32);
        assert!(params.prk().is_none());
    }

    #[test]
    fn test_expand_only_requires_prk() {
        let err = KdfParamsBuilder::new().expand_only(b"", 32).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_zero_length_rejected_at_build_time() {
        let err = KdfParamsBuilder::new()
            .ikm(b"ikm")
            .extract_then_expand(0)
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));

        let err = KdfParamsBuilder::new().expand_only(b"prk", 0).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_extract_only_carries_no_length() {
        let params = KdfParamsBuilder::new().ikm(b"ikm").extract_only().unwrap();
        assert_eq!(params.mode(), KdfMode::ExtractOnly);
        assert_eq!(params.length(), 0);
    }

    #[test]
    fn test_mode_predicates() {
        assert!(KdfMode::ExtractOnly.extracts());
        assert!(!KdfMode::ExtractOnly.expands());
        assert!(!KdfMode::ExpandOnly.extracts());
        assert!(KdfMode::ExpandOnly.expands());
        assert!(KdfMode::ExtractThenExpand.extracts());
        assert!(KdfMode::ExtractThenExpand.expands());
    }
}
