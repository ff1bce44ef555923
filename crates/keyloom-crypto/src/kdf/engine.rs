//! HKDF-style extract/expand engine over a single digest/HMAC pair
//!
//! Extraction digests the salt segments into a salt key, then computes
//! HMAC(salt key, IKM). Expansion chains HMAC blocks of
//! `previous-block || info || counter`, with a single-byte counter starting
//! at 0. The counter base and the digest-derived salt key are byte-exact
//! requirements of the wire-compatible system this engine serves, so RFC 5869
//! test vectors do not apply.

use zeroize::{Zeroize, Zeroizing};

use crate::{
    digest::{DigestAlgorithm, DigestStream, HmacStream},
    error::{Error, Result},
    kdf::params::{KdfMode, KdfParams},
};

/// Maximum number of expansion blocks; the block counter is one byte.
const MAX_BLOCKS: usize = 256;

/// A single HKDF instance bound to one digest/HMAC pair.
///
/// Engines hold no per-derivation state; build one per derivation call, or
/// guard a shared instance with external synchronization.
#[derive(Debug, Clone, Copy)]
pub struct KdfEngine {
    algorithm: DigestAlgorithm,
}

impl KdfEngine {
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Derive bytes according to the mode frozen into `params`.
    ///
    /// Consumes the parameter bag; its buffers are zeroed when it drops.
    /// For extract-then-expand the intermediate PRK is zeroed on every exit
    /// path before this call returns.
    pub fn derive_bytes(&self, params: KdfParams) -> Result<Vec<u8>> {
        match params.mode() {
            KdfMode::ExtractOnly => {
                Ok(self.extract(params.salt_segments(), params.ikm_segments()))
            }
            KdfMode::ExpandOnly => {
                let prk = params.prk().ok_or_else(|| {
                    Error::InvalidParameters(
                        "expand-only derivation requires a pre-supplied PRK".to_string(),
                    )
                })?;
                self.expand(prk, params.info_segments(), params.length())
            }
            KdfMode::ExtractThenExpand => {
                let prk = Zeroizing::new(
                    self.extract(params.salt_segments(), params.ikm_segments()),
                );
                self.expand(&prk, params.info_segments(), params.length())
            }
        }
    }

    /// Extract phase: PRK = HMAC(digest(salt segments), IKM segments)
    fn extract(&self, salt: &[Vec<u8>], ikm: &[Vec<u8>]) -> Vec<u8> {
        let mut hasher = DigestStream::new(self.algorithm);
        for segment in salt {
            hasher.update(segment);
        }
        let salt_key = hasher.finalize();

        let mut mac = HmacStream::new(self.algorithm, &salt_key);
        for segment in ikm {
            mac.update(segment);
        }
        mac.finalize()
    }

    /// Expand phase: block i = HMAC(PRK, block i-1 || info segments || [i])
    fn expand(&self, prk: &[u8], info: &[Vec<u8>], length: usize) -> Result<Vec<u8>> {
        if length == 0 {
            return Err(Error::InvalidParameters(
                "target length must be positive".to_string(),
            ));
        }
        let hash_len = self.algorithm.output_len();
        let blocks = length.div_ceil(hash_len);
        if blocks > MAX_BLOCKS {
            return Err(Error::InvalidParameters(format!(
                "requested length {} exceeds the maximum expandable output of {} bytes",
                length,
                MAX_BLOCKS * hash_len
            )));
        }

        let mut okm = vec![0u8; length];
        let mut block = Zeroizing::new(Vec::new());
        let mut written = 0;
        for counter in 0..blocks {
            let mut mac = HmacStream::new(self.algorithm, prk);
            mac.update(&block);
            for segment in info {
                mac.update(segment);
            }
            mac.update(&[counter as u8]);
            let next = mac.finalize();
            block.zeroize();
            *block = next;

            let take = (length - written).min(hash_len);
            okm[written..written + take].copy_from_slice(&block[..take]);
            written += take;
        }
        Ok(okm)
    }
}
