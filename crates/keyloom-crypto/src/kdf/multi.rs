//! Multi-engine KDF combiner
//!
//! Fans one logical derivation out to a primary engine plus at least one
//! secondary engine, each bound to a distinct digest, and XORs the outputs
//! byte-for-byte. A compromised primitive in one engine cannot leak the
//! combined key while any other engine's output remains independent and
//! uniform.

use zeroize::{Zeroize, Zeroizing};

use crate::{
    digest::DigestAlgorithm,
    error::{Error, Result},
    kdf::{engine::KdfEngine, params::KdfParams},
};

/// One primary [`KdfEngine`] plus N >= 1 secondaries over distinct digests.
#[derive(Debug)]
pub struct MultiKdf {
    primary: KdfEngine,
    secondaries: Vec<KdfEngine>,
}

impl MultiKdf {
    /// Build a combiner from a primary digest and at least one secondary.
    ///
    /// Fails with [`Error::Configuration`] if no secondaries are supplied or
    /// if any digest appears more than once across the engines.
    pub fn new(primary: DigestAlgorithm, secondaries: &[DigestAlgorithm]) -> Result<Self> {
        if secondaries.is_empty() {
            return Err(Error::Configuration(
                "must be at least two engines".to_string(),
            ));
        }
        let mut seen = vec![primary];
        for &algorithm in secondaries {
            if seen.contains(&algorithm) {
                return Err(Error::Configuration(format!(
                    "digest {} is bound to more than one engine",
                    algorithm.name()
                )));
            }
            seen.push(algorithm);
        }
        Ok(Self {
            primary: KdfEngine::new(primary),
            secondaries: secondaries.iter().copied().map(KdfEngine::new).collect(),
        })
    }

    /// Total number of engines, primary included.
    pub fn engine_count(&self) -> usize {
        1 + self.secondaries.len()
    }

    /// Replicate one parameter set across every engine, primary first.
    ///
    /// All engines must derive from identical inputs; this is the explicit
    /// sharing step that guarantees it.
    pub fn share_params(&self, params: &KdfParams) -> Vec<KdfParams> {
        (0..self.engine_count()).map(|_| params.clone()).collect()
    }

    /// Derive the XOR combination of every engine's output.
    ///
    /// All engines receive identical parameters. Secondary outputs are zeroed
    /// after combining; on any failure the partially combined buffer is
    /// zeroed before the error propagates.
    pub fn derive_bytes(&self, params: KdfParams) -> Result<Vec<u8>> {
        let mut shared = self.share_params(&params);
        drop(params);

        let mut combined = self.primary.derive_bytes(shared.remove(0))?;
        for (engine, engine_params) in self.secondaries.iter().zip(shared) {
            let secondary = match engine.derive_bytes(engine_params) {
                Ok(bytes) => Zeroizing::new(bytes),
                Err(e) => {
                    combined.zeroize();
                    return Err(e);
                }
            };
            if secondary.len() != combined.len() {
                combined.zeroize();
                return Err(Error::InvalidParameters(
                    "engine outputs differ in length".to_string(),
                ));
            }
            for (out, byte) in combined.iter_mut().zip(secondary.iter()) {
                *out ^= byte;
            }
        }
        Ok(combined)
    }
}
