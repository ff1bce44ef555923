//! Key derivation
//!
//! HKDF-style extract/expand over a chosen digest, with a multi-engine XOR
//! combiner for defense in depth. Parameters are frozen through a fallible
//! builder and consumed by exactly one derivation call.

pub mod engine;
pub mod multi;
pub mod params;

pub use engine::KdfEngine;
pub use multi::MultiKdf;
pub use params::{KdfMode, KdfParams, KdfParamsBuilder};
