//! Keyloom Certificate Library
//!
//! Lightweight certificate trust metadata for the keyloom project: CA and
//! path-length tracking, key-usage resolution against certificate
//! extensions, and a compact mini-certificate binding a subject name, public
//! key and usage flags without a full X.509 stack.
//!
//! Two deliberate behaviors are preserved from the trust model this layer
//! implements and must not be "fixed" here:
//!
//! - mini-certificate validation is structural only; no signature is ever
//!   checked ([`MiniCertificate::validate_certificate`]);
//! - an entirely absent keyUsage extension grants every usage except
//!   Certificate ([`usage::decode_key_usage`]).

pub mod ca;
pub mod error;
pub mod extensions;
pub mod mini;
pub mod serial;
pub mod usage;

// Re-export commonly used types for convenience
pub use ca::CaStatus;
pub use error::{Error, Result};
pub use extensions::{Extension, ExtensionEntry, ExtensionSet};
pub use mini::{MiniCertificate, SubjectId};
pub use serial::{ClockSerialSource, FixedSerialSource, SerialSource};
pub use usage::{decode_key_usage, encode_key_usage, KeyUsageKind, KeyUsageSet};
