//! SPKI (Subject Public Key Info) parsing utilities
//!
//! Infers the key algorithm purely from an encoded public key's DER bytes by
//! matching the SPKI algorithm identifier OID.

use pkcs8::{der::Decode, spki::SubjectPublicKeyInfoRef};

use crate::{
    error::{Error, Result},
    types::KeyAlgorithm,
};

/// Parse the key algorithm out of SPKI DER bytes
pub fn algorithm_from_spki(der: &[u8]) -> Result<KeyAlgorithm> {
    let spki = SubjectPublicKeyInfoRef::from_der(der)?;
    match spki.algorithm.oid {
        const_oid::db::rfc8410::ID_ED_25519 => Ok(KeyAlgorithm::Ed25519),
        const_oid::db::rfc5912::ID_EC_PUBLIC_KEY => {
            // P-256 is the only supported curve; the decode step rejects
            // other curve parameters.
            Ok(KeyAlgorithm::P256)
        }
        oid => Err(Error::UnsupportedAlgorithm(oid.to_string())),
    }
}
