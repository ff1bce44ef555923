use thiserror::Error;

/// Errors raised by the key-pair provider.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Getrandom error: {0}")]
    GetrandomError(String),

    #[error("PKCS8 error: {0}")]
    Pkcs8Error(#[from] pkcs8::Error),

    #[error("SPKI error: {0}")]
    SpkiError(#[from] pkcs8::spki::Error),

    #[error("DER error: {0}")]
    DerError(#[from] pkcs8::der::Error),

    #[error("Ed25519 error: {0}")]
    Ed25519Error(#[from] ed25519_dalek::ed25519::Error),

    #[error("Unsupported algorithm OID: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Key error: {0}")]
    KeyError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
