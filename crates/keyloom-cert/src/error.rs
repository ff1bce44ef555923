use thiserror::Error;

/// Errors raised by the certificate trust layer.
#[derive(Error, Debug)]
pub enum Error {
    /// Extension or payload codec failure, with the underlying cause
    #[error("Encoding error: {0}")]
    EncodingError(#[from] serde_json::Error),

    /// Key-provider failure surfaced while encoding or parsing
    #[error("Key error: {0}")]
    KeyError(#[from] keyloom_key::Error),

    /// An extension kind appearing more than once in one set
    #[error("Duplicate extension: {0}")]
    DuplicateExtension(&'static str),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
