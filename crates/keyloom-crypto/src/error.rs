use thiserror::Error;

/// Errors raised by the key-derivation engines.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid construction, detected at configuration time and never
    /// deferred to derivation time
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid parameters reaching a derivation call
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
