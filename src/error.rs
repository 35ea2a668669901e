use thiserror::Error;

/// Errors produced while forging or validating MD5 digests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The digest text is not exactly 32 hexadecimal characters.
    #[error("invalid digest format: {0}")]
    InvalidDigestFormat(String),

    /// A structurally invalid parameter, such as a rotation amount above 31
    /// or a length that no longer fits MD5's 64-bit length field.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No secret length in the searched range produced a forgery the oracle accepted.
    #[error("no secret length in {min}..={max} produced a valid forgery")]
    SecretLengthNotFound { min: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
