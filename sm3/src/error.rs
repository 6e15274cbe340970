use thiserror::Error;

/// Errors reported by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Text input was not valid UTF-8.
    #[error("input must be UTF-8 text or a byte sequence")]
    InvalidInput,

    /// A hex string could not be decoded.
    #[error("invalid hex string: {0}")]
    InvalidFormat(hex::FromHexError),

    /// The derived key consisted only of zero bytes.
    #[error("kdf produced an all-zero key")]
    KdfExhausted,

    /// Requested KDF output needs more blocks than the 32-bit counter allows.
    #[error("kdf output of {requested} bytes exceeds the counter range")]
    KdfOutputTooLong { requested: usize },

    /// Padding left bytes in the pending buffer.
    #[error("internal invariant violated: {pending} bytes pending after padding")]
    InternalInvariantViolation { pending: usize },

    /// Message bit length does not fit the 64-bit length field.
    #[error("message too long: {bytes} bytes")]
    MessageTooLong { bytes: u64 },
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::InvalidFormat(err)
    }
}

pub type Result<T> = core::result::Result<T, Error>;
