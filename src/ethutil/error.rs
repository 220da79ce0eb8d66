//! Codec errors.
use {super::constants::WORD_SIZE, thiserror::Error};

/// Errors returned while decoding node payloads or building overrides.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    /// Hex payload is not `0x` prefixed.
    #[error("hex string without 0x prefix")]
    MissingPrefix,

    /// Hex payload contains invalid characters or has an odd length.
    #[error("invalid hex payload: {0}")]
    InvalidHex(hex::FromHexError),

    /// Decoded value has the wrong number of bytes.
    #[error("invalid length, expected {expected} bytes, found {found}")]
    InvalidLength { expected: usize, found: usize },

    /// Concatenated word payload is not a whole number of words.
    #[error("invalid concatenated payload len={0} (not multiple of {})", WORD_SIZE)]
    ConcatenatedLength(usize),

    /// An element of an array payload failed to decode.
    #[error("decode hex string at index {index}: {source}")]
    Element {
        index: usize,
        source: Box<CodecError>,
    },

    /// Payload is neither of the accepted JSON shapes.
    #[error("unexpected payload shape, expected {expected}, found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: String,
    },

    /// A balance override was requested without a balance.
    #[error("new balance is missing")]
    MissingBalance,
}
