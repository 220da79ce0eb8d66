//! Codec constants.

/// Size in bytes of an EVM word.
pub const WORD_SIZE: usize = 32;

/// Size in bytes of an account address.
pub const ADDRESS_SIZE: usize = 20;

/// Prefix carried by every hex encoded payload.
pub const HEX_PREFIX: &str = "0x";
