//! Payload codecs.
//! Hex helpers, uint256 decoding and storage slot derivation for state overrides.

pub mod constants;
mod error;
pub mod hexutil;
pub mod storage;
pub mod uint256;

pub use error::CodecError;
pub use hexutil::{Bytes, Quantity};
pub use storage::{balance_slot_key, build_state_diff, keccak256};
pub use uint256::{decode_uint256, decode_uint256_slice, Uint256, Uint256Slice};
