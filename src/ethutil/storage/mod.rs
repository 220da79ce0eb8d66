//! Storage slot derivation for balance overrides.
//!
//! A Solidity `mapping(address => uint256)` declared at slot `p` stores the
//! value for key `k` at `keccak256(pad32(k) ++ pad32(p))`. Writing a word to
//! that key through a call's state override simulates a token balance
//! without touching chain state.

mod tests;

use {
    super::{constants::WORD_SIZE, hexutil::encode_hex, CodecError},
    crate::ethjson::types::{StateOverride, StateOverrides},
    log::debug,
    primitive_types::{H160, H256, U256},
    sha3::{Digest, Keccak256},
    std::collections::BTreeMap,
};

/// Computes the Keccak-256 hash of `data`.
pub fn keccak256(data: &[u8]) -> H256 {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    H256::from_slice(&hasher.finalize())
}

/// Left pads a value into a 32 byte big endian word.
pub fn word_bytes(value: U256) -> [u8; WORD_SIZE] {
    let mut word = [0u8; WORD_SIZE];
    value.to_big_endian(&mut word);
    word
}

/// Storage key of `balances[holder]` for a mapping declared at `slot`.
pub fn balance_slot_key(holder: &H160, slot: U256) -> H256 {
    let mut encoded = [0u8; 2 * WORD_SIZE];

    encoded[WORD_SIZE - holder.as_bytes().len()..WORD_SIZE].copy_from_slice(holder.as_bytes());
    encoded[WORD_SIZE..].copy_from_slice(&word_bytes(slot));

    keccak256(&encoded)
}

/// Builds a state override setting `holder`'s balance on `token_contract`.
///
/// The result holds exactly one contract entry with one slot diff. A missing
/// balance is an error rather than a zero override. Mapping slots are
/// unsigned declaration indices.
pub fn build_state_diff(
    token_contract: H160,
    holder: H160,
    slot: u64,
    new_balance: Option<U256>,
) -> Result<StateOverrides, CodecError> {
    let new_balance = match new_balance {
        Some(balance) => balance,
        None => return Err(CodecError::MissingBalance),
    };

    let slot_key = balance_slot_key(&holder, U256::from(slot));

    debug!(
        "Overriding balance of {:?} on {:?} at storage key {:?}",
        holder, token_contract, slot_key
    );

    let mut state_diff = BTreeMap::new();
    state_diff.insert(
        encode_hex(slot_key.as_bytes()),
        encode_hex(&word_bytes(new_balance)),
    );

    let mut overrides = StateOverrides::new();
    overrides.insert(token_contract, StateOverride { state_diff });

    Ok(overrides)
}
