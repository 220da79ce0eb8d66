//! uint256 payload decoding.
//!
//! Nodes return numeric results either as a single `0x` hex string or, for
//! calls returning several values, as one concatenated string of 32 byte
//! words or as an array of hex strings. Array payloads are tried in that
//! order: a bare string is always read as concatenated words.

mod tests;

use {
    super::{constants::WORD_SIZE, hexutil::decode_hex, CodecError},
    log::trace,
    primitive_types::U256,
    serde::{de, Deserialize, Deserializer},
    serde_json::Value,
};

/// Decodes a single `0x` hex string payload.
///
/// An empty payload is zero. Payloads of a word or more are read from their
/// last 32 bytes, shorter payloads from the whole string.
pub fn decode_uint256(payload: &Value) -> Result<U256, CodecError> {
    match payload {
        Value::String(s) => decode_uint256_hex(s),

        other => Err(CodecError::UnexpectedShape {
            expected: "hex string",
            found: json_kind(other),
        }),
    }
}

/// Decodes a single `0x` hex string.
pub fn decode_uint256_hex(value: &str) -> Result<U256, CodecError> {
    let raw = decode_hex(value)?;
    Ok(right_aligned_word(&raw))
}

/// Decodes a multi value payload, either concatenated words or an array of
/// hex strings.
pub fn decode_uint256_slice(payload: &Value) -> Result<Vec<U256>, CodecError> {
    match payload {
        Value::String(s) => decode_concatenated_words(s),

        Value::Array(elements) => {
            trace!("Decoding {} element uint256 array payload", elements.len());

            elements
                .iter()
                .enumerate()
                .map(|(index, element)| {
                    decode_uint256(element).map_err(|e| CodecError::Element {
                        index,
                        source: Box::new(e),
                    })
                })
                .collect()
        }

        other => Err(CodecError::UnexpectedShape {
            expected: "hex string or array of hex strings",
            found: json_kind(other),
        }),
    }
}

/// Splits a `0x` hex string into 32 byte big endian words.
pub fn decode_concatenated_words(value: &str) -> Result<Vec<U256>, CodecError> {
    let raw = decode_hex(value)?;

    if raw.len() % WORD_SIZE != 0 {
        return Err(CodecError::ConcatenatedLength(raw.len()));
    }

    Ok(raw.chunks(WORD_SIZE).map(U256::from_big_endian).collect())
}

fn right_aligned_word(raw: &[u8]) -> U256 {
    if raw.len() >= WORD_SIZE {
        U256::from_big_endian(&raw[raw.len() - WORD_SIZE..])
    } else {
        U256::from_big_endian(raw)
    }
}

fn json_kind(value: &Value) -> String {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
    .to_string()
}

/// A uint256 decoded from a single hex string payload. `null` decodes to zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Uint256(pub U256);

impl<'de> Deserialize<'de> for Uint256 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Uint256::default());
        }

        decode_uint256(&value).map(Uint256).map_err(de::Error::custom)
    }
}

/// A list of uint256 decoded from either multi value payload shape. `null`
/// decodes to an empty list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Uint256Slice(pub Vec<U256>);

impl<'de> Deserialize<'de> for Uint256Slice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Uint256Slice::default());
        }

        decode_uint256_slice(&value)
            .map(Uint256Slice)
            .map_err(de::Error::custom)
    }
}
