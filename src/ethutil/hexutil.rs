//! `0x` prefixed hex helpers.

use {
    super::{
        constants::{ADDRESS_SIZE, HEX_PREFIX, WORD_SIZE},
        storage::keccak256,
        CodecError,
    },
    primitive_types::{H160, H256},
    serde::{de, Deserialize, Deserializer, Serialize, Serializer},
    std::fmt,
};

/// Decodes a `0x` prefixed hex string. `"0x"` decodes to an empty vector.
pub fn decode_hex(value: &str) -> Result<Vec<u8>, CodecError> {
    let digits = match value
        .strip_prefix(HEX_PREFIX)
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(digits) => digits,
        None => return Err(CodecError::MissingPrefix),
    };

    hex::decode(digits).map_err(CodecError::InvalidHex)
}

/// Parses a `0x` prefixed 20 byte address.
pub fn parse_address(value: &str) -> Result<H160, CodecError> {
    let bytes = decode_hex(value)?;
    if bytes.len() != ADDRESS_SIZE {
        return Err(CodecError::InvalidLength {
            expected: ADDRESS_SIZE,
            found: bytes.len(),
        });
    }

    Ok(H160::from_slice(&bytes))
}

/// Parses a `0x` prefixed 32 byte hash.
pub fn parse_hash(value: &str) -> Result<H256, CodecError> {
    let bytes = decode_hex(value)?;
    if bytes.len() != WORD_SIZE {
        return Err(CodecError::InvalidLength {
            expected: WORD_SIZE,
            found: bytes.len(),
        });
    }

    Ok(H256::from_slice(&bytes))
}

/// Encodes bytes as a `0x` prefixed lower case hex string.
pub fn encode_hex(bytes: &[u8]) -> String {
    format!("{}{}", HEX_PREFIX, hex::encode(bytes))
}

/// Renders an address with the mixed case checksum of EIP-55.
pub fn to_checksum_address(address: &H160) -> String {
    let lower = hex::encode(address.as_bytes());
    let hash = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(HEX_PREFIX.len() + lower.len());
    out.push_str(HEX_PREFIX);

    for (i, c) in lower.chars().enumerate() {
        let byte = hash.as_bytes()[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };

        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// Opaque byte string carried on the wire as `0x` hex.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(bytes: Vec<u8>) -> Self {
        Bytes(bytes)
    }
}

impl From<&[u8]> for Bytes {
    fn from(bytes: &[u8]) -> Self {
        Bytes(bytes.to_vec())
    }
}

impl fmt::Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_hex(&self.0))
    }
}

impl fmt::Debug for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes({})", encode_hex(&self.0))
    }
}

impl Serialize for Bytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&encode_hex(&self.0))
    }
}

impl<'de> Deserialize<'de> for Bytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        decode_hex(&s).map(Bytes).map_err(de::Error::custom)
    }
}

/// A `u64` carried on the wire as a `0x` hex quantity without leading zeros.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(pub u64);

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Quantity(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:x}", HEX_PREFIX, self.0)
    }
}

impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_quantity(&s).map_err(de::Error::custom)
    }
}

/// Parses a `0x` hex quantity such as `"0x5208"`.
pub fn parse_quantity(value: &str) -> Result<Quantity, CodecError> {
    let digits = match value
        .strip_prefix(HEX_PREFIX)
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(digits) => digits,
        None => return Err(CodecError::MissingPrefix),
    };

    match u64::from_str_radix(digits, 16) {
        Ok(quantity) => Ok(Quantity(quantity)),

        Err(_) => Err(CodecError::UnexpectedShape {
            expected: "64 bit hex quantity",
            found: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod hexutil {
    use super::*;

    #[test]
    fn test_decode_hex() {
        struct Test {
            name: &'static str,
            input: &'static str,
            expected: Result<Vec<u8>, CodecError>,
        }

        let tests = vec![
            Test {
                name: "empty payload",
                input: "0x",
                expected: Ok(Vec::new()),
            },
            Test {
                name: "upper case prefix",
                input: "0X0aff",
                expected: Ok(vec![0x0a, 0xff]),
            },
            Test {
                name: "no prefix",
                input: "0aff",
                expected: Err(CodecError::MissingPrefix),
            },
            Test {
                name: "odd length",
                input: "0xabc",
                expected: Err(CodecError::InvalidHex(hex::FromHexError::OddLength)),
            },
            Test {
                name: "invalid character",
                input: "0xzz",
                expected: Err(CodecError::InvalidHex(
                    hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 },
                )),
            },
        ];

        for (i, test) in tests.iter().enumerate() {
            assert_eq!(
                decode_hex(test.input),
                test.expected,
                "test {} {} failed",
                i,
                test.name
            );
        }
    }

    #[test]
    fn test_checksum_address() {
        // Vectors from EIP-55.
        let vectors = [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ];

        for vector in vectors.iter() {
            let address = parse_address(vector).expect("valid address");
            assert_eq!(to_checksum_address(&address), *vector);
        }
    }

    #[test]
    fn test_parse_address_length() {
        assert_eq!(
            parse_address("0x0102"),
            Err(CodecError::InvalidLength {
                expected: ADDRESS_SIZE,
                found: 2
            })
        );
        assert_eq!(
            parse_hash(&format!("0x{}", "11".repeat(32))),
            Ok(H256::repeat_byte(0x11))
        );
    }

    #[test]
    fn test_bytes_serde() {
        let bytes = Bytes(vec![0xde, 0xad, 0xbe, 0xef]);
        let value = serde_json::to_value(&bytes).expect("serialize bytes");
        assert_eq!(value, serde_json::json!("0xdeadbeef"));

        let decoded: Bytes = serde_json::from_value(value).expect("deserialize bytes");
        assert_eq!(decoded, bytes);

        assert!(serde_json::from_value::<Bytes>(serde_json::json!("deadbeef")).is_err());
    }

    #[test]
    fn test_quantity_serde() {
        struct Test {
            name: &'static str,
            quantity: u64,
            wire: &'static str,
        }

        let tests = [
            Test {
                name: "zero",
                quantity: 0,
                wire: "0x0",
            },
            Test {
                name: "transfer gas",
                quantity: 21000,
                wire: "0x5208",
            },
            Test {
                name: "max",
                quantity: u64::MAX,
                wire: "0xffffffffffffffff",
            },
        ];

        for (i, test) in tests.iter().enumerate() {
            let value = serde_json::to_value(Quantity(test.quantity)).unwrap();
            assert_eq!(value, serde_json::json!(test.wire), "test {} {} failed", i, test.name);

            let decoded: Quantity = serde_json::from_value(value).unwrap();
            assert_eq!(decoded.0, test.quantity, "test {} {} failed", i, test.name);
        }

        assert_eq!(parse_quantity("5208"), Err(CodecError::MissingPrefix));
        assert!(parse_quantity("0x").is_err());
        assert!(parse_quantity("0x10000000000000000").is_err());
    }
}
