#[cfg(test)]
mod uint256 {
    use {
        crate::ethutil::{
            uint256::{decode_uint256, decode_uint256_slice, Uint256, Uint256Slice},
            CodecError,
        },
        primitive_types::U256,
        serde_json::json,
    };

    #[test]
    fn test_decode_single_value() {
        struct Test {
            name: &'static str,
            payload: serde_json::Value,
            expected: U256,
        }

        let tests = vec![
            Test {
                name: "empty payload",
                payload: json!("0x"),
                expected: U256::zero(),
            },
            Test {
                name: "short payload",
                payload: json!("0x3635c9adc5dea00000"),
                expected: U256::from_dec_str("1000000000000000000000").unwrap(),
            },
            Test {
                name: "max word",
                payload: json!(format!("0x{}", "ff".repeat(32))),
                expected: U256::max_value(),
            },
            Test {
                // 8 leading bytes are dropped, only the last word counts.
                name: "forty byte payload",
                payload: json!(format!("0x{}{}{}", "ab".repeat(8), "00".repeat(31), "07")),
                expected: U256::from(7),
            },
        ];

        for (i, test) in tests.iter().enumerate() {
            let decoded = match decode_uint256(&test.payload) {
                Ok(e) => e,

                Err(e) => panic!("test {} {} failed: {}", i, test.name, e),
            };

            assert_eq!(decoded, test.expected, "test {} {} failed", i, test.name);
        }
    }

    #[test]
    fn test_decode_single_value_errors() {
        assert_eq!(
            decode_uint256(&json!("1234")),
            Err(CodecError::MissingPrefix)
        );

        assert_eq!(
            decode_uint256(&json!("0x123")),
            Err(CodecError::InvalidHex(hex::FromHexError::OddLength))
        );

        match decode_uint256(&json!(12)) {
            Err(CodecError::UnexpectedShape { found, .. }) => assert_eq!(found, "number"),
            other => panic!("expected shape error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_concatenated_words() {
        let payload = json!(format!(
            "0x{}{}{}",
            "00".repeat(31),
            "01",
            "ff".repeat(32)
        ));

        let decoded = decode_uint256_slice(&payload).expect("two words");
        assert_eq!(decoded, vec![U256::one(), U256::max_value()]);

        assert_eq!(decode_uint256_slice(&json!("0x")), Ok(Vec::new()));
    }

    #[test]
    fn test_decode_concatenated_length_error() {
        let payload = json!(format!("0x{}", "00".repeat(33)));

        assert_eq!(
            decode_uint256_slice(&payload),
            Err(CodecError::ConcatenatedLength(33))
        );
    }

    #[test]
    fn test_decode_array_of_strings() {
        // Elements are not forced to whole words.
        let payload = json!([
            "0x01",
            "0x",
            format!("0x{}{}", "ee".repeat(4), "00".repeat(31) + "02"),
        ]);

        let decoded = decode_uint256_slice(&payload).expect("array payload");
        assert_eq!(decoded, vec![U256::one(), U256::zero(), U256::from(2)]);
    }

    #[test]
    fn test_decode_array_element_error() {
        let payload = json!(["0x01", "0x02", "0xnothex"]);

        match decode_uint256_slice(&payload) {
            Err(CodecError::Element { index, source }) => {
                assert_eq!(index, 2);
                assert!(matches!(*source, CodecError::InvalidHex(_)));
            }

            other => panic!("expected element error, got {:?}", other),
        }

        match decode_uint256_slice(&json!(["0x01", 5])) {
            Err(CodecError::Element { index, source }) => {
                assert_eq!(index, 1);
                assert!(matches!(*source, CodecError::UnexpectedShape { .. }));
            }

            other => panic!("expected element error, got {:?}", other),
        }

        let e = decode_uint256_slice(&json!(["0xzz"])).unwrap_err();
        assert!(e.to_string().starts_with("decode hex string at index 0"));
    }

    #[test]
    fn test_decode_slice_rejects_other_shapes() {
        for payload in [json!(null), json!({"a": "0x01"}), json!(true)].iter() {
            assert!(matches!(
                decode_uint256_slice(payload),
                Err(CodecError::UnexpectedShape { .. })
            ));
        }
    }

    #[test]
    fn test_deserialize_newtypes() {
        let single: Uint256 = serde_json::from_str("\"0x0a\"").expect("uint256");
        assert_eq!(single, Uint256(U256::from(10)));

        let many: Uint256Slice = serde_json::from_str("[\"0x0a\",\"0x0b\"]").expect("uint256 slice");
        assert_eq!(many, Uint256Slice(vec![U256::from(10), U256::from(11)]));

        assert!(serde_json::from_str::<Uint256Slice>("\"0x0a\"").is_err());
    }
}
