#[cfg(test)]
mod storage {
    use {
        crate::ethutil::{
            hexutil::{encode_hex, parse_address},
            storage::{balance_slot_key, build_state_diff, keccak256},
            CodecError,
        },
        primitive_types::{H160, U256},
    };

    fn token() -> H160 {
        H160::repeat_byte(0xaa)
    }

    fn holder() -> H160 {
        H160::repeat_byte(0xbb)
    }

    #[test]
    fn test_keccak256() {
        assert_eq!(
            encode_hex(keccak256(&[]).as_bytes()),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
        assert_eq!(
            encode_hex(keccak256(b"hello").as_bytes()),
            "0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
        );
    }

    #[test]
    fn test_balance_slot_key() {
        struct Test {
            name: &'static str,
            holder: H160,
            slot: u64,
            expected: &'static str,
        }

        let tests = vec![
            Test {
                name: "address one at slot zero",
                holder: parse_address("0x0000000000000000000000000000000000000001").unwrap(),
                slot: 0,
                expected: "0xada5013122d395ba3c54772283fb069b10426056ef8ca54750cb9bb552a59e7d",
            },
            Test {
                name: "0xbb.. holder at slot three",
                holder: holder(),
                slot: 3,
                expected: "0x8e700853404c38bba2a49a3fd5fc194ca07c6d109868673c3d8fcaa58a409779",
            },
            Test {
                name: "0xbb.. holder at slot zero",
                holder: holder(),
                slot: 0,
                expected: "0xaedf8090423f7c23f181308bda87a46b7a0caa99e0bf89e87bc6ce10666b4a03",
            },
        ];

        for (i, test) in tests.iter().enumerate() {
            let key = balance_slot_key(&test.holder, U256::from(test.slot));
            assert_eq!(
                encode_hex(key.as_bytes()),
                test.expected,
                "test {} {} failed",
                i,
                test.name
            );
        }
    }

    #[test]
    fn test_slot_key_is_deterministic() {
        let first = balance_slot_key(&holder(), U256::from(3));

        for _ in 0..5 {
            assert_eq!(balance_slot_key(&holder(), U256::from(3)), first);
        }

        assert_ne!(balance_slot_key(&holder(), U256::from(4)), first);
        assert_ne!(balance_slot_key(&H160::repeat_byte(0xbc), U256::from(3)), first);
    }

    #[test]
    fn test_build_state_diff() {
        let balance = U256::from_dec_str("1000000000000000000000").unwrap();

        let overrides = match build_state_diff(token(), holder(), 3u64, Some(balance)) {
            Ok(e) => e,

            Err(e) => panic!("build_state_diff: unexpected error: {}", e),
        };

        assert_eq!(overrides.len(), 1);

        let state_diff = &overrides[&token()].state_diff;
        assert_eq!(state_diff.len(), 1);

        let (slot, value) = state_diff.iter().next().unwrap();
        assert_eq!(
            slot,
            "0x8e700853404c38bba2a49a3fd5fc194ca07c6d109868673c3d8fcaa58a409779"
        );
        assert_eq!(
            value,
            "0x00000000000000000000000000000000000000000000003635c9adc5dea00000"
        );
    }

    #[test]
    fn test_build_state_diff_changes_with_inputs() {
        let balance = Some(U256::from(1));
        let base = build_state_diff(token(), holder(), 3u64, balance).unwrap();

        let other_contract = build_state_diff(H160::repeat_byte(0xcc), holder(), 3u64, balance).unwrap();
        assert_ne!(other_contract, base);
        assert_eq!(
            other_contract.values().next(),
            base.values().next(),
            "slot diff must not depend on the contract"
        );

        let other_holder = build_state_diff(token(), H160::repeat_byte(0x01), 3u64, balance).unwrap();
        assert_ne!(other_holder, base);

        let other_slot = build_state_diff(token(), holder(), 4u64, balance).unwrap();
        assert_ne!(other_slot, base);
    }

    #[test]
    fn test_build_state_diff_missing_balance() {
        assert_eq!(
            build_state_diff(token(), holder(), 3u64, None),
            Err(CodecError::MissingBalance)
        );
    }

    #[test]
    fn test_state_diff_wire_shape() {
        let overrides = build_state_diff(token(), holder(), 0u64, Some(U256::from(255))).unwrap();

        let expected = serde_json::json!({
            "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa": {
                "stateDiff": {
                    "0xaedf8090423f7c23f181308bda87a46b7a0caa99e0bf89e87bc6ce10666b4a03":
                        "0x00000000000000000000000000000000000000000000000000000000000000ff"
                }
            }
        });

        assert_eq!(serde_json::to_value(&overrides).unwrap(), expected);
    }

    #[test]
    fn test_build_state_diff_highest_slot() {
        let overrides = build_state_diff(token(), holder(), u64::MAX, Some(U256::one())).unwrap();

        let key = balance_slot_key(&holder(), U256::from(u64::MAX));
        let diff = &overrides[&token()].state_diff;

        assert_eq!(diff.len(), 1);
        assert!(diff.contains_key(&encode_hex(key.as_bytes())));
    }
}
