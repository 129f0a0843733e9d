//! Integration tests for the decimal string bridge and serde support.

use wideint::{I128, I256, U128, U256, U512};

#[test]
fn test_parse_format_across_widths() {
    let cases: &[(&str, &str)] = &[
        ("0", "0"),
        ("000123", "123"),
        ("-0", "0"),
        (
            "115792089237316195423570985008687907853269984665640564039457584007913129639935",
            "115792089237316195423570985008687907853269984665640564039457584007913129639935",
        ),
    ];
    for &(input, canonical) in cases {
        let v: U256 = input.parse().unwrap();
        assert_eq!(v.to_string(), canonical);
    }
}

#[test]
fn test_parse_failure_yields_error_not_panic() {
    assert!("".parse::<U128>().is_err());
    assert!("ten".parse::<U128>().is_err());
    assert!("0x10".parse::<U128>().is_err());
    // One past U256::MAX.
    assert!(
        "115792089237316195423570985008687907853269984665640564039457584007913129639936"
            .parse::<U256>()
            .is_err()
    );
}

#[test]
fn test_try_parse_returns_none_on_failure() {
    assert_eq!(U128::try_parse("not a number"), None);
    assert_eq!(I128::try_parse("999999999999999999999999999999999999999999"), None);
}

#[test]
fn test_signed_range_is_asymmetric() {
    // |MIN| == MAX + 1.
    let min: I256 =
        "-57896044618658097711785492504343953926634992332820282019728792003956564819968"
            .parse()
            .unwrap();
    assert_eq!(min, I256::MIN);
    assert!(I256::try_parse(
        "-57896044618658097711785492504343953926634992332820282019728792003956564819969"
    )
    .is_none());
    assert!(I256::try_parse(
        "57896044618658097711785492504343953926634992332820282019728792003956564819968"
    )
    .is_none());
    assert_eq!(
        I256::try_parse(
            "57896044618658097711785492504343953926634992332820282019728792003956564819967"
        ),
        Some(I256::MAX)
    );
}

#[test]
fn test_unsigned_top_bit_does_not_read_negative() {
    // Values at and above 2^(W-1) still format as positive decimals.
    let v = U128::MIN - U128::ONE; // wraps to all ones
    assert_eq!(v.to_string(), "340282366920938463463374607431768211455");
    let half: U128 = "170141183460469231731687303715884105728".parse().unwrap();
    assert_eq!(half.limbs(), &[0, 0, 0, 0x8000_0000]);
    assert_eq!(half.to_string(), "170141183460469231731687303715884105728");
}

#[test]
fn test_display_uses_standard_formatting_machinery() {
    let v = U128::from_u32(42);
    assert_eq!(format!("{:>6}", v), "    42");
    assert_eq!(format!("{:06}", v), "000042");
    let neg = I128::from_i32(-42);
    assert_eq!(format!("{}", neg), "-42");
}

#[test]
fn test_bincode_round_trip_matches_byte_layout() {
    let v = U256::from_limbs([1, 2, 3, 4, 5, 6, 7, 0xFFFF_FFFF]);
    let encoded = bincode::serialize(&v).unwrap();
    // Fixed-width tuple of limbs: no length prefix, same bytes as the wire
    // format.
    assert_eq!(encoded, v.to_le_bytes());
    let decoded: U256 = bincode::deserialize(&encoded).unwrap();
    assert_eq!(decoded, v);
}

#[test]
fn test_bincode_rejects_truncated_input() {
    let v = U512::from_u64(7);
    let mut encoded = bincode::serialize(&v).unwrap();
    encoded.truncate(60);
    assert!(bincode::deserialize::<U512>(&encoded).is_err());
}

#[test]
fn test_bigint_bridge_round_trip() {
    for v in [I128::MIN, I128::from_i64(-40), I128::ZERO, I128::MAX] {
        assert_eq!(I128::from_bigint(&v.to_bigint()), Some(v));
    }
    for v in [U128::ZERO, U128::from_u64(u64::MAX), U128::MAX] {
        assert_eq!(U128::from_bigint(&v.to_bigint()), Some(v));
    }
}
