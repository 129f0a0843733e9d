//! Property-based tests for the algebraic laws of the fixed-width types,
//! with `num-bigint` as the reference oracle where one applies.

use num_bigint::BigInt;
use proptest::prelude::*;
use wideint::{I128, U128, U256};

fn arb_u128() -> impl Strategy<Value = U128> {
    proptest::array::uniform4(any::<u32>()).prop_map(U128::from_limbs)
}

fn arb_i128() -> impl Strategy<Value = I128> {
    proptest::array::uniform4(any::<u32>()).prop_map(I128::from_limbs)
}

fn arb_u256() -> impl Strategy<Value = U256> {
    proptest::array::uniform8(any::<u32>()).prop_map(U256::from_limbs)
}

/// 2^128 as a `BigInt`, for reducing oracle results to the represented width.
fn modulus() -> BigInt {
    BigInt::from(1) << 128u32
}

proptest! {
    #[test]
    fn test_byte_round_trip(v in arb_u256()) {
        prop_assert_eq!(U256::from_le_bytes(&v.to_le_bytes()), Ok(v));
    }

    #[test]
    fn test_double_negation(v in arb_i128()) {
        prop_assert_eq!(-(-v), v);
    }

    #[test]
    fn test_negate_is_not_plus_one(v in arb_i128()) {
        prop_assert_eq!(-v, !v + I128::ONE);
    }

    #[test]
    fn test_additive_identity_and_inverse(v in arb_i128()) {
        prop_assert_eq!(v + I128::ZERO, v);
        prop_assert_eq!(v + (-v), I128::ZERO);
    }

    #[test]
    fn test_add_commutes(a in arb_u128(), b in arb_u128()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn test_sub_inverts_add(a in arb_u128(), b in arb_u128()) {
        prop_assert_eq!((a + b) - b, a);
    }

    #[test]
    fn test_add_matches_oracle(a in arb_u128(), b in arb_u128()) {
        let expected = (a.to_bigint() + b.to_bigint()) % modulus();
        prop_assert_eq!((a + b).to_bigint(), expected);
    }

    #[test]
    fn test_shift_identity(v in arb_u256()) {
        prop_assert_eq!(v << 0, v);
        prop_assert_eq!(v >> 0, v);
    }

    #[test]
    fn test_shift_composition(v in arb_u128(), a in 0u32..=130, b in 0u32..=130) {
        // Truncating shifts compose unconditionally; amounts past the
        // width drop every bit on both sides.
        prop_assert_eq!((v << a) << b, v << (a + b));
        prop_assert_eq!((v >> a) >> b, v >> (a + b));
    }

    #[test]
    fn test_left_shift_matches_oracle(v in arb_u128(), s in 0u32..128) {
        let expected = (v.to_bigint() << s as usize) % modulus();
        prop_assert_eq!((v << s).to_bigint(), expected);
    }

    #[test]
    fn test_logical_right_shift_matches_oracle(v in arb_u128(), s in 0u32..128) {
        let expected = v.to_bigint() >> s as usize;
        prop_assert_eq!((v >> s).to_bigint(), expected);
    }

    #[test]
    fn test_arithmetic_right_shift_matches_oracle(v in arb_i128(), s in 0u32..128) {
        // BigInt's right shift is floor division, exactly the arithmetic
        // shift of the two's-complement value.
        let expected = v.to_bigint() >> s as usize;
        prop_assert_eq!((v >> s).to_bigint(), expected);
    }

    #[test]
    fn test_ordering_is_total(a in arb_i128(), b in arb_i128()) {
        let lt = a < b;
        let eq = a == b;
        let gt = a > b;
        prop_assert_eq!(u8::from(lt) + u8::from(eq) + u8::from(gt), 1);
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn test_signed_order_matches_oracle(a in arb_i128(), b in arb_i128()) {
        prop_assert_eq!(a.cmp(&b), a.to_bigint().cmp(&b.to_bigint()));
    }

    #[test]
    fn test_unsigned_order_matches_oracle(a in arb_u128(), b in arb_u128()) {
        prop_assert_eq!(a.cmp(&b), a.to_bigint().cmp(&b.to_bigint()));
    }

    #[test]
    fn test_parse_display_round_trip_signed(v in arb_i128()) {
        prop_assert_eq!(I128::try_parse(&v.to_string()), Some(v));
    }

    #[test]
    fn test_parse_display_round_trip_unsigned(v in arb_u128()) {
        prop_assert_eq!(U128::try_parse(&v.to_string()), Some(v));
    }

    #[test]
    fn test_reinterpretation_round_trip(v in arb_u128()) {
        prop_assert_eq!(v.as_signed().as_unsigned(), v);
    }
}
