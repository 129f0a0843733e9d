//! # Fixed-Width Integer Values
//!
//! This module provides the abstraction for fixed-width two's-complement
//! integers built from 32-bit limbs.
//!
//! ## Generic Integer Type
//!
//! The `WideInt<const LIMBS: usize, const SIGNED: bool>` type covers every
//! width/signedness combination with one implementation:
//!
//! ```ignore
//! // 128-bit signed value with 4 × 32-bit limbs
//! type I128 = WideInt<4, true>;
//!
//! // 256-bit unsigned value with 8 × 32-bit limbs
//! type U256 = WideInt<8, false>;
//! ```
//!
//! Values are immutable: every operation reads its operands and returns a
//! fresh value. Addition, subtraction, negation, bitwise operations and
//! shifts are total and wrap modulo 2^(32·LIMBS); they never signal
//! overflow. Multiplication, division and modulo deliberately have no
//! semantics and report [`WideIntError::Unimplemented`].

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, BitAnd, BitOr, BitXor, Neg, Not, Shl, Shr, Sub};

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::WideIntError;
use crate::limb::{self, LIMB_BITS};

/// Sign bit mask for the most significant limb.
const SIGN_BIT: u32 = 1 << 31;

/// Fixed-width two's-complement integer with `LIMBS` × 32 bits.
///
/// # Type Parameters
/// - `LIMBS`: number of 32-bit limbs (4 for 128-bit up to 16 for 512-bit)
/// - `SIGNED`: whether the highest bit of the top limb is a sign bit
///
/// The signed and unsigned types of equal width are bit-identical
/// reinterpretations of each other; [`WideInt::as_signed`] and
/// [`WideInt::as_unsigned`] convert between them without changing any bit.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct WideInt<const LIMBS: usize, const SIGNED: bool> {
    /// Limbs in little-endian order: index 0 is least significant.
    pub(crate) limbs: [u32; LIMBS],
}

impl<const LIMBS: usize, const SIGNED: bool> WideInt<LIMBS, SIGNED> {
    /// Total bits in this integer type.
    pub const BITS: u32 = LIMB_BITS * LIMBS as u32;

    /// Width of the byte representation.
    pub const BYTES: usize = LIMBS * 4;

    /// The additive identity.
    pub const ZERO: Self = Self { limbs: [0; LIMBS] };

    /// The multiplicative unit (used here as the two's-complement increment).
    pub const ONE: Self = {
        let mut limbs = [0u32; LIMBS];
        limbs[0] = 1;
        Self { limbs }
    };

    /// Largest representable value: all bits set for unsigned types,
    /// 0x7FFFFFFF followed by all-ones limbs for signed types.
    pub const MAX: Self = {
        let mut limbs = [u32::MAX; LIMBS];
        if SIGNED {
            limbs[LIMBS - 1] = SIGN_BIT - 1;
        }
        Self { limbs }
    };

    /// Smallest representable value: zero for unsigned types, sign bit
    /// alone for signed types.
    pub const MIN: Self = {
        let mut limbs = [0u32; LIMBS];
        if SIGNED {
            limbs[LIMBS - 1] = SIGN_BIT;
        }
        Self { limbs }
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a value directly from its limbs, least significant first.
    /// Every limb combination is valid.
    #[inline]
    pub const fn from_limbs(limbs: [u32; LIMBS]) -> Self {
        Self { limbs }
    }

    /// Borrow the limbs, least significant first.
    #[inline]
    pub const fn limbs(&self) -> &[u32; LIMBS] {
        &self.limbs
    }

    /// Create a value from its little-endian byte representation: each
    /// consecutive 4-byte group becomes one limb, least significant group
    /// first. The slice length must be exactly [`Self::BYTES`].
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, WideIntError> {
        if bytes.len() != Self::BYTES {
            return Err(WideIntError::InvalidLength {
                expected: Self::BYTES,
                found: bytes.len(),
            });
        }
        let mut limbs = [0u32; LIMBS];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(4)) {
            *limb = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Ok(Self { limbs })
    }

    /// The little-endian byte representation: [`Self::BYTES`] bytes, limb 0
    /// first, little-endian within each limb. This is the type's sole wire
    /// format; [`Self::from_le_bytes`] inverts it exactly.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::BYTES);
        for limb in &self.limbs {
            out.extend_from_slice(&limb.to_le_bytes());
        }
        out
    }

    /// Create from a u32; high limbs are zero.
    #[inline]
    pub fn from_u32(value: u32) -> Self {
        let mut limbs = [0u32; LIMBS];
        limbs[0] = value;
        Self { limbs }
    }

    /// Create from an i32, sign-extending into the high limbs.
    #[inline]
    pub fn from_i32(value: i32) -> Self {
        let fill = if value < 0 { u32::MAX } else { 0 };
        let mut limbs = [fill; LIMBS];
        limbs[0] = value as u32;
        Self { limbs }
    }

    /// Create from a u64; limbs 0 and 1 take the low and high halves, the
    /// rest are zero.
    #[inline]
    pub fn from_u64(value: u64) -> Self {
        let mut limbs = [0u32; LIMBS];
        let mut rest = value;
        for limb in limbs.iter_mut().take(2) {
            *limb = rest as u32;
            rest >>= LIMB_BITS;
        }
        Self { limbs }
    }

    /// Create from an i64, sign-extending into the high limbs.
    #[inline]
    pub fn from_i64(value: i64) -> Self {
        let fill = if value < 0 { u32::MAX } else { 0 };
        let mut limbs = [fill; LIMBS];
        let mut rest = value as u64;
        for limb in limbs.iter_mut().take(2) {
            *limb = rest as u32;
            rest >>= LIMB_BITS;
        }
        Self { limbs }
    }

    // ========================================================================
    // Reinterpretation
    // ========================================================================

    /// Reinterpret as the signed type of the same width. Pure bitwise copy.
    #[inline]
    pub const fn as_signed(self) -> WideInt<LIMBS, true> {
        WideInt { limbs: self.limbs }
    }

    /// Reinterpret as the unsigned type of the same width. Pure bitwise copy.
    #[inline]
    pub const fn as_unsigned(self) -> WideInt<LIMBS, false> {
        WideInt { limbs: self.limbs }
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    /// True when every limb is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        limb::is_zero(&self.limbs)
    }

    /// The highest bit of the most significant limb.
    #[inline]
    pub const fn sign_bit(&self) -> bool {
        self.limbs[LIMBS - 1] & SIGN_BIT != 0
    }

    /// True for signed values below zero. Always false for unsigned types.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        SIGNED && self.sign_bit()
    }

    // ========================================================================
    // Unimplemented operations
    // ========================================================================

    /// Multiplication has no defined semantics for these types; always
    /// reports [`WideIntError::Unimplemented`].
    pub fn mul(self, _rhs: Self) -> Result<Self, WideIntError> {
        Err(WideIntError::Unimplemented {
            operation: "multiplication",
        })
    }

    /// Division has no defined semantics for these types; always reports
    /// [`WideIntError::Unimplemented`].
    pub fn div(self, _rhs: Self) -> Result<Self, WideIntError> {
        Err(WideIntError::Unimplemented {
            operation: "division",
        })
    }

    /// Modulo has no defined semantics for these types; always reports
    /// [`WideIntError::Unimplemented`].
    pub fn rem(self, _rhs: Self) -> Result<Self, WideIntError> {
        Err(WideIntError::Unimplemented { operation: "modulo" })
    }
}

// ============================================================================
// Arithmetic Operators
// ============================================================================

impl<const LIMBS: usize, const SIGNED: bool> Add for WideInt<LIMBS, SIGNED> {
    type Output = Self;

    /// Ripple-carry addition, wrapping modulo 2^BITS.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            limbs: limb::add(&self.limbs, &rhs.limbs),
        }
    }
}

impl<const LIMBS: usize, const SIGNED: bool> Sub for WideInt<LIMBS, SIGNED> {
    type Output = Self;

    /// Subtraction as addition of the two's complement.
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            limbs: limb::add(&self.limbs, &limb::negate(&rhs.limbs)),
        }
    }
}

impl<const LIMBS: usize, const SIGNED: bool> Neg for WideInt<LIMBS, SIGNED> {
    type Output = Self;

    /// Two's-complement negation (NOT + 1), wrapping. Negating `MIN` of a
    /// signed type yields `MIN` again, as two's complement requires.
    #[inline]
    fn neg(self) -> Self {
        Self {
            limbs: limb::negate(&self.limbs),
        }
    }
}

// ============================================================================
// Bitwise Operators
// ============================================================================

impl<const LIMBS: usize, const SIGNED: bool> Not for WideInt<LIMBS, SIGNED> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self {
            limbs: limb::not(&self.limbs),
        }
    }
}

impl<const LIMBS: usize, const SIGNED: bool> BitAnd for WideInt<LIMBS, SIGNED> {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self {
            limbs: limb::and(&self.limbs, &rhs.limbs),
        }
    }
}

impl<const LIMBS: usize, const SIGNED: bool> BitOr for WideInt<LIMBS, SIGNED> {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self {
            limbs: limb::or(&self.limbs, &rhs.limbs),
        }
    }
}

impl<const LIMBS: usize, const SIGNED: bool> BitXor for WideInt<LIMBS, SIGNED> {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self {
            limbs: limb::xor(&self.limbs, &rhs.limbs),
        }
    }
}

// ============================================================================
// Shift Operators
// ============================================================================

impl<const LIMBS: usize, const SIGNED: bool> Shl<u32> for WideInt<LIMBS, SIGNED> {
    type Output = Self;

    /// Left shift by any bit distance; bits moved past the top are dropped.
    /// Amounts at or beyond the full width yield zero.
    #[inline]
    fn shl(self, amount: u32) -> Self {
        Self {
            limbs: limb::shl(&self.limbs, amount),
        }
    }
}

impl<const LIMBS: usize, const SIGNED: bool> Shr<u32> for WideInt<LIMBS, SIGNED> {
    type Output = Self;

    /// Right shift by any bit distance. Unsigned types shift logically
    /// (zero fill); signed types shift arithmetically, replicating the sign
    /// bit into every vacated position. An arithmetic shift of a negative
    /// value by the full width or more yields all ones.
    #[inline]
    fn shr(self, amount: u32) -> Self {
        let mut limbs = limb::shr(&self.limbs, amount);
        if SIGNED && self.sign_bit() {
            limb::fill_high_bits(&mut limbs, amount);
        }
        Self { limbs }
    }
}

// ============================================================================
// Ordering
// ============================================================================

impl<const LIMBS: usize, const SIGNED: bool> Ord for WideInt<LIMBS, SIGNED> {
    /// Direct most-significant-limb-first comparison. For signed types the
    /// sign bit of both top limbs is flipped, which maps the signed range
    /// onto the unsigned order; no wrapping subtraction is performed, so
    /// operands straddling the representable extremes compare correctly.
    fn cmp(&self, other: &Self) -> Ordering {
        let flip = if SIGNED { SIGN_BIT } else { 0 };
        let mut a = self.limbs;
        let mut b = other.limbs;
        a[LIMBS - 1] ^= flip;
        b[LIMBS - 1] ^= flip;
        limb::cmp(&a, &b)
    }
}

impl<const LIMBS: usize, const SIGNED: bool> PartialOrd for WideInt<LIMBS, SIGNED> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// Conversions and Defaults
// ============================================================================

impl<const LIMBS: usize, const SIGNED: bool> Default for WideInt<LIMBS, SIGNED> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const LIMBS: usize, const SIGNED: bool> From<u32> for WideInt<LIMBS, SIGNED> {
    #[inline]
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl<const LIMBS: usize, const SIGNED: bool> From<i32> for WideInt<LIMBS, SIGNED> {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl<const LIMBS: usize, const SIGNED: bool> From<u64> for WideInt<LIMBS, SIGNED> {
    #[inline]
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl<const LIMBS: usize, const SIGNED: bool> From<i64> for WideInt<LIMBS, SIGNED> {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<const LIMBS: usize, const SIGNED: bool> fmt::Debug for WideInt<LIMBS, SIGNED> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if SIGNED { "i" } else { "u" };
        write!(f, "WideInt<{}{}>(", sign, Self::BITS)?;
        for (i, limb) in self.limbs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:#010x}", limb)?;
        }
        write!(f, ")")
    }
}

// ============================================================================
// Serde
// ============================================================================

impl<const LIMBS: usize, const SIGNED: bool> Serialize for WideInt<LIMBS, SIGNED> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeTuple;
        let mut tuple = serializer.serialize_tuple(LIMBS)?;
        for limb in &self.limbs {
            tuple.serialize_element(limb)?;
        }
        tuple.end()
    }
}

impl<'de, const LIMBS: usize, const SIGNED: bool> Deserialize<'de> for WideInt<LIMBS, SIGNED> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LimbVisitor<const LIMBS: usize, const SIGNED: bool>;

        impl<'de, const LIMBS: usize, const SIGNED: bool> Visitor<'de> for LimbVisitor<LIMBS, SIGNED> {
            type Value = WideInt<LIMBS, SIGNED>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a sequence of {} limbs", LIMBS)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut limbs = [0u32; LIMBS];
                for (i, slot) in limbs.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                Ok(WideInt { limbs })
            }
        }

        deserializer.deserialize_tuple(LIMBS, LimbVisitor::<LIMBS, SIGNED>)
    }
}
