//! # Decimal String Bridge
//!
//! Parsing and formatting of decimal text, delegated to `num-bigint`. The
//! exchange format in both directions is the little-endian two's-complement
//! byte sequence: `BigInt::to_signed_bytes_le` on the way in,
//! `BigInt::from_signed_bytes_le` on the way out. A magnitude whose top bit
//! is set would read as negative in that layout, so unsigned values carry
//! one disambiguating zero byte when needed.

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};

use crate::error::ParseWideIntError;
use crate::int::WideInt;

impl<const LIMBS: usize, const SIGNED: bool> WideInt<LIMBS, SIGNED> {
    /// Convert to an arbitrary-precision integer carrying this value's
    /// numeric meaning: two's complement for signed types, plain magnitude
    /// for unsigned types.
    pub fn to_bigint(&self) -> BigInt {
        let mut bytes = self.to_le_bytes();
        if !SIGNED && self.sign_bit() {
            // Keep the bridge from reading the magnitude as negative.
            bytes.push(0);
        }
        BigInt::from_signed_bytes_le(&bytes)
    }

    /// Construct from an arbitrary-precision integer, provided its
    /// two's-complement byte sequence fits this width. Unsigned types
    /// tolerate the one extra zero byte the bridge uses to mark a
    /// top-bit-set magnitude as non-negative. High limbs beyond the
    /// sequence are filled from the bridge's sign.
    pub fn from_bigint(value: &BigInt) -> Option<Self> {
        let bytes = value.to_signed_bytes_le();
        let limit = if SIGNED { Self::BYTES } else { Self::BYTES + 1 };
        if bytes.len() > limit {
            return None;
        }
        if bytes.len() == Self::BYTES + 1 && bytes[Self::BYTES] != 0 {
            return None;
        }
        let fill = if value.sign() == Sign::Minus { u32::MAX } else { 0 };
        let mut limbs = [fill; LIMBS];
        for (i, &byte) in bytes.iter().take(Self::BYTES).enumerate() {
            let shift = (i % 4) as u32 * 8;
            let limb = &mut limbs[i / 4];
            *limb = (*limb & !(0xFFu32 << shift)) | ((byte as u32) << shift);
        }
        Some(Self::from_limbs(limbs))
    }

    /// Parse a decimal string (optional ASCII sign, surrounding whitespace
    /// allowed). Returns `None` when the text is not a decimal integer or
    /// its value does not fit this width; never panics.
    pub fn try_parse(text: &str) -> Option<Self> {
        let value = BigInt::from_str(text.trim()).ok()?;
        Self::from_bigint(&value)
    }
}

impl<const LIMBS: usize, const SIGNED: bool> FromStr for WideInt<LIMBS, SIGNED> {
    type Err = ParseWideIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s).ok_or_else(|| ParseWideIntError {
            input: s.to_string(),
            bits: Self::BITS,
        })
    }
}

impl<const LIMBS: usize, const SIGNED: bool> fmt::Display for WideInt<LIMBS, SIGNED> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_bigint(), f)
    }
}

impl<const LIMBS: usize, const SIGNED: bool> fmt::LowerHex for WideInt<LIMBS, SIGNED> {
    /// Renders the raw 2^BITS-wide bit pattern, ignoring signedness.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = BigUint::from_bytes_le(&self.to_le_bytes());
        fmt::LowerHex::fmt(&magnitude, f)
    }
}

impl<const LIMBS: usize, const SIGNED: bool> fmt::UpperHex for WideInt<LIMBS, SIGNED> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = BigUint::from_bytes_le(&self.to_le_bytes());
        fmt::UpperHex::fmt(&magnitude, f)
    }
}
