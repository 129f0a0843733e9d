//! # wideint
//!
//! Fixed-width 128-, 160-, 256- and 512-bit signed and unsigned integers
//! with two's-complement semantics, built from 32-bit limbs.
//!
//! ## Key Features
//! - One const-generic implementation ([`WideInt`]) covers every
//!   width/signedness combination
//! - Immutable value types; every operation returns a new value
//! - Addition, subtraction, negation, bitwise operators and cross-limb
//!   shifts, all wrapping modulo 2^W
//! - Arithmetic (sign-extending) right shift for signed types, logical for
//!   unsigned
//! - Total ordering via direct limb comparison
//! - Little-endian byte marshaling and decimal string parse/format through
//!   `num-bigint`
//! - Multiplication, division and modulo are a deliberate, explicit gap:
//!   they return [`WideIntError::Unimplemented`]

pub mod decimal;
pub mod error;
pub mod int;
pub mod limb;

pub use error::{ParseWideIntError, WideIntError};
pub use int::WideInt;
pub use limb::LIMB_BITS;

/// 128-bit signed integer (4 limbs).
pub type I128 = WideInt<4, true>;

/// 128-bit unsigned integer (4 limbs).
pub type U128 = WideInt<4, false>;

/// 160-bit signed integer (5 limbs).
pub type I160 = WideInt<5, true>;

/// 160-bit unsigned integer (5 limbs).
pub type U160 = WideInt<5, false>;

/// 256-bit signed integer (8 limbs).
pub type I256 = WideInt<8, true>;

/// 256-bit unsigned integer (8 limbs).
pub type U256 = WideInt<8, false>;

/// 512-bit signed integer (16 limbs).
pub type I512 = WideInt<16, true>;

/// 512-bit unsigned integer (16 limbs).
pub type U512 = WideInt<16, false>;
