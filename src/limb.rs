//! # Limb-Level Arithmetic
//!
//! Core algorithms over little-endian limb sequences. A value is an
//! `[u32; N]` with index 0 least significant; every function here is a pure
//! function from input limbs to a fresh stack-allocated result, wrapping
//! modulo 2^(32·N).
//!
//! The signed/unsigned distinction does not exist at this level. Callers
//! that need arithmetic (sign-extending) right shift perform the logical
//! shift with [`shr`] and then apply [`fill_high_bits`].

use std::cmp::Ordering;

/// Bits per limb.
pub const LIMB_BITS: u32 = 32;

// ============================================================================
// Addition and Negation
// ============================================================================

/// Ripple-carry addition. The carry out of the top limb is discarded, which
/// is what makes the result wrap modulo 2^(32·N).
#[inline]
pub fn add<const N: usize>(a: &[u32; N], b: &[u32; N]) -> [u32; N] {
    let mut out = [0u32; N];
    let mut carry = 0u64;
    for i in 0..N {
        let sum = carry + a[i] as u64 + b[i] as u64;
        out[i] = sum as u32;
        carry = sum >> LIMB_BITS;
    }
    out
}

/// Two's-complement negation: bitwise NOT plus one.
#[inline]
pub fn negate<const N: usize>(v: &[u32; N]) -> [u32; N] {
    let mut one = [0u32; N];
    one[0] = 1;
    add(&not(v), &one)
}

// ============================================================================
// Bitwise Operations
// ============================================================================

/// Elementwise bitwise NOT.
#[inline]
pub fn not<const N: usize>(v: &[u32; N]) -> [u32; N] {
    let mut out = *v;
    for limb in out.iter_mut() {
        *limb = !*limb;
    }
    out
}

/// Elementwise bitwise AND.
#[inline]
pub fn and<const N: usize>(a: &[u32; N], b: &[u32; N]) -> [u32; N] {
    let mut out = *a;
    for (x, y) in out.iter_mut().zip(b.iter()) {
        *x &= *y;
    }
    out
}

/// Elementwise bitwise OR.
#[inline]
pub fn or<const N: usize>(a: &[u32; N], b: &[u32; N]) -> [u32; N] {
    let mut out = *a;
    for (x, y) in out.iter_mut().zip(b.iter()) {
        *x |= *y;
    }
    out
}

/// Elementwise bitwise XOR.
#[inline]
pub fn xor<const N: usize>(a: &[u32; N], b: &[u32; N]) -> [u32; N] {
    let mut out = *a;
    for (x, y) in out.iter_mut().zip(b.iter()) {
        *x ^= *y;
    }
    out
}

// ============================================================================
// Shifts
// ============================================================================

/// Left shift by an arbitrary bit distance. The amount splits into a limb
/// offset `k = amount / 32` and an intra-limb shift `s = amount % 32`; each
/// source limb contributes its shifted low part to destination `i + k` and,
/// when `s > 0`, its spilled high part to destination `i + k + 1`. Bits
/// shifted past the top limb are dropped.
///
/// `s == 0` takes only the direct offset path, so no 32-bit word is ever
/// shifted by exactly 32 bit positions.
#[inline]
pub fn shl<const N: usize>(v: &[u32; N], amount: u32) -> [u32; N] {
    let mut out = [0u32; N];
    let k = (amount / LIMB_BITS) as usize;
    let s = amount % LIMB_BITS;
    for i in 0..N {
        let dst = i + k;
        if dst < N {
            out[dst] |= v[i] << s;
        }
        if s > 0 && dst + 1 < N {
            out[dst + 1] |= v[i] >> (LIMB_BITS - s);
        }
    }
    out
}

/// Logical right shift by an arbitrary bit distance; the mirror of [`shl`].
/// Source limb `i` contributes its shifted high part to destination `i - k`
/// and, when `s > 0`, its spilled low part to destination `i - k - 1`.
/// Vacated high positions are zero.
#[inline]
pub fn shr<const N: usize>(v: &[u32; N], amount: u32) -> [u32; N] {
    let mut out = [0u32; N];
    let k = (amount / LIMB_BITS) as usize;
    let s = amount % LIMB_BITS;
    for i in k..N {
        let dst = i - k;
        out[dst] |= v[i] >> s;
        if s > 0 && dst > 0 {
            out[dst - 1] |= v[i] << (LIMB_BITS - s);
        }
    }
    out
}

/// Set the top `amount` bit positions of `v` to one. Applied after [`shr`]
/// on a negative value, this turns the logical shift into an arithmetic
/// shift: the sign bit is replicated into every vacated position, including
/// the partial top limb. Amounts past the full width saturate to all ones.
#[inline]
pub fn fill_high_bits<const N: usize>(v: &mut [u32; N], amount: u32) {
    let width = N as u32 * LIMB_BITS;
    let amount = amount.min(width);
    if amount == 0 {
        return;
    }
    let start = width - amount;
    for (i, limb) in v.iter_mut().enumerate() {
        let lo = i as u32 * LIMB_BITS;
        if lo + LIMB_BITS <= start {
            continue;
        }
        if lo >= start {
            *limb = u32::MAX;
        } else {
            *limb |= u32::MAX << (start - lo);
        }
    }
}

// ============================================================================
// Predicates and Comparison
// ============================================================================

/// True when every limb is zero.
#[inline]
pub fn is_zero<const N: usize>(v: &[u32; N]) -> bool {
    v.iter().all(|&limb| limb == 0)
}

/// Unsigned lexicographic comparison, most significant limb first. Signed
/// comparison is layered on top by the caller flipping the top limb's sign
/// bit on both sides; no wrapping subtraction is involved either way.
#[inline]
pub fn cmp<const N: usize>(a: &[u32; N], b: &[u32; N]) -> Ordering {
    for i in (0..N).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    Ordering::Equal
}
