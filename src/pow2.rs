//! Power-of-two sizes.

use crate::error::{Error, Result};

const USIZE_BITS: u32 = (core::mem::size_of::<usize>() * 8) as u32;

/// Returns `true` if `x` is a power of two.
///
/// Zero is not a power of two, one is (2^0).
#[inline]
pub const fn is_pow2(x: usize) -> bool {
    x > 0 && (x & (x - 1)) == 0
}

/// Returns the smallest power of two greater than or equal to `x`, or `None` if it does not fit
/// in a `usize`.
pub fn checked_next_pow2(x: usize) -> Option<usize> {
    if x <= 1 {
        return Some(1);
    }
    if is_pow2(x) {
        return Some(x);
    }
    let highest_bit = USIZE_BITS - 1 - x.leading_zeros();
    let size = 1usize.checked_shl(highest_bit + 1)?;
    tracing::trace!(from = x, to = size, "rounded size up to power of two");
    Some(size)
}

/// Returns the smallest power of two greater than or equal to `x`.
///
/// `0` and `1` both map to `1`, and powers of two map to themselves.
///
/// # Panics
/// Panics if the result overflows a `usize`.
pub fn next_pow2(x: usize) -> usize {
    match checked_next_pow2(x) {
        Some(size) => size,
        None => panic!("next power of two of {} overflows usize", x),
    }
}

/// Checks that `len` is usable as a power-of-two transform size.
pub fn ensure_pow2(len: usize) -> Result<usize> {
    if is_pow2(len) {
        Ok(len)
    } else {
        Err(Error::NotPowerOfTwo { len })
    }
}
