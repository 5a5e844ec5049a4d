//! Zero padding of complex buffers.

use crate::error::{Error, Result};
use crate::float::Float;
use crate::pow2::next_pow2;
use alloc::vec::Vec;
use num_complex::Complex;

/// Copies `input` into a new buffer of length `len`, filling the tail with zeros.
///
/// Fails if `len` is shorter than `input`; the input is never truncated.
pub fn zero_pad<T: Float>(input: &[Complex<T>], len: usize) -> Result<Vec<Complex<T>>> {
    if len < input.len() {
        return Err(Error::TargetTooShort {
            source_len: input.len(),
            target_len: len,
        });
    }
    Ok(padded(input.iter().copied(), len))
}

/// Copies `input` into a new buffer padded with zeros to the next power of two.
///
/// An empty input produces a single zero.
pub fn zero_pad_to_next_pow2<T: Float>(input: &[Complex<T>]) -> Vec<Complex<T>> {
    padded(input.iter().copied(), next_pow2(input.len()))
}

/// Collects `values` into a buffer of length `len`, zero-filling the tail.
pub(crate) fn padded<T, I>(values: I, len: usize) -> Vec<Complex<T>>
where
    T: Float,
    I: ExactSizeIterator<Item = Complex<T>>,
{
    debug_assert!(len >= values.len());
    tracing::trace!(source_len = values.len(), target_len = len, "zero padding");
    let mut output = Vec::with_capacity(len);
    output.extend(values);
    output.resize(len, Complex::default());
    output
}
