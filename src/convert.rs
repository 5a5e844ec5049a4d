//! Conversions between real and complex buffers.

use crate::float::Float;
use crate::pad::padded;
use crate::pow2::next_pow2;
use alloc::vec::Vec;
use num_complex::Complex;

/// Lifts a real buffer into the complex domain with zero imaginary parts.
pub fn real_to_complex<T: Float>(input: &[T]) -> Vec<Complex<T>> {
    input.iter().map(|&x| Complex::new(x, T::zero())).collect()
}

/// Lifts a real buffer into the complex domain, padded with zeros to the next power of two.
///
/// Equivalent to `zero_pad_to_next_pow2(&real_to_complex(input))` with a single allocation.
pub fn real_to_complex_padded<T: Float>(input: &[T]) -> Vec<Complex<T>> {
    padded(
        input.iter().map(|&x| Complex::new(x, T::zero())),
        next_pow2(input.len()),
    )
}

/// Projects a complex buffer onto its real parts.
///
/// The imaginary parts are discarded without checking that they are negligible.  Only use this
/// when the values are known to be real, such as the inverse transform of a Hermitian spectrum.
pub fn complex_to_real<T: Float>(input: &[Complex<T>]) -> Vec<T> {
    if tracing::enabled!(tracing::Level::TRACE) {
        let discarded = input
            .iter()
            .fold(T::zero(), |max, x| max.max(x.im.abs()));
        tracing::trace!(len = input.len(), max_imaginary = ?discarded, "discarding imaginary parts");
    }
    input.iter().map(|x| x.re).collect()
}
