//! This crate provides the preprocessing steps around a power-of-two fast Fourier transform.
//!
//! A transform that only accepts power-of-two sizes typically needs its input sized, padded and
//! lifted into the complex domain, and its output projected back to reals:
//!
//! ```
//! use fft_prep::{complex_to_real, is_pow2, next_pow2, real_to_complex, round_in_place, zero_pad};
//!
//! let signal = [1.0, 2.0, 3.0];
//! assert!(!is_pow2(signal.len()));
//! let padded = zero_pad(&real_to_complex(&signal), next_pow2(signal.len()))?;
//! assert_eq!(padded.len(), 4);
//!
//! // ... forward transform, processing, inverse transform ...
//!
//! let mut output = complex_to_real(&padded);
//! round_in_place(&mut output);
//! assert_eq!(output, [1.0, 2.0, 3.0, 0.0]);
//! # Ok::<(), fft_prep::Error>(())
//! ```
//!
//! All functions are generic over `f32` and `f64` and use [`num_complex::Complex`] for complex
//! values.
//!
//! # Logging
//! Size changes and lossy conversions are reported as `trace` level [`tracing`] events.  No
//! subscriber is installed by this crate.
//!
//! # Optional features
//! -  **`std`** *(enabled by default)* - Links the standard library.  If disabled, the crate is
//!    `#[no_std]`, allocates through the [`alloc`] crate and rounds through `libm`.
//!
//! [`alloc`]: https://doc.rust-lang.org/alloc/
#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

mod convert;
mod error;
mod float;
mod pad;
mod pow2;
mod round;

pub use convert::*;
pub use error::*;
pub use float::*;
pub use pad::*;
pub use pow2::*;
pub use round::*;

pub use num_complex::Complex;
