//! Error types for preprocessing operations.

use thiserror::Error;

/// Errors returned when an argument cannot be used without corrupting the transform input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested padded length is smaller than the data being padded.
    #[error("target length {target_len} is shorter than source length {source_len}")]
    TargetTooShort { source_len: usize, target_len: usize },

    /// The length is not a power of two.
    #[error("length must be a power of two, got {len}")]
    NotPowerOfTwo { len: usize },
}

/// Result type for preprocessing operations.
pub type Result<T> = core::result::Result<T, Error>;
