use core::fmt::Debug;

/// A real scalar type that the preprocessing functions operate on.
///
/// Implemented for `f32` and `f64`.
pub trait Float: num_traits::Float + Default + Debug {}
impl<T> Float for T where T: num_traits::Float + Default + Debug {}
