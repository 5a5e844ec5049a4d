use crate::float::Float;

/// Rounds every element to the nearest integer, in place.
///
/// Halfway cases round away from zero, so `1.5` becomes `2.0` and `-1.5` becomes `-2.0`.
/// Infinities and NaN are left as they are.
///
/// Typically applied after an inverse transform whose true result is known to be integer-valued,
/// to remove floating-point residue.
pub fn round_in_place<T: Float>(data: &mut [T]) {
    for x in data.iter_mut() {
        *x = x.round();
    }
}
