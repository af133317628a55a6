//! Widening additions: narrow lanes are promoted before adding, so the sum
//! cannot overflow.

use crate::{
    types::{Element, Widen},
    vector::{Vector128, Vector64},
};

/// Widening add of two 64-bit vectors (`vaddl`).
///
/// 64-bit lanes have nothing to widen into:
///
/// ```compile_fail
/// use softneon_core::prelude::*;
///
/// let a = Int64x1::new([1]);
/// let _ = vaddl(&a, &a);
/// ```
pub fn vaddl<T: Widen>(a0: &Vector64<T>, a1: &Vector64<T>) -> Vector128<T::Wide> {
    Vector128::from_fn(|i| a0[i].widen().lane_add(a1[i].widen()))
}

/// Widening add of the upper halves of two 128-bit vectors (`vaddl_high`).
pub fn vaddl_high<T: Widen>(a0: &Vector128<T>, a1: &Vector128<T>) -> Vector128<T::Wide> {
    vaddl(&a0.high(), &a1.high())
}

/// Adds a 64-bit vector, widened, to a vector of the wide type (`vaddw`).
pub fn vaddw<T: Widen>(a0: &Vector128<T::Wide>, a1: &Vector64<T>) -> Vector128<T::Wide> {
    Vector128::from_fn(|i| a0[i].lane_add(a1[i].widen()))
}

/// Adds the upper half of a 128-bit vector, widened, to a vector of the wide
/// type (`vaddw_high`).
pub fn vaddw_high<T: Widen>(a0: &Vector128<T::Wide>, a1: &Vector128<T>) -> Vector128<T::Wide> {
    vaddw(a0, &a1.high())
}
