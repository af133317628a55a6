//! Narrowing additions. The sum is formed in the source type and only its low
//! half is kept: overflow is discarded, nothing saturates.

use crate::{
    types::{Element, Narrow},
    vector::{Vector128, Vector64},
};

/// Adds two 128-bit vectors and truncates each lane to half its width
/// (`vaddhn`).
///
/// ```compile_fail
/// use softneon_core::prelude::*;
///
/// let a = Int8x16::splat(1);
/// let _ = vaddhn(&a, &a);
/// ```
pub fn vaddhn<T: Narrow>(a0: &Vector128<T>, a1: &Vector128<T>) -> Vector64<T::Narrow> {
    Vector64::from_fn(|i| a0[i].lane_add(a1[i]).truncate())
}

/// Like [`vaddhn`], filling the upper half of a 128-bit result; the lower half
/// is `r` verbatim (`vaddhn_high`).
pub fn vaddhn_high<T: Narrow>(
    r: &Vector64<T::Narrow>,
    a0: &Vector128<T>,
    a1: &Vector128<T>,
) -> Vector128<T::Narrow> {
    Vector128::combine(*r, vaddhn(a0, a1))
}
