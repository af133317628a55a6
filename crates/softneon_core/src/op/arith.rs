use super::{binary_map, unary_map};
use crate::{
    types::{Element, SignedElement},
    vector::Vector,
};

/// Absolute difference, `|a - b|` per lane (`vabd`).
///
/// Integer lanes are read as the signed type of the same width and subtracted
/// without overflow; the magnitude is then truncated back to the lane type.
/// Float lanes subtract in their own arithmetic and clear the sign bit.
pub fn vabd<V: Vector>(a0: &V, a1: &V) -> V {
    binary_map(a0, a1, <V::Elem as Element>::lane_abd)
}

/// Absolute value per lane (`vabs`). The minimum signed integer maps to itself.
pub fn vabs<V>(a: &V) -> V
where
    V: Vector,
    V::Elem: SignedElement,
{
    unary_map(a, <V::Elem as SignedElement>::lane_abs)
}

/// Lane-wise addition (`vadd`), wrapping for integer lanes.
pub fn vadd<V: Vector>(a0: &V, a1: &V) -> V {
    binary_map(a0, a1, <V::Elem as Element>::lane_add)
}
