use crate::{types::Element, vector::Vector};

/// Horizontal sum across all lanes (`vaddv`).
///
/// Accumulates left to right from lane 0 in the element type itself, so
/// integer sums wrap and float sums round after every step.
pub fn vaddv<V: Vector>(a: &V) -> V::Elem {
    let lanes = a.as_slice();
    lanes[1..].iter().fold(lanes[0], |acc, &lane| acc.lane_add(lane))
}
