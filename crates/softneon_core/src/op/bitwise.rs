use super::{binary_map, ternary_map};
use crate::{
    types::{Element, IntElement, MaskElement},
    vector::{MaskOf, Vector},
};

/// Bit clear, `a & !b` per lane (`vbic`).
pub fn vbic<V>(a0: &V, a1: &V) -> V
where
    V: Vector,
    V::Elem: IntElement,
{
    binary_map(a0, a1, |a, b| a & !b)
}

/// Bitwise select (`vbsl`): each result bit comes from `a1` where the mask bit
/// is set and from `a2` where it is clear.
///
/// Float lanes are reinterpreted as their raw bits, composed as integers and
/// reinterpreted back, so NaN payloads and signed zeros pass through exactly.
pub fn vbsl<V: Vector>(mask: &MaskOf<V>, a1: &V, a2: &V) -> V {
    let (m, a, b) = (mask.as_slice(), a1.as_slice(), a2.as_slice());
    V::from_fn(|i| {
        let m: <V::Elem as Element>::Mask = m[i];
        let bits = (m & a[i].to_mask_bits()) | (!m & b[i].to_mask_bits());
        <V::Elem as Element>::from_mask_bits(bits)
    })
}

/// Bit clear and exclusive or, `a0 ^ (a1 & !a2)` per lane (`vbcax`).
pub fn vbcax<V>(a0: &V, a1: &V, a2: &V) -> V
where
    V: Vector,
    V::Elem: IntElement,
{
    ternary_map(a0, a1, a2, |n, m, a| n ^ (m & !a))
}

/// All-ones or all-zeros lanes of a mask, as a sanity check on foreign input.
pub fn is_canonical_mask<V>(mask: &V) -> bool
where
    V: Vector,
    V::Elem: MaskElement,
{
    mask.as_slice()
        .iter()
        .all(|&m| m == <V::Elem as MaskElement>::ALL_ONES || m == <V::Elem as MaskElement>::NONE)
}
