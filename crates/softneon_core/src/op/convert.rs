use num_traits::AsPrimitive;

use crate::{types::Element, vector::Vector};

/// Lane-wise numeric cast to `U` (`vcvt`), with the semantics of Rust `as`.
///
/// Source and destination share a bit width (enforced through their common
/// mask type), so the lane count is unchanged. Integer to float rounds to
/// nearest; float to integer truncates toward zero, saturating at the bounds
/// of `U`, and maps NaN to zero.
pub fn vcvt<U, V>(a: &V) -> V::Of<U>
where
    V: Vector,
    U: Element<Mask = <V::Elem as Element>::Mask>,
    V::Elem: AsPrimitive<U>,
{
    let a = a.as_slice();
    <V::Of<U> as Vector>::from_fn(|i| a[i].as_())
}
