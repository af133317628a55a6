//! Lane-wise and horizontal vector operations.
//!
//! Every operation is a pure function from input vectors to a new vector. The
//! names follow the NEON intrinsics they emulate with the width and element
//! suffixes dropped: `vadd` covers `vadd_s8` through `vaddq_f64`, and the
//! element type and width come from the argument types.

mod arith;
mod bitwise;
mod cmp;
mod convert;
mod narrow;
mod reduce;
mod widen;

pub use arith::*;
pub use bitwise::*;
pub use cmp::*;
pub use convert::*;
pub use narrow::*;
pub use reduce::*;
pub use widen::*;

use crate::{
    types::{Element, MaskElement},
    vector::{MaskOf, Vector},
};

#[inline]
pub(crate) fn unary_map<V: Vector>(a: &V, f: impl Fn(V::Elem) -> V::Elem) -> V {
    let a = a.as_slice();
    V::from_fn(|i| f(a[i]))
}

#[inline]
pub(crate) fn binary_map<V: Vector>(a: &V, b: &V, f: impl Fn(V::Elem, V::Elem) -> V::Elem) -> V {
    let (a, b) = (a.as_slice(), b.as_slice());
    V::from_fn(|i| f(a[i], b[i]))
}

#[inline]
pub(crate) fn ternary_map<V: Vector>(
    a: &V,
    b: &V,
    c: &V,
    f: impl Fn(V::Elem, V::Elem, V::Elem) -> V::Elem,
) -> V {
    let (a, b, c) = (a.as_slice(), b.as_slice(), c.as_slice());
    V::from_fn(|i| f(a[i], b[i], c[i]))
}

/// Turns a per-lane predicate into a mask vector: all ones where it holds,
/// all zeros elsewhere.
#[inline]
pub(crate) fn mask_from<V: Vector>(pred: impl Fn(usize) -> bool) -> MaskOf<V> {
    debug_assert_eq!(<MaskOf<V> as Vector>::LANES, V::LANES);
    <MaskOf<V> as Vector>::from_fn(|i| {
        if pred(i) {
            <<V::Elem as Element>::Mask as MaskElement>::ALL_ONES
        } else {
            <<V::Elem as Element>::Mask as MaskElement>::NONE
        }
    })
}
