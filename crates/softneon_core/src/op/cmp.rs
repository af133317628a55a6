//! Comparisons. Every result is a mask vector of the same width whose lanes
//! are all ones where the relation holds and all zeros elsewhere.
//!
//! Float lanes use the native IEEE relations, so any comparison involving a
//! NaN lane is false. There is no separate "not equal"; negate [`vceq`] with
//! a bitwise not if needed.

use super::mask_from;
use crate::{
    types::{Element, FloatElement, SignedElement},
    vector::{MaskOf, Vector},
};

macro_rules! cmp_op {
    ($name:ident, $op:tt) => {
        #[doc = concat!("Lane-wise `a0 ", stringify!($op), " a1`.")]
        pub fn $name<V: Vector>(a0: &V, a1: &V) -> MaskOf<V> {
            let (a, b) = (a0.as_slice(), a1.as_slice());
            mask_from::<V>(|i| a[i] $op b[i])
        }
    };
}

macro_rules! cmp_zero_op {
    ($name:ident, $op:tt) => {
        #[doc = concat!("Lane-wise `a ", stringify!($op), " 0`.")]
        pub fn $name<V: Vector>(a: &V) -> MaskOf<V> {
            let (a, zero) = (a.as_slice(), <V::Elem as Element>::ZERO);
            mask_from::<V>(|i| a[i] $op zero)
        }
    };
}

macro_rules! cmp_abs_op {
    ($name:ident, $op:tt) => {
        #[doc = concat!("Lane-wise `|a0| ", stringify!($op), " |a1|`.")]
        pub fn $name<V>(a0: &V, a1: &V) -> MaskOf<V>
        where
            V: Vector,
            V::Elem: FloatElement,
        {
            let (a, b) = (a0.as_slice(), a1.as_slice());
            mask_from::<V>(|i| a[i].lane_abs() $op b[i].lane_abs())
        }
    };
}

cmp_op!(vceq, ==);
cmp_op!(vcge, >=);
cmp_op!(vcle, <=);
cmp_op!(vcgt, >);
cmp_op!(vclt, <);

cmp_zero_op!(vceqz, ==);
cmp_zero_op!(vcgez, >=);
cmp_zero_op!(vclez, <=);
cmp_zero_op!(vcgtz, >);
cmp_zero_op!(vcltz, <);

cmp_abs_op!(vcage, >=);
cmp_abs_op!(vcale, <=);
cmp_abs_op!(vcagt, >);
cmp_abs_op!(vcalt, <);
