//! Compile-time trait framework over lane element types.
//!
//! Every supported element type resolves, at compile time, its mask type, its
//! lane arrays for both vector widths and, where they exist, its widened,
//! narrowed and raw-bits relatives. Operations query these traits instead of
//! hard-coding per-type behavior, and asking for a relative that does not
//! exist (a wider `u64`, a narrower `i8`, the raw bits of an `i32`) is a
//! compile error.

use crate::{compat::*, types::ElemType, types::Float16};

mod sealed {
    pub trait Sealed {}
}

/// Fixed-size lane storage for one vector width.
pub trait LaneArray<T>: Copy + AsRef<[T]> + AsMut<[T]> + fmt::Debug + Send + Sync + 'static {
    const LEN: usize;

    fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self;
}

impl<T: Copy + fmt::Debug + Send + Sync + 'static, const N: usize> LaneArray<T> for [T; N] {
    const LEN: usize = N;

    #[inline]
    fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        core::array::from_fn(f)
    }
}

pub trait Element:
    sealed::Sealed + Copy + Default + PartialEq + PartialOrd + fmt::Debug + Send + Sync + 'static
{
    const ELEM_TYPE: ElemType;
    const IS_INTEGER: bool = Self::ELEM_TYPE.is_integer();
    const IS_FLOATING: bool = Self::ELEM_TYPE.is_floating();
    const ZERO: Self;

    /// Unsigned integer of the same width, used for comparison results.
    type Mask: MaskElement;
    /// Lanes of a 64-bit vector.
    type HalfLanes: LaneArray<Self>;
    /// Lanes of a 128-bit vector.
    type FullLanes: LaneArray<Self>;

    /// Bit-for-bit reinterpretation as the mask type; never a value cast.
    fn to_mask_bits(self) -> Self::Mask;
    fn from_mask_bits(bits: Self::Mask) -> Self;

    /// Integer lanes wrap on overflow, float lanes follow IEEE 754.
    fn lane_add(self, rhs: Self) -> Self;
    /// Absolute difference, symmetric in its operands.
    fn lane_abd(self, rhs: Self) -> Self;
}

/// Unsigned lane types: the results of comparisons and the selectors of
/// bitwise select.
pub trait MaskElement:
    Element<Mask = Self> + Eq + Not<Output = Self> + BitAnd<Output = Self> + BitOr<Output = Self> + BitXor<Output = Self>
{
    const ALL_ONES: Self;
    const NONE: Self;
    const BITS: u32;

    fn to_u128(self) -> u128;
    /// Keeps the low `BITS` bits.
    fn from_u128(bits: u128) -> Self;
}

pub trait IntElement:
    Element + Eq + Not<Output = Self> + BitAnd<Output = Self> + BitOr<Output = Self> + BitXor<Output = Self>
{
}

/// Elements with a lane absolute value: signed integers (wrapping, so the
/// minimum value maps to itself) and floats (sign bit cleared).
pub trait SignedElement: Element {
    fn lane_abs(self) -> Self;
}

pub trait FloatElement: SignedElement {
    /// Unsigned integer with identical width.
    type RawBits: MaskElement;

    fn to_raw_bits(self) -> Self::RawBits;
    fn from_raw_bits(bits: Self::RawBits) -> Self;
}

/// Integers with a type of twice their width.
pub trait Widen: Element {
    type Wide: Narrow<Narrow = Self>;

    fn widen(self) -> Self::Wide;
}

/// Integers with a type of half their width.
pub trait Narrow: Element {
    type Narrow: Element;

    /// Keeps the low half of the bits.
    fn truncate(self) -> Self::Narrow;
}

macro_rules! impl_int_element {
    ($t:ty, $signed:ty, $mask:ty, $elem:expr) => {
        impl sealed::Sealed for $t {}

        impl Element for $t {
            const ELEM_TYPE: ElemType = $elem;
            const ZERO: Self = 0;

            type Mask = $mask;
            type HalfLanes = [$t; 8 / core::mem::size_of::<$t>()];
            type FullLanes = [$t; 16 / core::mem::size_of::<$t>()];

            #[inline]
            fn to_mask_bits(self) -> $mask {
                self as $mask
            }
            #[inline]
            fn from_mask_bits(bits: $mask) -> Self {
                bits as $t
            }
            #[inline]
            fn lane_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }
            // Both lanes are read as the signed type of the same width, then
            // subtracted without overflow.
            #[inline]
            fn lane_abd(self, rhs: Self) -> Self {
                ((self as $signed as i128) - (rhs as $signed as i128)).unsigned_abs() as $t
            }
        }

        impl IntElement for $t {}
    };
}

impl_int_element!(i8, i8, u8, ElemType::I8);
impl_int_element!(i16, i16, u16, ElemType::I16);
impl_int_element!(i32, i32, u32, ElemType::I32);
impl_int_element!(i64, i64, u64, ElemType::I64);
impl_int_element!(u8, i8, u8, ElemType::U8);
impl_int_element!(u16, i16, u16, ElemType::U16);
impl_int_element!(u32, i32, u32, ElemType::U32);
impl_int_element!(u64, i64, u64, ElemType::U64);

macro_rules! impl_mask_element {
    ($($t:ty),*) => {
        $(
            impl MaskElement for $t {
                const ALL_ONES: Self = <$t>::MAX;
                const NONE: Self = 0;
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn to_u128(self) -> u128 {
                    self as u128
                }
                #[inline]
                fn from_u128(bits: u128) -> Self {
                    bits as $t
                }
            }
        )*
    };
}

impl_mask_element!(u8, u16, u32, u64);

macro_rules! impl_signed_int {
    ($($t:ty),*) => {
        $(
            impl SignedElement for $t {
                #[inline]
                fn lane_abs(self) -> Self {
                    self.wrapping_abs()
                }
            }
        )*
    };
}

impl_signed_int!(i8, i16, i32, i64);

macro_rules! impl_widen {
    ($($t:ty => $wide:ty),*) => {
        $(
            impl Widen for $t {
                type Wide = $wide;

                #[inline]
                fn widen(self) -> $wide {
                    self as $wide
                }
            }

            impl Narrow for $wide {
                type Narrow = $t;

                #[inline]
                fn truncate(self) -> $t {
                    self as $t
                }
            }
        )*
    };
}

impl_widen!(i8 => i16, i16 => i32, i32 => i64, u8 => u16, u16 => u32, u32 => u64);

macro_rules! impl_float_element {
    ($t:ty, $bits:ty, $elem:expr, $zero:expr, $from_bits:expr, $to_bits:expr) => {
        impl sealed::Sealed for $t {}

        impl Element for $t {
            const ELEM_TYPE: ElemType = $elem;
            const ZERO: Self = $zero;

            type Mask = $bits;
            type HalfLanes = [$t; 8 / core::mem::size_of::<$t>()];
            type FullLanes = [$t; 16 / core::mem::size_of::<$t>()];

            #[inline]
            fn to_mask_bits(self) -> $bits {
                self.to_raw_bits()
            }
            #[inline]
            fn from_mask_bits(bits: $bits) -> Self {
                Self::from_raw_bits(bits)
            }
            #[inline]
            fn lane_add(self, rhs: Self) -> Self {
                self + rhs
            }
            #[inline]
            fn lane_abd(self, rhs: Self) -> Self {
                (self - rhs).lane_abs()
            }
        }

        impl SignedElement for $t {
            #[inline]
            fn lane_abs(self) -> Self {
                let sign: $bits = 1 << (<$bits>::BITS - 1);
                Self::from_raw_bits(self.to_raw_bits() & !sign)
            }
        }

        impl FloatElement for $t {
            type RawBits = $bits;

            #[inline]
            fn to_raw_bits(self) -> $bits {
                $to_bits(self)
            }
            #[inline]
            fn from_raw_bits(bits: $bits) -> Self {
                $from_bits(bits)
            }
        }
    };
}

impl_float_element!(Float16, u16, ElemType::F16, Float16::ZERO, Float16::from_bits, Float16::to_bits);
impl_float_element!(f32, u32, ElemType::F32, 0.0, f32::from_bits, f32::to_bits);
impl_float_element!(f64, u64, ElemType::F64, 0.0, f64::from_bits, f64::to_bits);
