//! Fixed-width vector containers.
//!
//! [`Vector64`] and [`Vector128`] model the NEON `D` and `Q` registers as plain
//! value types holding `8 / size_of::<T>()` and `16 / size_of::<T>()` lanes.
//! They are pure data holders: every lane operation lives in [`crate::op`].

mod aliases;

pub use aliases::*;

use crate::{
    compat::*,
    error::{NeonError, NeonResult},
    types::{Element, LaneArray, MaskElement},
};

mod sealed {
    pub trait Sealed {}
}

/// Common view over both vector widths, so each operation is written once.
pub trait Vector: sealed::Sealed + Copy + PartialEq + fmt::Debug {
    type Elem: Element;
    /// The vector of the same width with `U` lanes.
    type Of<U: Element>: Vector<Elem = U>;

    const WIDTH_BYTES: usize;
    const LANES: usize;

    fn from_fn<F: FnMut(usize) -> Self::Elem>(f: F) -> Self;
    fn as_slice(&self) -> &[Self::Elem];
}

/// Comparison result of a vector: same width, lanes of the element's mask type.
pub type MaskOf<V> = <V as Vector>::Of<<<V as Vector>::Elem as Element>::Mask>;

macro_rules! impl_vector {
    ($name:ident, $lanes:ident, $width:expr, $bits:ty) => {
        #[derive(Clone, Copy)]
        #[repr(transparent)]
        pub struct $name<T: Element> {
            lanes: T::$lanes,
        }

        impl<T: Element> $name<T> {
            pub const WIDTH_BYTES: usize = $width;
            pub const LANES: usize = <T::$lanes as LaneArray<T>>::LEN;

            /// Builds a vector from exactly [`Self::LANES`] lane values.
            #[inline]
            pub const fn new(lanes: T::$lanes) -> Self {
                Self { lanes }
            }

            #[inline]
            pub fn splat(value: T) -> Self {
                Self::from_fn(|_| value)
            }

            #[inline]
            pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
                Self {
                    lanes: <T::$lanes as LaneArray<T>>::from_fn(f),
                }
            }

            /// Reads lane `index`.
            ///
            /// # Panics
            ///
            /// Panics if `index >= Self::LANES`.
            #[inline]
            pub fn lane(&self, index: usize) -> T {
                assert!(
                    index < Self::LANES,
                    "lane index {index} out of range for {}-lane {} vector",
                    Self::LANES,
                    T::ELEM_TYPE
                );
                self.lanes.as_ref()[index]
            }

            #[inline]
            pub fn as_slice(&self) -> &[T] {
                self.lanes.as_ref()
            }

            #[inline]
            pub fn into_array(self) -> T::$lanes {
                self.lanes
            }

            #[inline]
            pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, T>> {
                self.as_slice().iter().copied()
            }

            /// Packs the lanes into one integer, lane 0 in the least significant
            /// bits, as the register would hold them on a little-endian target.
            pub fn to_bits(&self) -> $bits {
                let lane_bits = <T::Mask as MaskElement>::BITS as usize;
                self.iter()
                    .enumerate()
                    .fold(0u128, |acc, (i, lane)| acc | (lane.to_mask_bits().to_u128() << (i * lane_bits)))
                    as $bits
            }

            pub fn from_bits(bits: $bits) -> Self {
                let lane_bits = <T::Mask as MaskElement>::BITS as usize;
                Self::from_fn(|i| {
                    let lane = <T::Mask as MaskElement>::from_u128((bits as u128) >> (i * lane_bits));
                    T::from_mask_bits(lane)
                })
            }

            /// Reads the same register bits as a vector of `U` lanes.
            pub fn reinterpret<U: Element>(&self) -> $name<U> {
                $name::<U>::from_bits(self.to_bits())
            }
        }

        impl<T: Element> sealed::Sealed for $name<T> {}

        impl<T: Element> Vector for $name<T> {
            type Elem = T;
            type Of<U: Element> = $name<U>;

            const WIDTH_BYTES: usize = $width;
            const LANES: usize = <T::$lanes as LaneArray<T>>::LEN;

            #[inline]
            fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
                $name::from_fn(f)
            }

            #[inline]
            fn as_slice(&self) -> &[T] {
                $name::as_slice(self)
            }
        }

        impl<T: Element> Default for $name<T> {
            fn default() -> Self {
                Self::splat(T::ZERO)
            }
        }

        // Lane-wise element equality: a NaN lane never compares equal.
        impl<T: Element> PartialEq for $name<T> {
            fn eq(&self, other: &Self) -> bool {
                self.as_slice() == other.as_slice()
            }
        }

        impl<T: Element> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}<{}>", stringify!($name), T::ELEM_TYPE)?;
                f.debug_list().entries(self.iter()).finish()
            }
        }

        impl<T: Element> Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                assert!(
                    index < Self::LANES,
                    "lane index {index} out of range for {}-lane {} vector",
                    Self::LANES,
                    T::ELEM_TYPE
                );
                &self.lanes.as_ref()[index]
            }
        }

        impl<T: Element> TryFrom<&[T]> for $name<T> {
            type Error = NeonError;

            fn try_from(values: &[T]) -> NeonResult<Self> {
                if values.len() != Self::LANES {
                    tracing::trace!(
                        elem = %T::ELEM_TYPE,
                        expected = Self::LANES,
                        got = values.len(),
                        "rejected lane list"
                    );
                    return Err(NeonError::LaneCountMismatch {
                        elem: T::ELEM_TYPE,
                        width_bits: $width * 8,
                        expected: Self::LANES,
                        got: values.len(),
                    });
                }
                Ok(Self::from_fn(|i| values[i]))
            }
        }
    };
}

impl_vector!(Vector64, HalfLanes, 8, u64);
impl_vector!(Vector128, FullLanes, 16, u128);

impl<T: Element> Vector128<T> {
    /// Lanes `0..LANES/2`, the low 64 bits.
    pub fn low(&self) -> Vector64<T> {
        Vector64::from_fn(|i| self.as_slice()[i])
    }

    /// Lanes `LANES/2..LANES`, the high 64 bits.
    pub fn high(&self) -> Vector64<T> {
        let half = Vector64::<T>::LANES;
        Vector64::from_fn(|i| self.as_slice()[half + i])
    }

    pub fn combine(low: Vector64<T>, high: Vector64<T>) -> Self {
        let half = Vector64::<T>::LANES;
        Self::from_fn(|i| if i < half { low.as_slice()[i] } else { high.as_slice()[i - half] })
    }
}
