//! IEEE 754 binary16 scalar.
//!
//! Stable Rust has no native 16-bit float, so [`Float16`] stores the raw bit
//! pattern (sign:1, exponent:5, fraction:10, MSB first) and converts through
//! `f32` for every arithmetic or ordering question. The encoding matches
//! hardware-produced half-precision data exactly.

use crate::compat::*;
use num_traits::AsPrimitive;

const SIGN_MASK: u16 = 0x8000;
const EXP_MASK: u16 = 0x7c00;
const FRAC_MASK: u16 = 0x03ff;
const QUIET_BIT: u16 = 0x0200;
const EXP_BIAS: i32 = 15;

#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Float16(u16);

impl Float16 {
    pub const ZERO: Self = Self(0x0000);
    pub const NEG_ZERO: Self = Self(0x8000);
    pub const ONE: Self = Self(0x3c00);
    pub const INFINITY: Self = Self(0x7c00);
    pub const NEG_INFINITY: Self = Self(0xfc00);
    pub const NAN: Self = Self(0x7e00);
    /// Largest finite value, 65504.
    pub const MAX: Self = Self(0x7bff);
    /// Smallest positive normal value, 2^-14.
    pub const MIN_POSITIVE: Self = Self(0x0400);

    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Assembles a value from its fields. Out-of-range fields are masked to
    /// their width.
    pub const fn from_parts(sign: bool, exponent: u16, fraction: u16) -> Self {
        let sign = if sign { SIGN_MASK } else { 0 };
        Self(sign | ((exponent << 10) & EXP_MASK) | (fraction & FRAC_MASK))
    }

    #[inline]
    pub const fn sign(self) -> bool {
        self.0 & SIGN_MASK != 0
    }

    /// Biased 5-bit exponent field.
    #[inline]
    pub const fn exponent(self) -> u16 {
        (self.0 & EXP_MASK) >> 10
    }

    /// 10-bit fraction field.
    #[inline]
    pub const fn fraction(self) -> u16 {
        self.0 & FRAC_MASK
    }

    #[inline]
    pub const fn is_nan(self) -> bool {
        self.0 & EXP_MASK == EXP_MASK && self.0 & FRAC_MASK != 0
    }

    #[inline]
    pub const fn is_infinite(self) -> bool {
        self.0 & !SIGN_MASK == EXP_MASK
    }

    #[inline]
    pub const fn abs(self) -> Self {
        Self(self.0 & !SIGN_MASK)
    }

    /// Exact widening to `f32`; every binary16 value is representable.
    pub const fn to_f32(self) -> f32 {
        let sign = ((self.0 & SIGN_MASK) as u32) << 16;
        let exp = ((self.0 & EXP_MASK) >> 10) as u32;
        let frac = (self.0 & FRAC_MASK) as u32;

        let bits = if exp == 0x1f {
            if frac == 0 {
                sign | 0x7f80_0000
            } else {
                sign | 0x7fc0_0000 | (frac << 13)
            }
        } else if exp == 0 {
            if frac == 0 {
                sign
            } else {
                // subnormal: shift the leading one into the implicit position
                let shift = frac.leading_zeros() - 21;
                let exp = 113 - shift;
                sign | (exp << 23) | (((frac << shift) & FRAC_MASK as u32) << 13)
            }
        } else {
            sign | ((exp + 112) << 23) | (frac << 13)
        };
        f32::from_bits(bits)
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.to_f32() as f64
    }

    /// Rounds to the nearest binary16 value, ties to even.
    pub const fn from_f32(value: f32) -> Self {
        let x = value.to_bits();
        let sign = ((x >> 16) & SIGN_MASK as u32) as u16;
        let exp = ((x >> 23) & 0xff) as i32;
        let man = (x & 0x007f_ffff) as u64;

        if exp == 0xff {
            return Self::encode_special(sign, man != 0, (man >> 13) as u16);
        }
        Self(encode_finite(sign, exp - 127, man, 23))
    }

    /// Rounds to the nearest binary16 value, ties to even, without an
    /// intermediate `f32` rounding step.
    pub const fn from_f64(value: f64) -> Self {
        let x = value.to_bits();
        let sign = ((x >> 48) & SIGN_MASK as u64) as u16;
        let exp = ((x >> 52) & 0x7ff) as i32;
        let man = x & 0x000f_ffff_ffff_ffff;

        if exp == 0x7ff {
            return Self::encode_special(sign, man != 0, (man >> 42) as u16);
        }
        Self(encode_finite(sign, exp - 1023, man, 52))
    }

    const fn encode_special(sign: u16, nan: bool, payload: u16) -> Self {
        if nan {
            Self(sign | EXP_MASK | QUIET_BIT | (payload & FRAC_MASK))
        } else {
            Self(sign | EXP_MASK)
        }
    }
}

/// Packs a finite value with unbiased exponent `exp` and a `man_bits`-wide
/// fraction into binary16, rounding to nearest even.
const fn encode_finite(sign: u16, exp: i32, man: u64, man_bits: u32) -> u16 {
    let half_exp = exp + EXP_BIAS;
    if half_exp >= 0x1f {
        return sign | EXP_MASK;
    }

    if half_exp <= 0 {
        let shift = (man_bits as i32 - 9 - half_exp) as u32;
        if shift > man_bits + 1 {
            return sign;
        }
        let man = man | (1u64 << man_bits);
        let mut half_man = (man >> shift) as u16;
        let round_bit = 1u64 << (shift - 1);
        if man & round_bit != 0 && man & (3 * round_bit - 1) != 0 {
            // may carry into the exponent, yielding MIN_POSITIVE
            half_man += 1;
        }
        return sign | half_man;
    }

    let shift = man_bits - 10;
    let bits = sign as u32 | ((half_exp as u32) << 10) | (man >> shift) as u32;
    let round_bit = 1u64 << (shift - 1);
    if man & round_bit != 0 && man & (3 * round_bit - 1) != 0 {
        (bits + 1) as u16
    } else {
        bits as u16
    }
}

impl From<f32> for Float16 {
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl From<Float16> for f32 {
    fn from(value: Float16) -> Self {
        value.to_f32()
    }
}

impl From<Float16> for f64 {
    fn from(value: Float16) -> Self {
        value.to_f64()
    }
}

#[cfg(feature = "half")]
impl From<half::f16> for Float16 {
    fn from(value: half::f16) -> Self {
        Self(value.to_bits())
    }
}

#[cfg(feature = "half")]
impl From<Float16> for half::f16 {
    fn from(value: Float16) -> Self {
        half::f16::from_bits(value.0)
    }
}

// Equality and ordering follow the widened f32 values: +0 == -0, NaN != NaN.
impl PartialEq for Float16 {
    fn eq(&self, other: &Self) -> bool {
        self.to_f32() == other.to_f32()
    }
}

impl PartialOrd for Float16 {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.to_f32().partial_cmp(&other.to_f32())
    }
}

impl Add for Float16 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_f32(self.to_f32() + rhs.to_f32())
    }
}

impl Sub for Float16 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_f32(self.to_f32() - rhs.to_f32())
    }
}

impl Neg for Float16 {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0 ^ SIGN_MASK)
    }
}

impl fmt::Debug for Float16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_f32(), f)
    }
}

impl fmt::Display for Float16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f32(), f)
    }
}

impl fmt::LowerHex for Float16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl AsPrimitive<Float16> for Float16 {
    #[inline]
    fn as_(self) -> Float16 {
        self
    }
}

impl AsPrimitive<Float16> for f32 {
    #[inline]
    fn as_(self) -> Float16 {
        Float16::from_f32(self)
    }
}

impl AsPrimitive<Float16> for f64 {
    #[inline]
    fn as_(self) -> Float16 {
        Float16::from_f64(self)
    }
}

// Integers below 2^24 are exact in f32 and anything larger overflows binary16
// anyway, so going through f32 rounds only once.
macro_rules! as_float16_from_int {
    ($($t:ty),*) => {
        $(
            impl AsPrimitive<Float16> for $t {
                #[inline]
                fn as_(self) -> Float16 {
                    Float16::from_f32(self as f32)
                }
            }

            impl AsPrimitive<$t> for Float16 {
                #[inline]
                fn as_(self) -> $t {
                    self.to_f32() as $t
                }
            }
        )*
    };
}

as_float16_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl AsPrimitive<f32> for Float16 {
    #[inline]
    fn as_(self) -> f32 {
        self.to_f32()
    }
}

impl AsPrimitive<f64> for Float16 {
    #[inline]
    fn as_(self) -> f64 {
        self.to_f64()
    }
}
