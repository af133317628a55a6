//! NEON register type names (`int16x4_t` and friends) in Rust casing.

use super::{Vector128, Vector64};
use crate::types::Float16;

pub type Int8x8 = Vector64<i8>;
pub type Int8x16 = Vector128<i8>;
pub type Uint8x8 = Vector64<u8>;
pub type Uint8x16 = Vector128<u8>;

pub type Int16x4 = Vector64<i16>;
pub type Int16x8 = Vector128<i16>;
pub type Uint16x4 = Vector64<u16>;
pub type Uint16x8 = Vector128<u16>;

pub type Int32x2 = Vector64<i32>;
pub type Int32x4 = Vector128<i32>;
pub type Uint32x2 = Vector64<u32>;
pub type Uint32x4 = Vector128<u32>;

pub type Int64x1 = Vector64<i64>;
pub type Int64x2 = Vector128<i64>;
pub type Uint64x1 = Vector64<u64>;
pub type Uint64x2 = Vector128<u64>;

pub type Float16x4 = Vector64<Float16>;
pub type Float16x8 = Vector128<Float16>;

pub type Float32x2 = Vector64<f32>;
pub type Float32x4 = Vector128<f32>;

pub type Float64x1 = Vector64<f64>;
pub type Float64x2 = Vector128<f64>;
