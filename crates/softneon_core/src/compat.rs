//! std/no-std compatibility layer
//!
//! Internal module collecting the `core` items shared across the crate, so the
//! same paths resolve with and without the `std` feature.

pub use core::{
    fmt,
    ops::{Add, BitAnd, BitOr, BitXor, Index, Neg, Not, Sub},
};
