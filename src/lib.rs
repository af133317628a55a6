//! Portable, lane-exact emulation of ARM NEON 64-bit and 128-bit vector
//! operations.
//!
//! ```
//! use softneon::prelude::*;
//!
//! let a = Uint16x4::new([0xffff, 2, 3, 4]);
//! let b = Uint16x4::new([3, 4, 5, 6]);
//! assert_eq!(vaddl(&a, &b), Uint32x4::new([0x1_0002, 6, 8, 10]));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod prelude;

pub use softneon_core as core;
pub use softneon_core::{op, types, vector, NeonError, NeonResult};
