//! Softneon core
//!
//! Lane-exact software emulation of the ARM NEON 64-bit (`D`) and 128-bit (`Q`)
//! vector registers and a subset of their intrinsics, for targets without the
//! native hardware.
//!
//! The crate is layered bottom to top:
//! - [`types`]: the half-precision scalar and the element trait framework
//! - [`vector`]: the fixed-width containers
//! - [`op`]: the lane-wise and horizontal operations

#![cfg_attr(not(feature = "std"), no_std)]

pub(crate) mod compat;
pub mod error;
pub mod op;
pub mod prelude;
pub mod types;
pub mod vector;

pub use error::{NeonError, NeonResult};
