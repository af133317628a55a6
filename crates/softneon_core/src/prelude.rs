//! Prelude module for convenient imports
//!
//! Usage: `use softneon_core::prelude::*;`

pub use crate::error::{NeonError, NeonResult};
pub use crate::op::*;
pub use crate::types::{ElemType, Element, Float16};
pub use crate::vector::*;
