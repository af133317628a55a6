//! Prelude module for convenient imports
//!
//! Usage: `use softneon::prelude::*;`

pub use softneon_core::prelude::*;
