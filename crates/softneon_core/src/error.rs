use crate::{compat::*, types::ElemType};

/// Main error type for softneon_core.
///
/// Lane arithmetic is total, so the only runtime failure is building a
/// vector from a slice of the wrong length.
#[derive(Clone, PartialEq, Eq)]
pub enum NeonError {
    /// Slice length does not match the lane count of the target vector.
    LaneCountMismatch {
        elem: ElemType,
        width_bits: usize,
        expected: usize,
        got: usize,
    },
}

impl fmt::Display for NeonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LaneCountMismatch {
                elem,
                width_bits,
                expected,
                got,
            } => write!(
                f,
                "lane count mismatch for {width_bits}-bit {elem} vector - expected: {expected}, got: {got}"
            ),
        }
    }
}

impl fmt::Debug for NeonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NeonError {}

pub type NeonResult<T> = core::result::Result<T, NeonError>;
