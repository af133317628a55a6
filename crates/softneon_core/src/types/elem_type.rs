use crate::compat::*;

/// Runtime descriptor of a lane element type.
///
/// Mirrors the compile-time trait framework in [`crate::types::element`] as a
/// plain lookup table, so diagnostics can name types and their relatives
/// without going through generics. Operations never dispatch on it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElemType {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F16,
    F32,
    F64,
}

impl fmt::Display for ElemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl fmt::Debug for ElemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl ElemType {
    pub const ALL: [ElemType; 11] = [
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::F16,
        Self::F32,
        Self::F64,
    ];

    /// Intrinsic name suffix, e.g. `s16` in `vadd_s16`.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::I8 => "s8",
            Self::I16 => "s16",
            Self::I32 => "s32",
            Self::I64 => "s64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F16 => "f16",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }

    pub const fn get_size_in_bytes(&self) -> usize {
        match self {
            Self::I8 | Self::U8 => 1,
            Self::I16 | Self::U16 | Self::F16 => 2,
            Self::I32 | Self::U32 | Self::F32 => 4,
            Self::I64 | Self::U64 | Self::F64 => 8,
        }
    }

    pub const fn is_integer(&self) -> bool {
        self.is_int() || self.is_uint()
    }

    pub const fn is_floating(&self) -> bool {
        matches!(self, Self::F16 | Self::F32 | Self::F64)
    }

    pub const fn is_uint(&self) -> bool {
        matches!(self, Self::U8 | Self::U16 | Self::U32 | Self::U64)
    }

    pub const fn is_int(&self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    /// Unsigned integer of the same width; the lane type of comparison results.
    pub const fn mask_type(&self) -> ElemType {
        match self.get_size_in_bytes() {
            1 => Self::U8,
            2 => Self::U16,
            4 => Self::U32,
            _ => Self::U64,
        }
    }

    /// Integer of twice the width with the same signedness. `None` for 64-bit
    /// lanes and for floats.
    pub const fn wide_type(&self) -> Option<ElemType> {
        match self {
            Self::I8 => Some(Self::I16),
            Self::I16 => Some(Self::I32),
            Self::I32 => Some(Self::I64),
            Self::U8 => Some(Self::U16),
            Self::U16 => Some(Self::U32),
            Self::U32 => Some(Self::U64),
            _ => None,
        }
    }

    /// Integer of half the width with the same signedness. `None` for 8-bit
    /// lanes and for floats.
    pub const fn narrow_type(&self) -> Option<ElemType> {
        match self {
            Self::I16 => Some(Self::I8),
            Self::I32 => Some(Self::I16),
            Self::I64 => Some(Self::I32),
            Self::U16 => Some(Self::U8),
            Self::U32 => Some(Self::U16),
            Self::U64 => Some(Self::U32),
            _ => None,
        }
    }

    /// Unsigned integer used to reinterpret a float lane bit for bit. Only
    /// defined for floats.
    pub const fn raw_bits_type(&self) -> Option<ElemType> {
        if self.is_floating() {
            Some(self.mask_type())
        } else {
            None
        }
    }

    /// Lanes held by a vector of `width_bytes` (8 or 16) bytes.
    pub const fn lanes_in(&self, width_bytes: usize) -> usize {
        width_bytes / self.get_size_in_bytes()
    }
}
