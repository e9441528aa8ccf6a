//! Core data types for gridband

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Represents cell element types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    /// Unsigned 8-bit integer
    U8,
    /// Unsigned 16-bit integer
    U16,
    /// Unsigned 32-bit integer
    U32,
    /// Unsigned 64-bit integer
    U64,
    /// Signed 8-bit integer
    I8,
    /// Signed 16-bit integer
    I16,
    /// Signed 32-bit integer
    I32,
    /// Signed 64-bit integer
    I64,
    /// 32-bit floating point
    F32,
    /// 64-bit floating point
    F64,
}

impl DataType {
    /// Returns the Rust name of this data type, e.g. `"u8"`
    pub const fn name(&self) -> &'static str {
        match self {
            DataType::U8 => "u8",
            DataType::U16 => "u16",
            DataType::U32 => "u32",
            DataType::U64 => "u64",
            DataType::I8 => "i8",
            DataType::I16 => "i16",
            DataType::I32 => "i32",
            DataType::I64 => "i64",
            DataType::F32 => "f32",
            DataType::F64 => "f64",
        }
    }

    /// Returns whether this is a floating point type
    pub const fn is_float(&self) -> bool {
        matches!(self, DataType::F32 | DataType::F64)
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents grid dimensions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in cells
    pub width: usize,
    /// Height in cells
    pub height: usize,
}

impl Dimensions {
    /// Creates new dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Returns the total number of cells
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the count does not fit in `usize`.
    pub fn cell_count(&self) -> Result<usize> {
        self.width.checked_mul(self.height).ok_or_else(|| {
            Error::InvalidConfiguration(format!("Extent {} has too many cells", self))
        })
    }

    /// Returns the dimensions with width and height swapped
    pub fn transposed(&self) -> Self {
        Self::new(self.height, self.width)
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_name() {
        assert_eq!(DataType::U8.name(), "u8");
        assert_eq!(DataType::F32.to_string(), "f32");
        assert!(DataType::F64.is_float());
        assert!(!DataType::I32.is_float());
    }

    #[test]
    fn test_dimensions() {
        let dims = Dimensions::new(100, 200);
        assert_eq!(dims.width, 100);
        assert_eq!(dims.height, 200);
        assert_eq!(dims.cell_count().unwrap(), 20000);
        assert_eq!(dims.transposed(), Dimensions::new(200, 100));
        assert_eq!(dims.to_string(), "100x200");
    }

    #[test]
    fn test_cell_count_overflow() {
        let side = 1usize << (usize::BITS / 2);
        assert!(matches!(
            Dimensions::new(side, side).cell_count(),
            Err(Error::InvalidConfiguration(_))
        ));
        assert_eq!(Dimensions::new(usize::MAX, 1).cell_count().unwrap(), usize::MAX);
        assert_eq!(Dimensions::new(usize::MAX, 0).cell_count().unwrap(), 0);
    }
}
