//! Error types for gridband

use std::fmt;
use std::io;

/// Result type for gridband operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which side of the target range a rejected value fell on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Below the lowest representable value
    Below,
    /// Above the highest representable value
    Above,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Below => write!(f, "too small"),
            Bound::Above => write!(f, "too large"),
        }
    }
}

/// Error types that can occur in gridband operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A numeric conversion found a value outside the target type's range
    #[error("Value {bound} for {target}: {value}")]
    ValueOutOfRange {
        /// The offending value, formatted in its source type
        value: String,
        /// Name of the target element type
        target: &'static str,
        /// Side of the range that was exceeded
        bound: Bound,
    },

    /// Out of bounds access
    #[error("Out of bounds: {0}")]
    OutOfBounds(String),

    /// Inconsistent band or raster construction parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Statistic with no defined value (e.g. mean of zero cells)
    #[error("Undefined: {0}")]
    Undefined(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON layout description
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
