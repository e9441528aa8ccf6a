//! Numeric element types and safe cross-type conversion
//!
//! Every value that crosses between two element types (band construction,
//! cross-type copies, scaling factors) goes through [`convert`], which
//! rounds floats headed for integer types and either clamps or rejects
//! values the target type cannot hold.

pub mod convert;

pub use convert::{convert, Placement};

use crate::types::DataType;
use num_traits::{Bounded, NumCast, Zero};
use std::fmt::{Debug, Display};

/// Lossless view of a value used for cross-type range comparisons.
///
/// Every supported integer fits in `i128` and every supported float in
/// `f64`, so comparing in these widened forms cannot wrap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// Integral value
    Int(i128),
    /// Floating point value
    Float(f64),
}

/// Arithmetic element type that can be stored in a band.
pub trait Numeric:
    Copy + PartialOrd + Debug + Display + NumCast + Bounded + Zero + Send + Sync + 'static
{
    /// Tag describing this element type
    const DATA_TYPE: DataType;

    /// Lowest representable value (most negative for floats)
    fn lowest() -> Self {
        <Self as Bounded>::min_value()
    }

    /// Highest representable value
    fn highest() -> Self {
        <Self as Bounded>::max_value()
    }

    /// Rounds to the nearest integral value, half away from zero.
    /// Identity for integer types.
    fn round_half_away(self) -> Self;

    /// Addition; wraps on integer overflow
    fn accumulate(self, rhs: Self) -> Self;

    /// Multiplication; wraps on integer overflow
    fn scale_by(self, rhs: Self) -> Self;

    /// Equality that also treats two NaNs as the same value
    fn is_same(self, other: Self) -> bool;

    /// Widened form of this value
    fn sample(self) -> Sample;

    /// Where `sample` falls relative to this type's representable range
    fn locate(sample: Sample) -> Placement;

    /// Value as `f64`, rounding for 64-bit integers beyond 2^53
    fn as_f64(self) -> f64;
}

macro_rules! impl_numeric_int {
    ($t:ty, $data_type:expr) => {
        impl Numeric for $t {
            const DATA_TYPE: DataType = $data_type;

            fn round_half_away(self) -> Self {
                self
            }

            fn accumulate(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            fn scale_by(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            fn is_same(self, other: Self) -> bool {
                self == other
            }

            fn sample(self) -> Sample {
                Sample::Int(self as i128)
            }

            fn locate(sample: Sample) -> Placement {
                match sample {
                    Sample::Int(v) if v < <$t>::MIN as i128 => Placement::Below,
                    Sample::Int(v) if v > <$t>::MAX as i128 => Placement::Above,
                    Sample::Int(_) => Placement::Within,
                    // NaN has no integral counterpart; it is grouped with
                    // the low side so clamping yields the lowest value.
                    Sample::Float(v) if v.is_nan() || v < <$t>::MIN as f64 => Placement::Below,
                    Sample::Float(v) => match <$t as NumCast>::from(v) {
                        Some(_) => Placement::Within,
                        None => Placement::Above,
                    },
                }
            }

            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

macro_rules! impl_numeric_float {
    ($t:ty, $data_type:expr) => {
        impl Numeric for $t {
            const DATA_TYPE: DataType = $data_type;

            fn round_half_away(self) -> Self {
                self.round()
            }

            fn accumulate(self, rhs: Self) -> Self {
                self + rhs
            }

            fn scale_by(self, rhs: Self) -> Self {
                self * rhs
            }

            fn is_same(self, other: Self) -> bool {
                self == other || (self.is_nan() && other.is_nan())
            }

            fn sample(self) -> Sample {
                Sample::Float(self as f64)
            }

            fn locate(sample: Sample) -> Placement {
                match sample {
                    Sample::Int(_) => Placement::Within,
                    Sample::Float(v) if !v.is_finite() => Placement::Within,
                    Sample::Float(v) if v < <$t>::MIN as f64 => Placement::Below,
                    Sample::Float(v) if v > <$t>::MAX as f64 => Placement::Above,
                    Sample::Float(_) => Placement::Within,
                }
            }

            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_numeric_int!(i8, DataType::I8);
impl_numeric_int!(i16, DataType::I16);
impl_numeric_int!(i32, DataType::I32);
impl_numeric_int!(i64, DataType::I64);
impl_numeric_int!(u8, DataType::U8);
impl_numeric_int!(u16, DataType::U16);
impl_numeric_int!(u32, DataType::U32);
impl_numeric_int!(u64, DataType::U64);
impl_numeric_float!(f32, DataType::F32);
impl_numeric_float!(f64, DataType::F64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowest_and_highest() {
        assert_eq!(i32::lowest(), i32::MIN);
        assert_eq!(u8::lowest(), 0);
        assert_eq!(u8::highest(), 255);
        assert_eq!(f32::lowest(), f32::MIN);
        assert_eq!(f64::highest(), f64::MAX);
    }

    #[test]
    fn test_data_type_tags() {
        assert_eq!(<u16 as Numeric>::DATA_TYPE, DataType::U16);
        assert_eq!(<f32 as Numeric>::DATA_TYPE, DataType::F32);
        assert_eq!(<i64 as Numeric>::DATA_TYPE.name(), "i64");
    }

    #[test]
    fn test_round_half_away() {
        assert_eq!(2.5f64.round_half_away(), 3.0);
        assert_eq!((-2.5f64).round_half_away(), -3.0);
        assert_eq!(2.4f32.round_half_away(), 2.0);
        assert_eq!(7i32.round_half_away(), 7);
    }

    #[test]
    fn test_integer_arithmetic_wraps() {
        assert_eq!(250u8.accumulate(10), 4);
        assert_eq!(i8::MAX.scale_by(2), -2);
        assert_eq!(1.5f64.scale_by(2.0), 3.0);
    }

    #[test]
    fn test_is_same_nan() {
        assert!(f64::NAN.is_same(f64::NAN));
        assert!(!f64::NAN.is_same(1.0));
        assert!(3i16.is_same(3));
    }

    #[test]
    fn test_locate_signed_against_unsigned() {
        assert_eq!(u8::locate((-1i32).sample()), Placement::Below);
        assert_eq!(u64::locate(i64::MIN.sample()), Placement::Below);
        assert_eq!(i64::locate(u64::MAX.sample()), Placement::Above);
        assert_eq!(u32::locate(0i8.sample()), Placement::Within);
    }

    #[test]
    fn test_locate_float_against_integer() {
        assert_eq!(u8::locate(255.0f64.sample()), Placement::Within);
        assert_eq!(u8::locate(256.0f64.sample()), Placement::Above);
        assert_eq!(i64::locate(9.3e18f64.sample()), Placement::Above);
        assert_eq!(i32::locate(f64::NAN.sample()), Placement::Below);
    }

    #[test]
    fn test_locate_float_against_float() {
        assert_eq!(f32::locate(1e39f64.sample()), Placement::Above);
        assert_eq!(f32::locate((-1e39f64).sample()), Placement::Below);
        assert_eq!(f32::locate(f64::INFINITY.sample()), Placement::Within);
        assert_eq!(f32::locate(u64::MAX.sample()), Placement::Within);
    }
}
