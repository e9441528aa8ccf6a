//! Range-checked conversion between element types

use super::Numeric;
use crate::error::{Bound, Error, Result};
use num_traits::NumCast;

/// Position of a value relative to a target type's representable range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Less than the lowest representable value
    Below,
    /// Representable
    Within,
    /// Greater than the highest representable value
    Above,
}

/// Converts `value` into the element type `T`.
///
/// Floats headed for an integer type are first rounded half away from
/// zero. A value outside `T`'s range saturates to `T::lowest()` or
/// `T::highest()` when `clamp` is set and fails with
/// [`Error::ValueOutOfRange`] otherwise. Infinities are representable in
/// every float type; NaN headed for an integer type counts as below range.
///
/// # Errors
///
/// Returns [`Error::ValueOutOfRange`] if the value does not fit and `clamp` is false.
pub fn convert<T: Numeric, U: Numeric>(value: U, clamp: bool) -> Result<T> {
    let value = if !T::DATA_TYPE.is_float() && U::DATA_TYPE.is_float() {
        value.round_half_away()
    } else {
        value
    };

    match T::locate(value.sample()) {
        Placement::Within => {
            <T as NumCast>::from(value).ok_or_else(|| out_of_range::<T, U>(value, Bound::Above))
        }
        Placement::Below if clamp => Ok(T::lowest()),
        Placement::Above if clamp => Ok(T::highest()),
        Placement::Below => Err(out_of_range::<T, U>(value, Bound::Below)),
        Placement::Above => Err(out_of_range::<T, U>(value, Bound::Above)),
    }
}

fn out_of_range<T: Numeric, U: Numeric>(value: U, bound: Bound) -> Error {
    Error::ValueOutOfRange {
        value: value.to_string(),
        target: T::DATA_TYPE.name(),
        bound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(convert::<i32, i32>(-17, false).unwrap(), -17);
        assert_eq!(convert::<f64, f64>(0.125, false).unwrap(), 0.125);
        assert!(convert::<f32, f32>(f32::NAN, false).unwrap().is_nan());
    }

    #[test]
    fn test_float_to_int_rounds() {
        assert_eq!(convert::<i32, f64>(2.5, false).unwrap(), 3);
        assert_eq!(convert::<i32, f64>(-2.5, false).unwrap(), -3);
        assert_eq!(convert::<i32, f32>(40.501, false).unwrap(), 41);
        assert_eq!(convert::<u8, f64>(-0.4, false).unwrap(), 0);
        assert_eq!(convert::<u8, f64>(255.4, false).unwrap(), 255);
    }

    #[test]
    fn test_out_of_range_without_clamp() {
        let err = convert::<u8, i32>(-1, false).unwrap_err();
        assert!(matches!(
            err,
            Error::ValueOutOfRange { bound: Bound::Below, target: "u8", .. }
        ));
        assert_eq!(err.to_string(), "Value too small for u8: -1");

        let err = convert::<u8, f64>(255.5, false).unwrap_err();
        assert!(matches!(err, Error::ValueOutOfRange { bound: Bound::Above, .. }));
    }

    #[test]
    fn test_out_of_range_with_clamp() {
        assert_eq!(convert::<u8, i32>(-1, true).unwrap(), 0);
        assert_eq!(convert::<u8, i32>(1000, true).unwrap(), 255);
        assert_eq!(convert::<i16, f64>(-1e9, true).unwrap(), i16::MIN);
        assert_eq!(convert::<f32, f64>(1e39, true).unwrap(), f32::MAX);
        assert_eq!(convert::<f32, f64>(-1e39, true).unwrap(), f32::MIN);
    }

    #[test]
    fn test_unsigned_signed_boundaries() {
        assert!(convert::<u64, i64>(-5, false).is_err());
        assert_eq!(convert::<i64, u64>(i64::MAX as u64, false).unwrap(), i64::MAX);
        assert!(convert::<i64, u64>(u64::MAX, false).is_err());
        assert_eq!(convert::<u32, i8>(127, false).unwrap(), 127);
    }

    #[test]
    fn test_widening_never_fails() {
        assert_eq!(convert::<f64, u64>(u64::MAX, false).unwrap(), u64::MAX as f64);
        assert_eq!(convert::<f32, i64>(i64::MIN, false).unwrap(), i64::MIN as f32);
        assert_eq!(convert::<i64, u8>(200, false).unwrap(), 200);
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(convert::<f32, f64>(f64::INFINITY, false).unwrap(), f32::INFINITY);
        assert!(convert::<f32, f64>(f64::NAN, false).unwrap().is_nan());
        assert!(convert::<i32, f64>(f64::NAN, false).is_err());
        assert_eq!(convert::<i32, f64>(f64::NAN, true).unwrap(), i32::MIN);
        assert_eq!(convert::<i32, f64>(f64::INFINITY, true).unwrap(), i32::MAX);
    }

    #[test]
    fn test_round_trip_through_intermediate() {
        for x in [-128i64, -1, 0, 1, 42, 127] {
            let narrowed: i8 = convert(x, false).unwrap();
            let back: i64 = convert(narrowed, false).unwrap();
            assert_eq!(back, x);
        }
        assert!(convert::<i8, i64>(128, false).is_err());
        assert_eq!(convert::<i8, i64>(128, true).unwrap(), i8::MAX);
    }
}
