//! In-place mutation, transposition and property copying

use super::Band;
use crate::error::{Error, Result};
use crate::numeric::{convert, Numeric};
use std::ops::MulAssign;

impl<T: Numeric> Band<T> {
    /// Sets every cell to `value`
    pub fn init(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Multiplies every data cell by `factor` converted into `T`.
    ///
    /// The factor is converted (and rounded, for integer bands) before any
    /// cell is touched; nodata cells are left as they are.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if `factor` does not fit in `T`.
    pub fn scale_multiply<U: Numeric>(&mut self, factor: U) -> Result<()> {
        let factor: T = convert(factor, false)?;
        self.scale_in_place(factor);
        Ok(())
    }

    fn scale_in_place(&mut self, factor: T) {
        let nodata = self.nodata;
        for v in self.data.iter_mut().filter(|v| !v.is_same(nodata)) {
            *v = v.scale_by(factor);
        }
    }

    /// Returns a copy with rows and columns swapped
    pub fn transpose(&self) -> Band<T> {
        let dims = self.dimensions().transposed();
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.width {
            for row in 0..self.height {
                data.push(self.data[row * self.width + col]);
            }
        }

        Band {
            width: dims.width,
            height: dims.height,
            georef: self.georef,
            nodata: self.nodata,
            data,
        }
    }

    /// Takes extent and georeferencing from `other`, uses `nodata` as the
    /// sentinel and reallocates storage filled with `fill`. Cell values of
    /// `other` are not copied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if `nodata` or `fill` does not fit
    /// in `T`; the band is left unchanged.
    pub fn copy_props<U: Numeric, N: Numeric, V: Numeric>(
        &mut self,
        other: &Band<U>,
        nodata: N,
        fill: V,
    ) -> Result<()> {
        let nodata: T = convert(nodata, false)?;
        let fill: T = convert(fill, false)?;

        self.width = other.width;
        self.height = other.height;
        self.georef = other.georef;
        self.nodata = nodata;
        self.data.clear();
        self.data.resize(other.data.len(), fill);
        Ok(())
    }

    /// [`Band::copy_props`] with the fill value equal to `nodata`
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if `nodata` does not fit in `T`.
    pub fn copy_props_with_nodata<U: Numeric, N: Numeric>(&mut self, other: &Band<U>, nodata: N) -> Result<()> {
        self.copy_props(other, nodata, nodata)
    }

    /// [`Band::copy_props`] reusing `other`'s nodata value
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if `other`'s nodata value does not fit in `T`.
    pub fn copy_props_from<U: Numeric>(&mut self, other: &Band<U>) -> Result<()> {
        self.copy_props_with_nodata(other, other.nodata)
    }

    /// Inserts `value` before linear position `row * col`, growing storage
    /// by one cell without touching width or height.
    ///
    /// The position is `row * col`, not the row-major `row * width + col`,
    /// and the band no longer holds `width * height` cells afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `row * col` is past the end of storage.
    #[deprecated(note = "inserts at `row * col` and breaks the width * height cell count")]
    pub fn insert(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let position = row.saturating_mul(col);
        if position > self.data.len() {
            return Err(Error::OutOfBounds(format!(
                "Insert position {} exceeds band length {}",
                position,
                self.data.len()
            )));
        }
        self.data.insert(position, value);
        Ok(())
    }
}

/// Same-type scaling; nodata cells are left as they are
impl<T: Numeric> MulAssign<T> for Band<T> {
    fn mul_assign(&mut self, factor: T) {
        self.scale_in_place(factor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dimensions;

    #[test]
    fn test_init() {
        let mut band = Band::<u16>::new(3, 3, 0, 1).unwrap();
        band.init(9);
        assert!(band.iter().all(|&v| v == 9));
    }

    #[test]
    fn test_scale_multiply_rounds_factor_for_integers() {
        let mut band = Band::from_vec(3, 1, 0i32, vec![0, 2, 5]).unwrap();
        band.scale_multiply(2.6).unwrap();
        assert_eq!(band.as_slice(), &[0, 6, 15]);
    }

    #[test]
    fn test_scale_multiply_float_band() {
        let mut band = Band::from_vec(3, 1, -1.0f64, vec![-1.0, 2.0, 0.5]).unwrap();
        band.scale_multiply(1.5f32).unwrap();
        assert_eq!(band.as_slice(), &[-1.0, 3.0, 0.75]);
    }

    #[test]
    fn test_scale_multiply_rejects_factor() {
        let mut band = Band::from_vec(2, 1, 0u8, vec![1, 2]).unwrap();
        assert!(band.scale_multiply(-2).is_err());
        assert_eq!(band.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_mul_assign() {
        let mut band = Band::from_vec(2, 2, 4i64, vec![4, 1, 2, 3]).unwrap();
        band *= 10;
        assert_eq!(band.as_slice(), &[4, 10, 20, 30]);
    }

    #[test]
    fn test_transpose() {
        let band = Band::from_vec(3, 2, 0i32, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let transposed = band.transpose();
        assert_eq!(transposed.dimensions(), Dimensions::new(2, 3));
        assert_eq!(transposed.as_slice(), &[1, 4, 2, 5, 3, 6]);
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(transposed[(col, row)], band[(row, col)]);
            }
        }
    }

    #[test]
    fn test_transpose_twice_restores() {
        let mut band = Band::<f32>::new(5, 3, -1, 0).unwrap();
        for (i, v) in band.iter_mut().enumerate() {
            *v = i as f32 * 0.5;
        }
        band.set_origin(10.0, 20.0);
        assert_eq!(band.transpose().transpose(), band);
    }

    #[test]
    fn test_copy_props() {
        let mut source = Band::<f64>::new(4, 2, -1.0, 3.3).unwrap();
        source.set_origin(5.0, 6.0);
        source.set_scale(0.5);
        source.set_spatial_reference_id(3857);

        let mut target = Band::<u8>::default();
        target.copy_props(&source, 255, 1.2).unwrap();
        assert_eq!(target.dimensions(), Dimensions::new(4, 2));
        assert_eq!(target.georeference(), source.georeference());
        assert_eq!(target.nodata_value(), 255);
        assert!(target.iter().all(|&v| v == 1));
    }

    #[test]
    fn test_copy_props_failure_leaves_band() {
        let source = Band::<f64>::with_size(4, 2).unwrap();
        let mut target = Band::<u8>::new(1, 1, 0, 5).unwrap();
        assert!(target.copy_props(&source, 0, 300).is_err());
        assert_eq!(target.len(), 1);
        assert_eq!(target[(0, 0)], 5);
    }

    #[test]
    fn test_copy_props_overloads() {
        let source = Band::<i32>::new(2, 2, -5, 3).unwrap();

        let mut target = Band::<i8>::default();
        target.copy_props_with_nodata(&source, 7).unwrap();
        assert!(target.iter().all(|&v| v == 7));

        let mut target = Band::<f32>::default();
        target.copy_props_from(&source).unwrap();
        assert_eq!(target.nodata_value(), -5.0);
        assert_eq!(target.count(), 0);

        let mut unsigned = Band::<u8>::default();
        assert!(unsigned.copy_props_from(&source).is_err());
    }

    #[test]
    #[allow(deprecated)]
    fn test_insert_uses_row_times_col() {
        let mut band = Band::from_vec(3, 2, 0i32, vec![1, 2, 3, 4, 5, 6]).unwrap();
        band.insert(1, 2, 99).unwrap();
        assert_eq!(band.as_slice(), &[1, 2, 99, 3, 4, 5, 6]);
        assert_eq!(band.len(), 7);
        assert_eq!(band.dimensions(), Dimensions::new(3, 2));
        assert!(band.insert(4, 4, 0).is_err());
    }
}
