//! Borrowed single-row views for two-step `row`/`col` indexing
//!
//! A view borrows its band, so the borrow checker guarantees the band
//! outlives it and is not reallocated while the view is alive.

use super::Band;
use crate::error::{Error, Result};
use crate::numeric::{convert, Numeric};
use std::ops::{Index, IndexMut};

/// Read-only view of one band row
#[derive(Debug, Clone, Copy)]
pub struct Row<'a, T: Numeric> {
    band: &'a Band<T>,
    row: usize,
}

impl<'a, T: Numeric> Row<'a, T> {
    pub(super) fn new(band: &'a Band<T>, row: usize) -> Self {
        Self { band, row }
    }

    /// Row number within the band
    pub fn row_index(&self) -> usize {
        self.row
    }

    /// Checked reference to the cell in column `col`
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `col` is not below the band width.
    pub fn get(&self, col: usize) -> Result<&'a T> {
        check_col(self.band, col)?;
        self.band.get(self.row, col)
    }

    /// Cells of this row, left to right
    pub fn as_slice(&self) -> &'a [T] {
        let start = self.row * self.band.width;
        &self.band.data[start..start + self.band.width]
    }

    /// Number of cells in the row
    pub fn len(&self) -> usize {
        self.band.width
    }

    /// True for rows of a zero-width band
    pub fn is_empty(&self) -> bool {
        self.band.width == 0
    }

    /// Iterates the row left to right
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.as_slice().iter()
    }
}

impl<T: Numeric> Index<usize> for Row<'_, T> {
    type Output = T;

    fn index(&self, col: usize) -> &T {
        &self.as_slice()[col]
    }
}

/// Mutable view of one band row
#[derive(Debug)]
pub struct RowMut<'a, T: Numeric> {
    band: &'a mut Band<T>,
    row: usize,
}

impl<'a, T: Numeric> RowMut<'a, T> {
    pub(super) fn new(band: &'a mut Band<T>, row: usize) -> Self {
        Self { band, row }
    }

    /// Row number within the band
    pub fn row_index(&self) -> usize {
        self.row
    }

    /// Checked reference to the cell in column `col`
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `col` is not below the band width.
    pub fn get(&self, col: usize) -> Result<&T> {
        check_col(self.band, col)?;
        self.band.get(self.row, col)
    }

    /// Checked mutable reference to the cell in column `col`
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `col` is not below the band width.
    pub fn get_mut(&mut self, col: usize) -> Result<&mut T> {
        check_col(self.band, col)?;
        self.band.get_mut(self.row, col)
    }

    /// Converts `value` into `T` and stores it in column `col`
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for a bad column or
    /// [`Error::ValueOutOfRange`] if the value does not fit.
    pub fn set<U: Numeric>(&mut self, col: usize, value: U) -> Result<()> {
        let value: T = convert(value, false)?;
        *self.get_mut(col)? = value;
        Ok(())
    }

    /// Cells of this row, left to right
    pub fn as_slice(&self) -> &[T] {
        let start = self.row * self.band.width;
        &self.band.data[start..start + self.band.width]
    }

    /// Mutable cells of this row
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let start = self.row * self.band.width;
        let end = start + self.band.width;
        &mut self.band.data[start..end]
    }

    /// Sets every cell in the row to `value`
    pub fn fill(&mut self, value: T) {
        self.as_mut_slice().fill(value);
    }
}

impl<T: Numeric> Index<usize> for RowMut<'_, T> {
    type Output = T;

    fn index(&self, col: usize) -> &T {
        &self.as_slice()[col]
    }
}

impl<T: Numeric> IndexMut<usize> for RowMut<'_, T> {
    fn index_mut(&mut self, col: usize) -> &mut T {
        &mut self.as_mut_slice()[col]
    }
}

fn check_col<T: Numeric>(band: &Band<T>, col: usize) -> Result<()> {
    if !band.in_col_bounds(col) {
        return Err(Error::OutOfBounds(format!(
            "Column {} outside band width {}",
            col, band.width
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: usize, height: usize) -> Band<i32> {
        let data = (0..(width * height) as i32).collect();
        Band::from_vec(width, height, -1, data).unwrap()
    }

    #[test]
    fn test_row_slice() {
        let band = numbered(4, 3);
        let row = band.row(1).unwrap();
        assert_eq!(row.row_index(), 1);
        assert_eq!(row.len(), 4);
        assert_eq!(row.as_slice(), &[4, 5, 6, 7]);
        assert_eq!(row[2], 6);
        assert_eq!(row.iter().sum::<i32>(), 22);
    }

    #[test]
    fn test_row_get_checks_column() {
        let band = numbered(4, 3);
        let row = band.row(2).unwrap();
        assert_eq!(*row.get(3).unwrap(), 11);
        assert!(matches!(row.get(4), Err(Error::OutOfBounds(_))));
    }

    #[test]
    fn test_row_mut_set_converts() {
        let mut band = numbered(3, 2);
        let mut row = band.row_mut(1).unwrap();
        row.set(0, 9.7f64).unwrap();
        assert!(row.set(5, 1).is_err());
        assert!(row.set(1, 1e12).is_err());
        row[2] = 42;
        *row.get_mut(1).unwrap() = 7;
        assert_eq!(*row.get(1).unwrap(), 7);
        assert_eq!(band.as_slice(), &[0, 1, 2, 10, 7, 42]);
    }

    #[test]
    fn test_row_mut_fill() {
        let mut band = numbered(3, 3);
        band.row_mut(0).unwrap().fill(-1);
        assert_eq!(band.count(), 6);
        assert_eq!(band.row(0).unwrap().as_slice(), &[-1, -1, -1]);
    }

    #[test]
    fn test_empty_row() {
        let band = Band::<u8>::with_size(0, 2).unwrap();
        let row = band.row(0).unwrap();
        assert!(row.is_empty());
        assert!(row.get(0).is_err());
    }
}
