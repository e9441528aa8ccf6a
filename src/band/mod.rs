//! Single-layer numeric grid with nodata sentinel and georeferencing
//!
//! Cells are stored row-major: cell `(row, col)` lives at linear index
//! `row * width + col`. Values entering from another element type are
//! converted through [`convert`](crate::numeric::convert), so every stored
//! cell and the nodata value are representable in `T`.

mod ops;
mod rows;
mod stats;

pub use rows::{Row, RowMut};
pub use stats::BandStats;

use crate::error::{Error, Result};
use crate::georef::Georeference;
use crate::numeric::{convert, Numeric};
use crate::types::{DataType, Dimensions};
use std::ops::{Index, IndexMut};

/// Dense row-major grid of `T` cells
#[derive(Debug, Clone, PartialEq)]
pub struct Band<T: Numeric> {
    width: usize,
    height: usize,
    georef: Georeference,
    nodata: T,
    data: Vec<T>,
}

impl<T: Numeric> Band<T> {
    /// Creates a `width` x `height` band with every cell set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if `nodata` or `fill` cannot be represented in `T`,
    /// or [`Error::InvalidConfiguration`] if the extent has more cells than `usize` can count.
    pub fn new<N: Numeric, V: Numeric>(width: usize, height: usize, nodata: N, fill: V) -> Result<Self> {
        let nodata = convert(nodata, false)?;
        let fill = convert(fill, false)?;
        Self::filled(width, height, nodata, fill)
    }

    /// Creates a band whose cells all hold the nodata value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if `nodata` cannot be represented in `T`,
    /// or [`Error::InvalidConfiguration`] for an oversized extent.
    pub fn with_nodata<N: Numeric>(width: usize, height: usize, nodata: N) -> Result<Self> {
        Self::new(width, height, nodata, nodata)
    }

    /// Creates a band using `T::lowest()` as nodata and fill value
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for an oversized extent.
    pub fn with_size(width: usize, height: usize) -> Result<Self> {
        Self::filled(width, height, T::lowest(), T::lowest())
    }

    /// Creates a band from values already of type `T`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `width * height` overflows.
    pub fn filled(width: usize, height: usize, nodata: T, fill: T) -> Result<Self> {
        let cells = Dimensions::new(width, height).cell_count()?;
        Ok(Self {
            width,
            height,
            georef: Georeference::default(),
            nodata,
            data: vec![fill; cells],
        })
    }

    /// Wraps existing row-major cell data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `width * height` overflows or
    /// `data` does not hold exactly that many cells.
    pub fn from_vec(width: usize, height: usize, nodata: T, data: Vec<T>) -> Result<Self> {
        let cells = Dimensions::new(width, height).cell_count()?;
        if data.len() != cells {
            return Err(Error::InvalidConfiguration(format!(
                "{} cells supplied for a {}x{} band",
                data.len(), width, height
            )));
        }

        Ok(Self {
            width,
            height,
            georef: Georeference::default(),
            nodata,
            data,
        })
    }

    /// Builds a band of element type `T` from a band of another type.
    ///
    /// All metadata is copied; every cell and the nodata value are converted,
    /// saturating instead of failing when `clamp` is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] on the first value that does not fit and `clamp` is false.
    pub fn convert_from<U: Numeric>(other: &Band<U>, clamp: bool) -> Result<Self> {
        let nodata = convert(other.nodata, clamp)?;
        let data = other
            .data
            .iter()
            .map(|&v| convert(v, clamp))
            .collect::<Result<Vec<T>>>()?;

        Ok(Self {
            width: other.width,
            height: other.height,
            georef: other.georef,
            nodata,
            data,
        })
    }

    /// Converts this band into element type `U`
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if a cell does not fit in `U` and `clamp` is false.
    pub fn cast<U: Numeric>(&self, clamp: bool) -> Result<Band<U>> {
        Band::<U>::convert_from(self, clamp)
    }

    /// Replaces this band's content with a converted copy of `other`.
    /// On failure the band is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if a value of `other` does not fit in `T`.
    pub fn assign_from<U: Numeric>(&mut self, other: &Band<U>) -> Result<()> {
        *self = Self::convert_from(other, false)?;
        Ok(())
    }

    /// Width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// Width and height as one value
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Element type tag
    pub fn data_type(&self) -> DataType {
        T::DATA_TYPE
    }

    /// Number of stored cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the band holds no cells
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether `row` is below the height
    pub fn in_row_bounds(&self, row: usize) -> bool {
        row < self.height
    }

    /// Whether `col` is below the width
    pub fn in_col_bounds(&self, col: usize) -> bool {
        col < self.width
    }

    /// True only when both the row and the column are out of bounds.
    ///
    /// A single-axis overflow is not reported here; [`Band::linear_index`]
    /// still rejects positions that fall outside the stored cells.
    pub fn out_of_range(&self, row: usize, col: usize) -> bool {
        !self.in_row_bounds(row) && !self.in_col_bounds(col)
    }

    /// Linear storage index of `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if [`Band::out_of_range`] reports the
    /// position or the computed index lies past the last stored cell.
    pub fn linear_index(&self, row: usize, col: usize) -> Result<usize> {
        let index = if self.out_of_range(row, col) {
            None
        } else {
            row.checked_mul(self.width)
                .and_then(|i| i.checked_add(col))
                .filter(|&i| i < self.data.len())
        };

        index.ok_or_else(|| Error::OutOfBounds(format!(
            "Cell ({}, {}) outside band bounds ({}, {})",
            row, col, self.height, self.width
        )))
    }

    /// `(row, col)` of a linear storage index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `index` is not below [`Band::len`].
    pub fn row_col(&self, index: usize) -> Result<(usize, usize)> {
        if index >= self.data.len() || self.width == 0 {
            return Err(index_error(index, self.data.len()));
        }
        Ok((index / self.width, index % self.width))
    }

    /// Checked reference to cell `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the position is rejected by [`Band::linear_index`].
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        let index = self.linear_index(row, col)?;
        Ok(&self.data[index])
    }

    /// Checked mutable reference to cell `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the position is rejected by [`Band::linear_index`].
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let index = self.linear_index(row, col)?;
        Ok(&mut self.data[index])
    }

    /// Converts `value` into `T` and stores it at `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for a bad position or
    /// [`Error::ValueOutOfRange`] if the value does not fit.
    pub fn set<U: Numeric>(&mut self, row: usize, col: usize, value: U) -> Result<()> {
        let index = self.linear_index(row, col)?;
        self.set_at(index, value)
    }

    /// Converts `value` into `T` and stores it at linear index `index`.
    /// Nothing is written on failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for a bad index or
    /// [`Error::ValueOutOfRange`] if the value does not fit.
    pub fn set_at<U: Numeric>(&mut self, index: usize, value: U) -> Result<()> {
        if index >= self.data.len() {
            return Err(index_error(index, self.data.len()));
        }
        self.data[index] = convert(value, false)?;
        Ok(())
    }

    /// Checked reference to the cell at linear index `index`
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `index` is not below [`Band::len`].
    pub fn at(&self, index: usize) -> Result<&T> {
        self.data.get(index).ok_or_else(|| index_error(index, self.data.len()))
    }

    /// Checked mutable reference to the cell at linear index `index`
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `index` is not below [`Band::len`].
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.data.len();
        self.data.get_mut(index).ok_or_else(|| index_error(index, len))
    }

    /// First cell
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the band is empty.
    pub fn front(&self) -> Result<&T> {
        self.data.first().ok_or_else(Self::empty_error)
    }

    /// Mutable first cell
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the band is empty.
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.data.first_mut().ok_or_else(Self::empty_error)
    }

    /// Last cell
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the band is empty.
    pub fn back(&self) -> Result<&T> {
        self.data.last().ok_or_else(Self::empty_error)
    }

    /// Mutable last cell
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the band is empty.
    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.data.last_mut().ok_or_else(Self::empty_error)
    }

    /// Read-only view of row `row`, for `band.row(r)?.get(c)` access.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `row` is not below the height.
    pub fn row(&self, row: usize) -> Result<Row<'_, T>> {
        self.check_row(row)?;
        Ok(Row::new(self, row))
    }

    /// Mutable view of row `row`
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `row` is not below the height.
    pub fn row_mut(&mut self, row: usize) -> Result<RowMut<'_, T>> {
        self.check_row(row)?;
        Ok(RowMut::new(self, row))
    }

    /// All cells in row-major order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// All cells in row-major order, mutable
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterates cells in row-major order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterates cells mutably in row-major order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Sentinel marking cells without an observation
    pub fn nodata_value(&self) -> T {
        self.nodata
    }

    /// Replaces the nodata sentinel
    pub fn set_nodata_value(&mut self, nodata: T) {
        self.nodata = nodata;
    }

    /// Converts `nodata` into `T` and uses it as the sentinel
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if the value does not fit; the
    /// previous sentinel is kept.
    pub fn set_nodata_value_from<U: Numeric>(&mut self, nodata: U) -> Result<()> {
        self.nodata = convert(nodata, false)?;
        Ok(())
    }

    /// Whether `value` equals the nodata sentinel (NaN matches NaN)
    pub fn is_nodata(&self, value: T) -> bool {
        value.is_same(self.nodata)
    }

    /// Origin, cell size and spatial reference
    pub fn georeference(&self) -> &Georeference {
        &self.georef
    }

    /// Replaces all georeferencing metadata
    pub fn set_georeference(&mut self, georef: Georeference) {
        self.georef = georef;
    }

    /// X of the upper-left corner (the origin)
    pub fn upper_left_x(&self) -> f64 {
        self.georef.origin_x()
    }

    /// Y of the upper-left corner (the origin)
    pub fn upper_left_y(&self) -> f64 {
        self.georef.origin_y()
    }

    /// X of the upper-right corner
    pub fn upper_right_x(&self) -> f64 {
        self.georef.upper_right_x(self.width)
    }

    /// Y of the upper-right corner
    pub fn upper_right_y(&self) -> f64 {
        self.georef.upper_right_y()
    }

    /// X of the lower-left corner
    pub fn lower_left_x(&self) -> f64 {
        self.georef.lower_left_x()
    }

    /// Y of the lower-left corner
    pub fn lower_left_y(&self) -> f64 {
        self.georef.lower_left_y(self.height)
    }

    /// Moves the upper-left corner
    pub fn set_origin(&mut self, x: f64, y: f64) {
        self.georef.set_origin(x, y);
    }

    /// Spatial reference identifier (EPSG code)
    pub fn spatial_reference_id(&self) -> i32 {
        self.georef.spatial_reference_id()
    }

    /// Sets the spatial reference identifier
    pub fn set_spatial_reference_id(&mut self, srid: i32) {
        self.georef.set_spatial_reference_id(srid);
    }

    /// Cell width
    pub fn scale_x(&self) -> f64 {
        self.georef.scale_x()
    }

    /// Sets the cell width
    pub fn set_scale_x(&mut self, val: f64) {
        self.georef.set_scale_x(val);
    }

    /// Cell height; never positive
    pub fn scale_y(&self) -> f64 {
        self.georef.scale_y()
    }

    /// Sets the cell height; positive values are negated
    pub fn set_scale_y(&mut self, val: f64) {
        self.georef.set_scale_y(val);
    }

    /// Uses `val` as both cell width and cell height
    pub fn set_scale(&mut self, val: f64) {
        self.georef.set_scale(val);
    }

    /// Sets cell width and height separately
    pub fn set_scale_xy(&mut self, x: f64, y: f64) {
        self.georef.set_scale_xy(x, y);
    }

    /// Row rotation, always zero
    pub fn skew_x(&self) -> f64 {
        Georeference::SKEW_X
    }

    /// Column rotation, always zero
    pub fn skew_y(&self) -> f64 {
        Georeference::SKEW_Y
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if !self.in_row_bounds(row) {
            return Err(Error::OutOfBounds(format!(
                "Row {} outside band height {}",
                row, self.height
            )));
        }
        Ok(())
    }

    fn empty_error() -> Error {
        Error::OutOfBounds("Band is empty".to_string())
    }
}

fn index_error(index: usize, len: usize) -> Error {
    Error::OutOfBounds(format!("Index {} exceeds band length {}", index, len))
}

/// Empty 0 x 0 band using `T::lowest()` as nodata
impl<T: Numeric> Default for Band<T> {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            georef: Georeference::default(),
            nodata: T::lowest(),
            data: Vec::new(),
        }
    }
}

/// Unchecked `(row, col)` access; panics if the position lies past the stored cells
impl<T: Numeric> Index<(usize, usize)> for Band<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.width + col]
    }
}

impl<T: Numeric> IndexMut<(usize, usize)> for Band<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.width + col]
    }
}

impl<T: Numeric> IntoIterator for Band<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T: Numeric> IntoIterator for &'a Band<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T: Numeric> IntoIterator for &'a mut Band<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}
