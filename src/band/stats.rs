//! Nodata-aware reductions over band cells

use super::Band;
use crate::error::{Error, Result};
use crate::numeric::Numeric;
use serde::Serialize;

/// Summary of a band's data cells
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandStats<T> {
    /// Number of cells not equal to nodata
    pub count: usize,
    /// Smallest data value; `None` without data cells
    pub min: Option<T>,
    /// Largest data value; `None` without data cells
    pub max: Option<T>,
    /// Sum of data values
    pub sum: T,
    /// Mean of data values; `None` without data cells
    pub mean: Option<f64>,
}

impl<T: Numeric> Band<T> {
    /// Number of cells not equal to the nodata value
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| !self.is_nodata(v)).count()
    }

    /// Smallest cell, ranking nodata cells above every other value.
    ///
    /// Returns a nodata cell when the band holds nothing else and `None`
    /// when the band is empty. The first of several equal minima wins.
    pub fn min(&self) -> Option<T> {
        let mut cells = self.data.iter().copied();
        let first = cells.next()?;
        Some(cells.fold(first, |best, v| if self.ranks_below(v, best) { v } else { best }))
    }

    /// Largest cell, ranking nodata cells below every other value.
    ///
    /// Returns a nodata cell when the band holds nothing else and `None`
    /// when the band is empty. The first of several equal maxima wins.
    pub fn max(&self) -> Option<T> {
        let mut cells = self.data.iter().copied();
        let first = cells.next()?;
        Some(cells.fold(first, |best, v| if self.ranks_above(v, best) { v } else { best }))
    }

    /// Sum of all data cells; integer overflow wraps
    pub fn sum(&self) -> T {
        self.data
            .iter()
            .filter(|&&v| !self.is_nodata(v))
            .fold(T::zero(), |acc, &v| acc.accumulate(v))
    }

    /// Mean of all data cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Undefined`] when the band has no data cells.
    pub fn avg(&self) -> Result<f64> {
        let count = self.count();
        if count == 0 {
            return Err(Error::Undefined(format!(
                "mean of a band without data cells ({} cells, all nodata)",
                self.data.len()
            )));
        }
        Ok(self.sum().as_f64() / count as f64)
    }

    /// Count, extremes, sum and mean in one value
    pub fn stats(&self) -> BandStats<T> {
        let count = self.count();
        let has_data = count > 0;

        BandStats {
            count,
            min: self.min().filter(|_| has_data),
            max: self.max().filter(|_| has_data),
            sum: self.sum(),
            mean: self.avg().ok(),
        }
    }

    fn ranks_below(&self, lhs: T, rhs: T) -> bool {
        if self.is_nodata(lhs) {
            return false;
        }
        if self.is_nodata(rhs) {
            return true;
        }
        lhs < rhs
    }

    fn ranks_above(&self, lhs: T, rhs: T) -> bool {
        if self.is_nodata(lhs) {
            return false;
        }
        if self.is_nodata(rhs) {
            return true;
        }
        lhs > rhs
    }
}
