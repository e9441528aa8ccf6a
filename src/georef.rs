//! Georeferencing metadata carried by bands
//!
//! The values are stored and returned verbatim; no coordinate reference
//! system is ever parsed or validated. Skew is fixed at zero, so corners
//! follow directly from the origin and the cell size.

use crate::types::Dimensions;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Origin, cell size and reference system id of a grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Georeference {
    origin_x: f64,
    origin_y: f64,
    scale_x: f64,
    #[serde(deserialize_with = "non_positive")]
    scale_y: f64,
    spatial_reference_id: i32,
}

impl Georeference {
    /// Skew along the x axis; always zero
    pub const SKEW_X: f64 = 0.0;
    /// Skew along the y axis; always zero
    pub const SKEW_Y: f64 = 0.0;

    /// Creates a georeference with the given upper-left origin and cell size
    pub fn new(origin_x: f64, origin_y: f64, scale_x: f64, scale_y: f64) -> Self {
        let mut georef = Self::default();
        georef.set_origin(origin_x, origin_y);
        georef.set_scale_xy(scale_x, scale_y);
        georef
    }

    /// Upper-left x coordinate
    pub fn origin_x(&self) -> f64 {
        self.origin_x
    }

    /// Upper-left y coordinate
    pub fn origin_y(&self) -> f64 {
        self.origin_y
    }

    /// Moves the upper-left corner
    pub fn set_origin(&mut self, x: f64, y: f64) {
        self.origin_x = x;
        self.origin_y = y;
    }

    /// Cell width
    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    /// Sets the cell width
    pub fn set_scale_x(&mut self, val: f64) {
        self.scale_x = val;
    }

    /// Cell height, never positive (rows grow downwards on a north-up grid)
    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    /// Sets the cell height; a positive value is stored negated
    pub fn set_scale_y(&mut self, val: f64) {
        self.scale_y = negated_if_positive(val);
    }

    /// Sets both cell dimensions to `val`
    pub fn set_scale(&mut self, val: f64) {
        self.set_scale_xy(val, val);
    }

    /// Sets cell width and height separately
    pub fn set_scale_xy(&mut self, x: f64, y: f64) {
        self.set_scale_x(x);
        self.set_scale_y(y);
    }

    /// Opaque reference system identifier
    pub fn spatial_reference_id(&self) -> i32 {
        self.spatial_reference_id
    }

    /// Sets the reference system identifier
    pub fn set_spatial_reference_id(&mut self, srid: i32) {
        self.spatial_reference_id = srid;
    }

    /// Upper-right x coordinate for a grid `width` cells wide
    pub fn upper_right_x(&self, width: usize) -> f64 {
        self.origin_x + self.scale_x * width as f64
    }

    /// Upper-right y coordinate; same as the origin
    pub fn upper_right_y(&self) -> f64 {
        self.origin_y
    }

    /// Lower-left x coordinate; same as the origin
    pub fn lower_left_x(&self) -> f64 {
        self.origin_x
    }

    /// Lower-left y coordinate for a grid `height` cells tall
    pub fn lower_left_y(&self, height: usize) -> f64 {
        self.origin_y + self.scale_y() * height as f64
    }

    /// Computes the affine transform from cell to world coordinates
    ///
    /// Returns [a, b, c, d, e, f] where:
    /// world_x = a + b * col + c * row
    /// world_y = d + e * col + f * row
    pub fn affine_transform(&self) -> [f64; 6] {
        [
            self.origin_x,
            self.scale_x,
            Self::SKEW_X,
            self.origin_y,
            Self::SKEW_Y,
            self.scale_y(),
        ]
    }

    /// Computes the bounding box of a grid with the given dimensions
    ///
    /// Returns (min_x, min_y, max_x, max_y)
    pub fn bounding_box(&self, dims: Dimensions) -> (f64, f64, f64, f64) {
        let left = self.lower_left_x();
        let right = self.upper_right_x(dims.width);
        let top = self.origin_y;
        let bottom = self.lower_left_y(dims.height);

        (left.min(right), bottom.min(top), left.max(right), bottom.max(top))
    }
}

fn negated_if_positive(val: f64) -> f64 {
    if val > 0.0 {
        -val
    } else {
        val
    }
}

fn non_positive<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    f64::deserialize(deserializer).map(negated_if_positive)
}

impl fmt::Display for Georeference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Georeference:")?;
        writeln!(f, "  SRID: {}", self.spatial_reference_id)?;
        writeln!(f, "  Origin: ({}, {})", self.origin_x, self.origin_y)?;
        writeln!(f, "  Cell Size: {} x {}", self.scale_x, self.scale_y())
    }
}
