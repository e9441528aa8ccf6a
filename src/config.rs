//! JSON description of a raster layout
//!
//! ```json
//! {
//!   "width": 20,
//!   "height": 20,
//!   "georeference": { "origin_x": 500000.0, "origin_y": 4100000.0, "scale_x": 30.0, "scale_y": 30.0 },
//!   "bands": [
//!     { "nodata": 6, "fill": 7 },
//!     { "nodata": -9999.0, "clamp": true }
//!   ]
//! }
//! ```
//!
//! Values are given as `f64` and converted into each band's element type
//! when the band is built.

use crate::band::Band;
use crate::error::{Error, Result};
use crate::georef::Georeference;
use crate::numeric::{convert, Numeric};
use crate::raster::{BandFactory, BandSet, Raster};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Nodata and fill values for one band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandConfig {
    /// Nodata sentinel
    pub nodata: f64,
    /// Initial cell value; defaults to the nodata value
    #[serde(default)]
    pub fill: Option<f64>,
    /// Saturate values the element type cannot hold instead of failing
    #[serde(default)]
    pub clamp: bool,
}

/// Extent, georeferencing and per-band values of a raster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterConfig {
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub georeference: Georeference,
    pub bands: Vec<BandConfig>,
}

impl RasterConfig {
    /// Parses a layout from JSON text
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the text is not a valid layout.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        debug!(
            "Parsed raster layout: {}x{} with {} band(s)",
            config.width,
            config.height,
            config.bands.len()
        );
        Ok(config)
    }

    /// Reads and parses a layout file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read or [`Error::Json`]
    /// if its content is not a valid layout.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading raster layout from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Settings for band `index`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the layout has no such band.
    pub fn band_config(&self, index: usize) -> Result<&BandConfig> {
        self.bands.get(index).ok_or_else(|| {
            Error::InvalidConfiguration(format!(
                "No band {} in layout with {} band(s)",
                index,
                self.bands.len()
            ))
        })
    }

    /// Builds band `index` with element type `T`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for a missing band or an
    /// extent with more cells than `usize` can count, or
    /// [`Error::ValueOutOfRange`] if a value does not fit in `T` and the
    /// band does not ask for clamping.
    pub fn build_band<T: Numeric>(&self, index: usize) -> Result<Band<T>> {
        let settings = self.band_config(index)?;
        let nodata: T = convert(settings.nodata, settings.clamp)?;
        let fill: T = convert(settings.fill.unwrap_or(settings.nodata), settings.clamp)?;

        let mut band = Band::filled(self.width, self.height, nodata, fill)?;
        band.set_georeference(self.georeference);

        debug!(
            "Built band {} as {}: nodata={}, fill={}",
            index,
            T::DATA_TYPE,
            nodata,
            fill
        );
        Ok(band)
    }

    /// Builds a raster whose band types are given by `B`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the layout's band count
    /// differs from `B`'s, or any error from [`RasterConfig::build_band`].
    pub fn build<B: BandSet>(&self) -> Result<Raster<B>> {
        if self.bands.len() != B::LEN {
            return Err(Error::InvalidConfiguration(format!(
                "Layout has {} band(s), raster expects {}",
                self.bands.len(),
                B::LEN
            )));
        }
        Raster::build(self)
    }
}

impl BandFactory for RasterConfig {
    fn make_band<T: Numeric>(&self, index: usize) -> Result<Band<T>> {
        self.build_band(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const LAYOUT: &str = r#"{
        "width": 20,
        "height": 20,
        "georeference": { "origin_x": 100.0, "origin_y": 200.0, "scale_x": 30.0, "scale_y": 30.0, "spatial_reference_id": 32633 },
        "bands": [
            { "nodata": 6, "fill": 7 },
            { "nodata": -9999.0, "fill": 1.25 },
            { "nodata": -1, "clamp": true }
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let config = RasterConfig::from_json(LAYOUT).unwrap();
        assert_eq!(config.width, 20);
        assert_eq!(config.bands.len(), 3);
        assert_eq!(config.bands[0].fill, Some(7.0));
        assert!(config.bands[2].clamp);
        assert_eq!(config.georeference.scale_y(), -30.0);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(RasterConfig::from_json("{\"width\": 3"), Err(Error::Json(_))));
        assert!(RasterConfig::from_json(r#"{"width": 3, "height": 3}"#).is_err());
    }

    #[test]
    fn test_build_band_converts() {
        let config = RasterConfig::from_json(LAYOUT).unwrap();

        let band = config.build_band::<i32>(0).unwrap();
        assert_eq!(band.nodata_value(), 6);
        assert_eq!(band[(0, 10)], 7);
        assert_eq!(band.spatial_reference_id(), 32633);
        assert_eq!(band.upper_right_x(), 700.0);

        let band = config.build_band::<u8>(2).unwrap();
        assert_eq!(band.nodata_value(), 0);

        assert!(config.build_band::<u8>(1).is_err());
        assert!(matches!(
            config.build_band::<f32>(3),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_build_raster() {
        let config = RasterConfig::from_json(LAYOUT).unwrap();
        let raster = config.build::<(Band<i32>, Band<f32>, Band<u8>)>().unwrap();
        assert_eq!(raster.dimensions().cell_count().unwrap(), 400);
        assert_eq!(raster.band::<1>()[(19, 19)], 1.25);
        assert_eq!(raster.band::<1>().count(), 400);

        assert!(config.build::<(Band<i32>, Band<f32>)>().is_err());
    }

    #[test]
    fn test_oversized_extent_is_rejected() {
        let side = 1u64 << (usize::BITS / 2);
        let text = format!(
            r#"{{"width": {side}, "height": {side}, "bands": [{{"nodata": 0}}]}}"#
        );
        let config = RasterConfig::from_json(&text).unwrap();
        assert!(matches!(
            config.build_band::<u8>(0),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(config.build::<(Band<u8>,)>().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(LAYOUT.as_bytes()).unwrap();

        let config = RasterConfig::load(file.path()).unwrap();
        assert_eq!(config.height, 20);
        assert!(matches!(
            RasterConfig::load("/nonexistent/layout.json"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_round_trip_serialization() {
        let config = RasterConfig::from_json(LAYOUT).unwrap();
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(RasterConfig::from_json(&text).unwrap(), config);
    }
}
