//! gridband - Typed raster bands with nodata-aware statistics
//!
//! gridband stores a single layer of gridded numbers as a [`Band`], carrying
//! a nodata sentinel and georeferencing metadata, and bundles same-extent
//! bands of different element types into a [`Raster`]. Values crossing
//! element types are range-checked by [`convert`].
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use gridband::Band;
//!
//! let mut band = Band::<i32>::new(20, 20, 6, 7)?;
//! band[(0, 0)] = 6;
//! band[(0, 1)] = 8;
//! band.scale_multiply(3.4)?;
//!
//! assert_eq!(band.count(), 399);
//! assert_eq!(band.max(), Some(24));
//! println!("mean: {}", band.avg()?);
//! # Ok::<(), gridband::Error>(())
//! ```
//!
//! ## Bands of Different Types
//!
//! ```
//! use gridband::{Band, Raster};
//!
//! let raster = Raster::new((
//!     Band::<f32>::new(20, 20, 3.0, 6.765)?,
//!     Band::<u8>::new(20, 20, 0, 40.501)?,
//! ))?;
//!
//! assert_eq!(raster.band::<1>()[(0, 10)], 41);
//! let widened: Band<f64> = raster.band::<1>().cast(false)?;
//! assert_eq!(widened.sum(), 41.0 * 400.0);
//! # Ok::<(), gridband::Error>(())
//! ```

pub mod error;
pub mod types;
pub mod numeric;
pub mod georef;
pub mod band;
pub mod raster;
pub mod config;

pub use error::{Bound, Error, Result};
pub use types::{DataType, Dimensions};
pub use numeric::{convert, Numeric};
pub use georef::Georeference;
pub use band::{Band, BandStats, Row, RowMut};
pub use raster::{BandAt, BandFactory, BandSet, Raster};
pub use config::{BandConfig, RasterConfig};
