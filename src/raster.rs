//! Fixed-arity collections of same-extent bands
//!
//! A raster bundles one to six bands whose element types are chosen
//! independently, stored as a tuple such as `(Band<f32>, Band<i32>)`.
//! Bands are addressed by position with `raster.band::<N>()`, which is
//! resolved at compile time.

use crate::band::Band;
use crate::error::{Error, Result};
use crate::numeric::Numeric;
use crate::types::Dimensions;

/// Source of per-position bands used by [`Raster::build`]
pub trait BandFactory {
    /// Produces the band for position `index`
    ///
    /// # Errors
    ///
    /// Implementations report why the band could not be produced.
    fn make_band<T: Numeric>(&self, index: usize) -> Result<Band<T>>;
}

/// Tuple of bands usable as raster storage
pub trait BandSet: Sized {
    /// One element value per band, e.g. `(f32, i32)`
    type Values;

    /// Number of bands
    const LEN: usize;

    /// Dimensions of each band, in position order
    fn dimensions(&self) -> Vec<Dimensions>;

    /// Bands of the given extent using each type's lowest value as nodata
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for an oversized extent.
    fn sized(width: usize, height: usize) -> Result<Self>;

    /// Bands of the given extent with per-band nodata and fill values
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for an oversized extent.
    fn filled(width: usize, height: usize, nodatas: Self::Values, fills: Self::Values) -> Result<Self>;

    /// Bands produced by `factory`, position by position
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the factory.
    fn build<F: BandFactory>(factory: &F) -> Result<Self>;
}

/// Typed access to the band at position `N`
pub trait BandAt<const N: usize>: BandSet {
    /// Element type of the band at `N`
    type Elem: Numeric;

    fn band_at(&self) -> &Band<Self::Elem>;

    fn band_at_mut(&mut self) -> &mut Band<Self::Elem>;
}

macro_rules! impl_band_set {
    ($len:expr; $($T:ident => $idx:tt),+) => {
        impl<$($T: Numeric),+> BandSet for ($(Band<$T>,)+) {
            type Values = ($($T,)+);

            const LEN: usize = $len;

            fn dimensions(&self) -> Vec<Dimensions> {
                vec![$(self.$idx.dimensions()),+]
            }

            fn sized(width: usize, height: usize) -> Result<Self> {
                Ok(($(Band::<$T>::with_size(width, height)?,)+))
            }

            fn filled(width: usize, height: usize, nodatas: Self::Values, fills: Self::Values) -> Result<Self> {
                Ok(($(Band::<$T>::filled(width, height, nodatas.$idx, fills.$idx)?,)+))
            }

            fn build<F: BandFactory>(factory: &F) -> Result<Self> {
                Ok(($(factory.make_band::<$T>($idx)?,)+))
            }
        }
    };
}

macro_rules! impl_band_at {
    ($idx:tt => $Elem:ident; $($T:ident),+) => {
        impl<$($T: Numeric),+> BandAt<$idx> for ($(Band<$T>,)+) {
            type Elem = $Elem;

            fn band_at(&self) -> &Band<$Elem> {
                &self.$idx
            }

            fn band_at_mut(&mut self) -> &mut Band<$Elem> {
                &mut self.$idx
            }
        }
    };
}

impl_band_set!(1; T0 => 0);
impl_band_set!(2; T0 => 0, T1 => 1);
impl_band_set!(3; T0 => 0, T1 => 1, T2 => 2);
impl_band_set!(4; T0 => 0, T1 => 1, T2 => 2, T3 => 3);
impl_band_set!(5; T0 => 0, T1 => 1, T2 => 2, T3 => 3, T4 => 4);
impl_band_set!(6; T0 => 0, T1 => 1, T2 => 2, T3 => 3, T4 => 4, T5 => 5);

impl_band_at!(0 => T0; T0);

impl_band_at!(0 => T0; T0, T1);
impl_band_at!(1 => T1; T0, T1);

impl_band_at!(0 => T0; T0, T1, T2);
impl_band_at!(1 => T1; T0, T1, T2);
impl_band_at!(2 => T2; T0, T1, T2);

impl_band_at!(0 => T0; T0, T1, T2, T3);
impl_band_at!(1 => T1; T0, T1, T2, T3);
impl_band_at!(2 => T2; T0, T1, T2, T3);
impl_band_at!(3 => T3; T0, T1, T2, T3);

impl_band_at!(0 => T0; T0, T1, T2, T3, T4);
impl_band_at!(1 => T1; T0, T1, T2, T3, T4);
impl_band_at!(2 => T2; T0, T1, T2, T3, T4);
impl_band_at!(3 => T3; T0, T1, T2, T3, T4);
impl_band_at!(4 => T4; T0, T1, T2, T3, T4);

impl_band_at!(0 => T0; T0, T1, T2, T3, T4, T5);
impl_band_at!(1 => T1; T0, T1, T2, T3, T4, T5);
impl_band_at!(2 => T2; T0, T1, T2, T3, T4, T5);
impl_band_at!(3 => T3; T0, T1, T2, T3, T4, T5);
impl_band_at!(4 => T4; T0, T1, T2, T3, T4, T5);
impl_band_at!(5 => T5; T0, T1, T2, T3, T4, T5);

/// Bands sharing one width and height
#[derive(Debug, Clone, PartialEq)]
pub struct Raster<B: BandSet> {
    width: usize,
    height: usize,
    bands: B,
}

impl<B: BandSet> Raster<B> {
    /// Bundles `bands`, checking they all share the same extent
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if any band's width or height
    /// differs from the first band's.
    pub fn new(bands: B) -> Result<Self> {
        let dims = bands.dimensions();
        let expected = dims.first().copied().unwrap_or_default();

        if let Some((index, other)) = dims.iter().enumerate().find(|(_, d)| **d != expected) {
            return Err(Error::InvalidConfiguration(format!(
                "Band {} is {}, expected {} like band 0",
                index, other, expected
            )));
        }

        Ok(Self {
            width: expected.width,
            height: expected.height,
            bands,
        })
    }

    /// Raster whose bands use each type's lowest value as nodata and fill
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `width * height` overflows.
    pub fn with_size(width: usize, height: usize) -> Result<Self> {
        Ok(Self {
            width,
            height,
            bands: B::sized(width, height)?,
        })
    }

    /// Raster with per-band nodata and fill values, e.g.
    /// `Raster::<(Band<i32>, Band<f32>)>::filled(20, 20, (6, 7.2), (7, 8.3))`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `width * height` overflows.
    pub fn filled(width: usize, height: usize, nodatas: B::Values, fills: B::Values) -> Result<Self> {
        Ok(Self {
            width,
            height,
            bands: B::filled(width, height, nodatas, fills)?,
        })
    }

    /// Raster whose bands come from `factory`
    ///
    /// # Errors
    ///
    /// Returns the factory's error, or [`Error::InvalidConfiguration`] if
    /// the produced bands differ in extent.
    pub fn build<F: BandFactory>(factory: &F) -> Result<Self> {
        Self::new(B::build(factory)?)
    }

    /// Shared width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Shared height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// Shared extent
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Number of bands
    pub fn band_count(&self) -> usize {
        B::LEN
    }

    /// Band at position `N`
    pub fn band<const N: usize>(&self) -> &Band<<B as BandAt<N>>::Elem>
    where
        B: BandAt<N>,
    {
        self.bands.band_at()
    }

    /// Mutable band at position `N`.
    ///
    /// Replacing the band through this reference with one of another extent
    /// breaks the shared-extent guarantee; use [`Raster::replace_band`] for that.
    pub fn band_mut<const N: usize>(&mut self) -> &mut Band<<B as BandAt<N>>::Elem>
    where
        B: BandAt<N>,
    {
        self.bands.band_at_mut()
    }

    /// First band
    pub fn first(&self) -> &Band<<B as BandAt<0>>::Elem>
    where
        B: BandAt<0>,
    {
        self.band::<0>()
    }

    /// Swaps in `band` at position `N` and returns the previous band
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `band` does not match the
    /// raster's extent; the raster is left unchanged.
    pub fn replace_band<const N: usize>(
        &mut self,
        band: Band<<B as BandAt<N>>::Elem>,
    ) -> Result<Band<<B as BandAt<N>>::Elem>>
    where
        B: BandAt<N>,
    {
        if band.dimensions() != self.dimensions() {
            return Err(Error::InvalidConfiguration(format!(
                "Band is {}, raster is {}",
                band.dimensions(),
                self.dimensions()
            )));
        }
        Ok(std::mem::replace(self.bands.band_at_mut(), band))
    }

    /// Whether every band currently has the raster's extent
    pub fn same_size(&self) -> bool {
        let expected = self.dimensions();
        self.bands.dimensions().iter().all(|d| *d == expected)
    }

    /// The band tuple
    pub fn bands(&self) -> &B {
        &self.bands
    }

    /// Unwraps the raster into its band tuple
    pub fn into_bands(self) -> B {
        self.bands
    }
}

/// Raster of empty 0 x 0 bands
impl<B: BandSet + Default> Default for Raster<B> {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            bands: B::default(),
        }
    }
}
