//! Colormaps derived from other colormaps.
//!
//! A [`Decorator`] transforms the dense palette of a colormap into a
//! new one.  The source colormap is left untouched and the resulting
//! [`ColorMap`] keeps its name, domain and number of colors.  Since
//! the result is an ordinary `ColorMap`, decorators compose:
//!
//! ```
//! use sci_colormaps::{ColorMap, GrayScaleOptions};
//! let cmap = ColorMap::new("ocean", 0., 10., 64)?;
//! let gray = cmap.mirrored().grayscale(GrayScaleOptions::Average);
//! assert_eq!(gray.get(0.), gray.get(-1.));
//! assert_eq!(cmap.palette_name(), gray.palette_name());
//! # Ok::<(), sci_colormaps::ColorMapError>(())
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use rgb::RGB8;
use tracing::trace;

use crate::colormap::ColorMap;
use crate::dense::DensePalette;

/// A transform of dense palettes.
pub trait Decorator {
    /// Returns the transform of `palette`, which must not be modified.
    fn transform(&self, palette: &DensePalette) -> DensePalette;
}

/// Reverses the order of the colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mirror;

impl Decorator for Mirror {
    fn transform(&self, palette: &DensePalette) -> DensePalette {
        palette.reversed()
    }
}

/// Formula converting a color to a gray level (as in the desaturate
/// tool of GIMP).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GrayScaleOptions {
    /// `0.21 R + 0.72 G + 0.07 B`, matching the perceived brightness.
    #[default]
    Luminosity,
    /// `(max(R, G, B) + min(R, G, B)) / 2`.
    Lightness,
    /// `(R + G + B) / 3`.
    Average,
}

impl GrayScaleOptions {
    /// All options, useful for UI pickers.
    pub const ALL: &'static [GrayScaleOptions] =
        &[Self::Luminosity, Self::Lightness, Self::Average];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Luminosity => "luminosity",
            Self::Lightness => "lightness",
            Self::Average => "average",
        }
    }

    /// Return the gray level of `c`, rounded to the nearest integer.
    pub fn gray(&self, c: RGB8) -> u8 {
        let (r, g, b) = (c.r as f64, c.g as f64, c.b as f64);
        let x = match self {
            Self::Luminosity => 0.21 * r + 0.72 * g + 0.07 * b,
            Self::Lightness => {
                let max = c.r.max(c.g).max(c.b) as f64;
                let min = c.r.min(c.g).min(c.b) as f64;
                (max + min) / 2.
            }
            Self::Average => (r + g + b) / 3.,
        };
        x.round() as u8
    }
}

impl fmt::Display for GrayScaleOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`GrayScaleOptions`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown grayscale option \"{0}\" \
         (expected luminosity, lightness or average)")]
pub struct ParseGrayScaleError(String);

impl FromStr for GrayScaleOptions {
    type Err = ParseGrayScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL.iter().copied()
            .find(|o| o.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseGrayScaleError(s.to_owned()))
    }
}

/// Converts all colors to gray.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Grayscale(pub GrayScaleOptions);

impl Decorator for Grayscale {
    fn transform(&self, palette: &DensePalette) -> DensePalette {
        let options = self.0;
        palette.map(|c| {
            let x = options.gray(c);
            RGB8 { r: x, g: x, b: x }
        })
    }
}

impl ColorMap {
    /// Return a new colormap whose dense palette is the transform of
    /// this one by `decorator`.
    pub fn decorate(&self, decorator: &impl Decorator) -> ColorMap {
        let dense = decorator.transform(self.dense_palette());
        trace!(palette = self.palette_name(), "derived colormap");
        ColorMap::with_dense(Cow::Owned(self.palette_name().to_owned()),
                             Cow::Owned(dense), self.config())
    }

    /// Return the colormap with colors in reverse order.
    pub fn mirrored(&self) -> ColorMap { self.decorate(&Mirror) }

    /// Return the colormap converted to grayscale with `options`.
    pub fn grayscale(&self, options: GrayScaleOptions) -> ColorMap {
        self.decorate(&Grayscale(options))
    }
}
