//! Map scalar values to colors.
//!
//! - [`ColorMap`]: binds a palette to a domain \[`lower`, `upper`\] and
//!   a number of colors, and returns the color of any value.
//! - [`Palette`]: control colors at positions in \[0, 1\], either one of
//!   the matplotlib reference palettes (see [`names`] and [`lookup`]) or
//!   user-defined.
//! - [`DensePalette`]: the expansion of a palette into
//!   [`PALETTE_COLORS`] colors by linear interpolation.
//! - [`Decorator`]s derive new colormaps: [`Mirror`] and [`Grayscale`].
//!
//! Colors are [`RGB8`](rgb::RGB8) values from the [`rgb`] crate.
//!
//! # Example
//!
//! ```
//! use sci_colormaps::{ColorMap, GrayScaleOptions};
//! let cmap = ColorMap::new("coolwarm", -0.5, 0.5, 256)?;
//! let c = cmap.get(0.3);
//! let viridis = ColorMap::default();
//! let gray = viridis.grayscale(GrayScaleOptions::Luminosity);
//! assert!(gray.colors().all(|c| c.r == c.g && c.g == c.b));
//! # Ok::<(), sci_colormaps::ColorMapError>(())
//! ```
//!
//! Unknown palette names are not an error: they resolve to
//! [`DEFAULT_PALETTE`].
//!
//! ```
//! let cmap = sci_colormaps::ColorMap::new("no-such-palette", 0., 1., 16)?;
//! assert_eq!(cmap.palette_name(), "viridis");
//! # Ok::<(), sci_colormaps::ColorMapError>(())
//! ```

mod colormap;
mod decorator;
mod dense;
mod error;
mod palettes;

pub use colormap::{ColorMap, ColorMapBuilder, ColorMapConfig, Colors,
                   USER_PALETTE};
pub use decorator::{Decorator, GrayScaleOptions, Grayscale, Mirror,
                    ParseGrayScaleError};
pub use dense::DensePalette;
pub use error::{ColorMapError, Result};
pub use palettes::{lookup, names, Palette, DEFAULT_PALETTE};

/// Number of colors of a [`DensePalette`].
pub const PALETTE_COLORS: usize = 256;
