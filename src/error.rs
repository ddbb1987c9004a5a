//! Error type of the crate.
//!
//! Every variant is an invalid-argument failure raised while
//! constructing a [`Palette`](crate::Palette),
//! [`DensePalette`](crate::DensePalette) or [`ColorMap`](crate::ColorMap).
//! Once constructed, none of these values can fail.

use thiserror::Error;

use crate::PALETTE_COLORS;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorMapError {
    /// Neither a palette name nor custom colors were given.
    #[error("Invalid argument: palette name should not be missing")]
    MissingName,

    /// The requested number of colormap colors is out of range.
    #[error("Invalid argument: number of colors should be in range \
             [2, {}], got {count}", PALETTE_COLORS)]
    ColorCount { count: usize },

    /// The domain is empty, reversed or not finite.
    #[error("Invalid argument: upper bound ({upper}) should be greater \
             than the lower one ({lower})")]
    Range { lower: f64, upper: f64 },

    /// No control colors or no positions.
    #[error("Invalid argument: collections of colors and positions \
             should not be empty")]
    EmptyPalette,

    #[error("Invalid argument: number of colors ({colors}) should be the \
             same as the number of color positions ({positions})")]
    LengthMismatch { colors: usize, positions: usize },

    /// A palette needs between 2 and 256 control colors.
    #[error("Invalid argument: number of palette colors should be in \
             range [2, {}], got {count}", PALETTE_COLORS)]
    ControlCount { count: usize },

    #[error("Invalid argument: color #{index} has {len} channels, \
             expected 3")]
    Channels { index: usize, len: usize },

    #[error("Invalid argument: first color position should be 0 and last \
             position should be 1, got {first} and {last}")]
    Endpoints { first: f64, last: f64 },

    /// A position is smaller than its predecessor (or NaN).
    #[error("Invalid argument: color positions should be non-decreasing, \
             position #{index} is {position}")]
    Unordered { index: usize, position: f64 },
}

/// Convenience type alias for results of colormap construction.
pub type Result<T> = std::result::Result<T, ColorMapError>;
