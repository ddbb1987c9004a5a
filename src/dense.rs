//! Full resolution palettes.

use std::ops::Index;
use rgb::RGB8;
use crate::PALETTE_COLORS;
use crate::error::{ColorMapError, Result};

/// The expansion of a palette into exactly [`PALETTE_COLORS`] colors.
///
/// A dense palette is never modified in place: transforms such as
/// [`DensePalette::reversed`] return a freshly allocated table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DensePalette {
    rgb: [RGB8; PALETTE_COLORS],
}

/// Check that `positions` can carry `colors` control colors.
pub(crate) fn check(colors: usize, positions: &[f64]) -> Result<()> {
    use ColorMapError::*;
    if colors == 0 || positions.is_empty() {
        return Err(EmptyPalette)
    }
    if colors != positions.len() {
        return Err(LengthMismatch { colors, positions: positions.len() })
    }
    if !(2 ..= PALETTE_COLORS).contains(&colors) {
        return Err(ControlCount { count: colors })
    }
    let first = positions[0];
    let last = positions[positions.len() - 1];
    if first != 0. || last != 1. {
        return Err(Endpoints { first, last })
    }
    // `!(a <= b)` also rejects NaN.
    if let Some(i) = positions.windows(2).position(|p| !(p[0] <= p[1])) {
        return Err(Unordered { index: i + 1, position: positions[i + 1] })
    }
    Ok(())
}

/// Index of the first dense entry owned by a control point at `pos`.
#[inline]
fn breakpoint(pos: f64) -> usize {
    ((pos * PALETTE_COLORS as f64) as usize).min(PALETTE_COLORS)
}

impl DensePalette {
    /// Expand the control colors `colors`, placed at `positions` in
    /// \[0, 1\], into a dense palette by linear interpolation of each
    /// RGB channel between adjacent control points.
    ///
    /// Positions must start at `0.`, end at `1.` and never decrease.
    /// Equal adjacent positions produce a sharp step between the two
    /// colors.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use sci_colormaps::DensePalette;
    /// let black = RGB8::new(0, 0, 0);
    /// let white = RGB8::new(255, 255, 255);
    /// let dense = DensePalette::build(&[black, white], &[0., 1.]).unwrap();
    /// assert_eq!(dense[0], black);
    /// assert_eq!(dense[255], white);
    /// ```
    pub fn build(colors: &[RGB8], positions: &[f64]) -> Result<Self> {
        check(colors.len(), positions)?;
        Ok(Self::interpolate(colors, positions))
    }

    /// Same as [`DensePalette::build`] without validation.  The caller
    /// guarantees that `check(colors.len(), positions)` holds.
    pub(crate) fn interpolate(colors: &[RGB8], positions: &[f64]) -> Self {
        let mut rgb = [RGB8::new(0, 0, 0); PALETTE_COLORS];
        for (c, p) in colors.windows(2).zip(positions.windows(2)) {
            let (b0, b1) = (breakpoint(p[0]), breakpoint(p[1]));
            if b1 <= b0 { continue }
            let size = (b1 - b0) as f64;
            for (j, slot) in rgb[b0 .. b1].iter_mut().enumerate() {
                *slot = lerp(c[0], c[1], j as f64, size);
            }
        }
        if let Some(&last) = colors.last() {
            rgb[PALETTE_COLORS - 1] = last;
        }
        Self { rgb }
    }

    /// Returns the colors of the palette, from first to last.
    #[inline]
    pub fn colors(&self) -> &[RGB8] { &self.rgb }

    /// Returns an iterator over the colors of the palette.
    pub fn iter(&self) -> std::slice::Iter<'_, RGB8> { self.rgb.iter() }

    /// Returns a new palette with the colors in reverse order.
    pub fn reversed(&self) -> Self {
        let mut rgb = self.rgb;
        rgb.reverse();
        Self { rgb }
    }

    /// Returns a new palette where each color is transformed by `f`.
    pub fn map(&self, f: impl FnMut(RGB8) -> RGB8) -> Self {
        Self { rgb: self.rgb.map(f) }
    }
}

impl Index<usize> for DensePalette {
    type Output = RGB8;

    #[inline]
    fn index(&self, i: usize) -> &RGB8 { &self.rgb[i] }
}

impl AsRef<[RGB8]> for DensePalette {
    fn as_ref(&self) -> &[RGB8] { &self.rgb }
}

impl<'a> IntoIterator for &'a DensePalette {
    type Item = &'a RGB8;
    type IntoIter = std::slice::Iter<'a, RGB8>;

    fn into_iter(self) -> Self::IntoIter { self.rgb.iter() }
}

/// Channel-wise `c0 + (c1 - c0) * j / size`, truncated.
#[inline]
fn lerp(c0: RGB8, c1: RGB8, j: f64, size: f64) -> RGB8 {
    let ch = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * j / size) as u8;
    RGB8 { r: ch(c0.r, c1.r), g: ch(c0.g, c1.g), b: ch(c0.b, c1.b) }
}
