//! Palettes and the registry of reference palettes.

use std::borrow::Cow;
use lazy_static::lazy_static;
use rgb::RGB8;
use tracing::{debug, trace};

use crate::dense::{self, DensePalette};
use crate::error::{ColorMapError, Result};

mod matplotlib;
pub(crate) mod ty;
use ty::PaletteData;

/// Name of the palette used when a requested name is unknown.
pub const DEFAULT_PALETTE: &str = "viridis";

/// A palette: an ordered sequence of control colors, each attached to
/// a position in \[0, 1\].
///
/// Invariants: there are between 2 and [`PALETTE_COLORS`] colors, as
/// many positions as colors, positions start at `0.`, end at `1.` and
/// never decrease.
///
/// [`PALETTE_COLORS`]: crate::PALETTE_COLORS
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    name: Cow<'static, str>,
    rgb: Vec<RGB8>,
    positions: Vec<f64>,
}

impl Palette {
    /// Create a palette from control `colors` placed at `positions`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use sci_colormaps::Palette;
    /// let colors = vec![RGB8::new(0, 0, 0), RGB8::new(192, 0, 0),
    ///                   RGB8::new(255, 224, 255)];
    /// let p = Palette::new("fire", colors, vec![0., 0.4, 1.]).unwrap();
    /// assert_eq!(p.len(), 3);
    /// ```
    pub fn new(name: impl Into<Cow<'static, str>>,
               colors: Vec<RGB8>, positions: Vec<f64>) -> Result<Self> {
        dense::check(colors.len(), &positions)?;
        Ok(Palette { name: name.into(), rgb: colors, positions })
    }

    /// Create a palette from colors given as byte slices `[r, g, b]`.
    /// Fails with [`ColorMapError::Channels`] if a color does not have
    /// exactly 3 bytes.
    pub fn from_bytes<B: AsRef<[u8]>>(name: impl Into<Cow<'static, str>>,
                                      colors: &[B], positions: &[f64])
                                      -> Result<Self> {
        dense::check(colors.len(), positions)?;
        let rgb = colors.iter().enumerate()
            .map(|(index, c)| match c.as_ref() {
                &[r, g, b] => Ok(RGB8 { r, g, b }),
                c => Err(ColorMapError::Channels { index, len: c.len() }),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Palette { name: name.into(), rgb, positions: positions.to_vec() })
    }

    /// Create a palette whose `colors` are evenly spread over \[0, 1\].
    pub fn uniform(name: impl Into<Cow<'static, str>>,
                   colors: Vec<RGB8>) -> Result<Self> {
        let positions = uniform_positions(colors.len());
        Self::new(name, colors, positions)
    }

    fn from_data(data: &'static PaletteData) -> Self {
        let rgb: Vec<RGB8> = data.rgb.iter()
            .map(|&[r, g, b]| RGB8 { r, g, b }).collect();
        Palette { name: Cow::Borrowed(data.name),
                  positions: uniform_positions(rgb.len()),
                  rgb }
    }

    /// Returns the name of the palette.
    pub fn name(&self) -> &str { &self.name }

    /// Returns the number of control colors (at least 2).
    pub fn len(&self) -> usize { self.rgb.len() }

    /// Always `false`: a palette has at least 2 control colors.
    pub fn is_empty(&self) -> bool { self.rgb.is_empty() }

    /// Returns the control colors of the palette.
    pub fn colors(&self) -> &[RGB8] { &self.rgb }

    /// Returns the positions of the control colors.
    pub fn positions(&self) -> &[f64] { &self.positions }

    /// Expand the palette to its full resolution.
    pub fn dense(&self) -> DensePalette {
        DensePalette::interpolate(&self.rgb, &self.positions)
    }
}

/// `n` positions evenly spaced from `0.` to `1.` (both included).
fn uniform_positions(n: usize) -> Vec<f64> {
    if n < 2 { return vec![0.; n] }
    let last = (n - 1) as f64;
    (0 .. n).map(|i| if i == n - 1 { 1. } else { i as f64 / last })
        .collect()
}

/// A reference palette together with its expansion.
pub(crate) struct Entry {
    pub(crate) palette: Palette,
    pub(crate) dense: DensePalette,
}

struct Registry {
    entries: Vec<Entry>, // sorted by name
    default: usize, // index of `DEFAULT_PALETTE`
}

impl Registry {
    fn load(data: &'static [PaletteData]) -> Self {
        let mut entries: Vec<Entry> = data.iter()
            .map(|data| {
                let palette = Palette::from_data(data);
                let dense = palette.dense();
                Entry { palette, dense }
            })
            .collect();
        entries.sort_unstable_by(|a, b| a.palette.name.cmp(&b.palette.name));
        let default = entries.iter()
            .position(|e| e.palette.name == DEFAULT_PALETTE)
            .unwrap_or(0);
        trace!(palettes = entries.len(), "palette registry initialized");
        Registry { entries, default }
    }

    fn get(&self, name: &str) -> Option<&Entry> {
        let name = name.trim().to_ascii_lowercase();
        self.entries
            .binary_search_by(|e| e.palette.name().cmp(name.as_str()))
            .ok()
            .map(|i| &self.entries[i])
    }
}

lazy_static! {
    static ref REGISTRY: Registry = Registry::load(matplotlib::ALL);
}

/// Look a registry entry up, ignoring case.
pub(crate) fn entry(name: &str) -> Option<&'static Entry> {
    REGISTRY.get(name)
}

/// Look a registry entry up, falling back to [`DEFAULT_PALETTE`].
pub(crate) fn entry_or_default(name: &str) -> &'static Entry {
    match REGISTRY.get(name) {
        Some(e) => e,
        None => {
            debug!(requested = name, fallback = DEFAULT_PALETTE,
                   "unknown palette, using the default one");
            &REGISTRY.entries[REGISTRY.default]
        }
    }
}

/// Return the reference palette named `name` (case insensitive), if any.
///
/// ```
/// let p = sci_colormaps::lookup("Jet").unwrap();
/// assert_eq!(p.name(), "jet");
/// assert!(sci_colormaps::lookup("no-such-palette").is_none());
/// ```
pub fn lookup(name: &str) -> Option<&'static Palette> {
    entry(name).map(|e| &e.palette)
}

/// Return the names of all reference palettes, in alphabetical order.
pub fn names() -> impl ExactSizeIterator<Item = &'static str> {
    REGISTRY.entries.iter().map(|e| e.palette.name())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::PALETTE_COLORS;

    #[test]
    fn registry_palettes_are_valid() {
        assert_eq!(names().len(), matplotlib::ALL.len());
        for name in names() {
            let p = lookup(name).unwrap();
            assert_eq!(p.name(), name);
            assert!(dense::check(p.len(), p.positions()).is_ok(), "{name}");
            assert_eq!(name, name.to_lowercase());
        }
    }

    #[test]
    fn lookup_ignores_case() {
        for name in ["viridis", "Viridis", "VIRIDIS", " viridis "] {
            assert_eq!(lookup(name).map(|p| p.name()), Some("viridis"));
        }
        assert!(lookup("gist_EARTH").is_some());
        assert!(lookup("unknown").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn names_are_sorted_and_contain_the_default() {
        let all: Vec<_> = names().collect();
        let mut sorted = all.clone();
        sorted.sort_unstable();
        assert_eq!(all, sorted);
        assert!(all.contains(&DEFAULT_PALETTE));
        for name in ["jet", "terrain", "coolwarm", "ocean", "magma"] {
            assert!(all.contains(&name), "{name}");
        }
    }

    #[test]
    fn registry_dense_palette_ends_on_control_colors() {
        let e = entry("viridis").unwrap();
        assert_eq!(e.dense[0], RGB8::new(68, 1, 84));
        assert_eq!(e.dense[PALETTE_COLORS - 1], RGB8::new(253, 231, 36));
        assert_eq!(e.dense, e.palette.dense());
    }

    #[test]
    fn unknown_names_fall_back_to_the_default() {
        assert_eq!(entry_or_default("no-such-palette").palette.name(),
                   DEFAULT_PALETTE);
        assert_eq!(entry_or_default("Jet").palette.name(), "jet");
    }

    #[test]
    fn uniform_spacing() {
        let p = Palette::uniform("bw", vec![RGB8::new(0, 0, 0),
                                            RGB8::new(9, 9, 9),
                                            RGB8::new(255, 255, 255)])
            .unwrap();
        assert_eq!(p.positions(), &[0., 0.5, 1.]);
        assert_eq!(p.len(), 3);
        assert!(!p.is_empty());
        let positions = uniform_positions(16);
        assert_eq!(positions[0], 0.);
        assert_eq!(positions[15], 1.);
        assert!(Palette::uniform("one", vec![RGB8::new(0, 0, 0)]).is_err());
    }

    #[test]
    fn bytes_must_be_triplets() {
        let ok = Palette::from_bytes("user", &[[0u8, 0, 0], [255, 255, 255]],
                                     &[0., 1.]);
        assert!(ok.is_ok());
        let colors: [&[u8]; 3] = [&[0, 0, 0], &[1, 2], &[3, 4, 5]];
        assert_eq!(Palette::from_bytes("user", &colors, &[0., 0.5, 1.]),
                   Err(ColorMapError::Channels { index: 1, len: 2 }));
    }
}
