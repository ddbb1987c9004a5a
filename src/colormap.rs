//! Mapping of a numeric domain onto a palette.

use std::borrow::Cow;
use rgb::RGB8;
use tracing::debug;

use crate::PALETTE_COLORS;
use crate::dense::DensePalette;
use crate::error::{ColorMapError, Result};
use crate::palettes::{self, Palette, DEFAULT_PALETTE};

/// Name given to colormaps built from custom colors without a name.
pub const USER_PALETTE: &str = "user";

/// Domain and resolution of a [`ColorMap`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColorMapConfig {
    /// Lower bound of the domain.
    pub lower: f64,
    /// Upper bound of the domain; must be greater than `lower`.
    pub upper: f64,
    /// Number of distinct colors, in `2 ..= 256`.
    pub color_count: usize,
}

impl Default for ColorMapConfig {
    fn default() -> Self {
        Self { lower: 0., upper: 1., color_count: PALETTE_COLORS }
    }
}

impl ColorMapConfig {
    /// Check the invariants of the configuration.
    pub fn validate(&self) -> Result<()> {
        let Self { lower, upper, color_count } = *self;
        if !(2 ..= PALETTE_COLORS).contains(&color_count) {
            return Err(ColorMapError::ColorCount { count: color_count })
        }
        // `!(lower < upper)` also rejects NaN.  The width must be finite
        // too, or every value would fall into the first bin.
        if !(lower < upper) || !(upper - lower).is_finite() {
            return Err(ColorMapError::Range { lower, upper })
        }
        Ok(())
    }
}

/// A function from the domain \[`lower`, `upper`\] to `color_count`
/// distinct colors of a dense palette.
///
/// A colormap never changes after construction.  Transforms such as
/// [`ColorMap::mirrored`] return a new colormap.
///
/// # Example
///
/// ```
/// use sci_colormaps::ColorMap;
/// let cmap = ColorMap::new("coolwarm", -0.5, 0.5, 32)?;
/// let c = cmap.get(0.3);
/// assert_eq!(cmap.colors().len(), 32);
/// # Ok::<(), sci_colormaps::ColorMapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ColorMap {
    name: Cow<'static, str>,
    // Borrowed for reference palettes, owned otherwise.
    dense: Cow<'static, DensePalette>,
    lower: f64,
    upper: f64,
    color_count: usize,
    color_range: f64, // width of a bin in the domain
    color_bin_size: f64, // dense entries per bin
}

impl Default for ColorMap {
    /// The [`DEFAULT_PALETTE`] over \[0, 1\] with 256 colors.
    fn default() -> Self {
        let entry = palettes::entry_or_default(DEFAULT_PALETTE);
        Self::with_dense(Cow::Borrowed(entry.palette.name()),
                         Cow::Borrowed(&entry.dense),
                         ColorMapConfig::default())
    }
}

impl ColorMap {
    /// Colormap using the reference palette `name` (case insensitive)
    /// over \[`lower`, `upper`\] with `color_count` colors.  Unknown
    /// names resolve to [`DEFAULT_PALETTE`].
    pub fn new(name: &str, lower: f64, upper: f64, color_count: usize)
               -> Result<Self> {
        Self::builder().name(name.to_owned()).range(lower, upper)
            .color_count(color_count).build()
    }

    /// Colormap built from custom control `colors` placed at
    /// `positions`.  Its palette name is [`USER_PALETTE`].
    pub fn from_colors(colors: Vec<RGB8>, positions: Vec<f64>,
                       lower: f64, upper: f64, color_count: usize)
                       -> Result<Self> {
        Self::builder().colors(colors, positions).range(lower, upper)
            .color_count(color_count).build()
    }

    /// Return a builder with the default configuration and no palette.
    pub fn builder() -> ColorMapBuilder {
        ColorMapBuilder { name: None, source: Source::Registry,
                          config: ColorMapConfig::default() }
    }

    /// Assemble a colormap from a validated `config`.
    pub(crate) fn with_dense(name: Cow<'static, str>,
                             dense: Cow<'static, DensePalette>,
                             config: ColorMapConfig) -> Self {
        let ColorMapConfig { lower, upper, color_count } = config;
        ColorMap {
            name, dense, lower, upper, color_count,
            color_range: (upper - lower) / color_count as f64,
            color_bin_size: PALETTE_COLORS as f64 / color_count as f64,
        }
    }

    /// Name of the palette ("jet", "viridis", "user",...).
    pub fn palette_name(&self) -> &str { &self.name }

    #[inline]
    pub fn lower(&self) -> f64 { self.lower }

    #[inline]
    pub fn upper(&self) -> f64 { self.upper }

    /// Number of distinct colors of the colormap.
    #[inline]
    pub fn color_count(&self) -> usize { self.color_count }

    /// Width of the sub-interval of the domain mapped to one color.
    #[inline]
    pub fn color_range(&self) -> f64 { self.color_range }

    pub fn config(&self) -> ColorMapConfig {
        ColorMapConfig { lower: self.lower, upper: self.upper,
                         color_count: self.color_count }
    }

    /// The full resolution palette backing the colormap.
    pub fn dense_palette(&self) -> &DensePalette { &self.dense }

    /// Return the color of `value`.  Values outside the domain are
    /// clamped: `value <= lower` gives the first color of the dense
    /// palette, `value >= upper` the last one.  NaN gives the first
    /// color.
    pub fn get(&self, value: f64) -> RGB8 {
        if value <= self.lower {
            return self.dense[0]
        }
        if value >= self.upper {
            return self.dense[PALETTE_COLORS - 1]
        }
        let bin = ((value - self.lower) / self.color_range) as usize;
        self.bin_color(bin.min(self.color_count - 1))
    }

    /// Return the color of the `ordinal`-th bin, that is the color of
    /// `lower + ordinal * color_range` computed without rounding
    /// errors.  Ordinals `>= color_count` give the color of `upper`.
    pub fn get_by_index(&self, ordinal: usize) -> RGB8 {
        if ordinal >= self.color_count {
            self.dense[PALETTE_COLORS - 1]
        } else {
            self.bin_color(ordinal)
        }
    }

    #[inline]
    fn bin_color(&self, bin: usize) -> RGB8 {
        let i = (bin as f64 * self.color_bin_size) as usize;
        self.dense[i.min(PALETTE_COLORS - 1)]
    }

    /// Return an iterator over the `color_count` colors of the
    /// colormap, in increasing order of bins.
    pub fn colors(&self) -> Colors<'_> {
        Colors { cmap: self, i: 0, j: self.color_count }
    }
}

impl<'a> IntoIterator for &'a ColorMap {
    type Item = RGB8;
    type IntoIter = Colors<'a>;

    fn into_iter(self) -> Colors<'a> { self.colors() }
}

/// Palette the builder expands.
#[derive(Clone, Debug)]
enum Source {
    Registry,
    Colors(Vec<RGB8>, Vec<f64>),
    Palette(Palette),
}

/// Step by step construction of a [`ColorMap`].
///
/// ```
/// use rgb::RGB8;
/// use sci_colormaps::ColorMap;
/// let cmap = ColorMap::builder()
///     .name("fire")
///     .colors(vec![RGB8::new(0, 0, 0), RGB8::new(192, 0, 0),
///                  RGB8::new(255, 224, 255)],
///             vec![0., 0.4, 1.])
///     .range(10., 100.)
///     .color_count(32)
///     .build()?;
/// assert_eq!(cmap.palette_name(), "fire");
/// # Ok::<(), sci_colormaps::ColorMapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ColorMapBuilder {
    name: Option<Cow<'static, str>>,
    source: Source,
    config: ColorMapConfig,
}

impl ColorMapBuilder {
    /// Name of the reference palette to use or, combined with
    /// [`ColorMapBuilder::colors`] or [`ColorMapBuilder::palette`],
    /// the name recorded for the custom palette.
    pub fn name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Use custom control `colors` placed at `positions`.
    pub fn colors(mut self, colors: Vec<RGB8>, positions: Vec<f64>) -> Self {
        self.source = Source::Colors(colors, positions);
        self
    }

    /// Use an already validated palette.
    pub fn palette(mut self, palette: Palette) -> Self {
        self.source = Source::Palette(palette);
        self
    }

    pub fn range(mut self, lower: f64, upper: f64) -> Self {
        self.config.lower = lower;
        self.config.upper = upper;
        self
    }

    pub fn color_count(mut self, color_count: usize) -> Self {
        self.config.color_count = color_count;
        self
    }

    /// Replace domain and resolution at once.
    pub fn config(mut self, config: ColorMapConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<ColorMap> {
        let name = self.name.filter(|n| !n.trim().is_empty());
        match self.source {
            Source::Registry => {
                let name = name.ok_or(ColorMapError::MissingName)?;
                self.config.validate()?;
                let entry = palettes::entry_or_default(&name);
                Ok(ColorMap::with_dense(Cow::Borrowed(entry.palette.name()),
                                        Cow::Borrowed(&entry.dense),
                                        self.config))
            }
            Source::Colors(colors, positions) => {
                self.config.validate()?;
                let dense = DensePalette::build(&colors, &positions)?;
                let name = name.unwrap_or(Cow::Borrowed(USER_PALETTE));
                debug!(palette = %name, colors = colors.len(),
                       "custom palette built");
                Ok(ColorMap::with_dense(name, Cow::Owned(dense), self.config))
            }
            Source::Palette(palette) => {
                self.config.validate()?;
                let dense = palette.dense();
                let name = name.unwrap_or_else(
                    || Cow::Owned(palette.name().to_owned()));
                Ok(ColorMap::with_dense(name, Cow::Owned(dense), self.config))
            }
        }
    }
}

/// An exact size iterator over the colors of a [`ColorMap`].
///
/// Created by [`ColorMap::colors`].  Clone it to restart.
#[derive(Clone, Debug)]
pub struct Colors<'a> {
    cmap: &'a ColorMap,
    i: usize, // first bin to be consumed (i ≤ j)
    j: usize, // bin after the last one to be consumed
}

impl Iterator for Colors<'_> {
    type Item = RGB8;

    fn next(&mut self) -> Option<RGB8> {
        if self.i >= self.j { return None }
        let c = self.cmap.bin_color(self.i);
        self.i += 1;
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.j - self.i;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Colors<'_> {}

impl DoubleEndedIterator for Colors<'_> {
    fn next_back(&mut self) -> Option<RGB8> {
        if self.i >= self.j { return None }
        self.j -= 1;
        Some(self.cmap.bin_color(self.j))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_sample_the_dense_palette() {
        let cmap = ColorMap::new("jet", 0., 32., 32).unwrap();
        let dense = cmap.dense_palette();
        // 32 colors over 256 entries: every 8th entry.
        for (k, c) in cmap.colors().enumerate() {
            assert_eq!(c, dense[8 * k], "bin {k}");
        }
        assert_eq!(cmap.get(0.5), dense[0]);
        assert_eq!(cmap.get(1.), dense[8]);
        assert_eq!(cmap.get(31.99), dense[248]);
        assert_eq!(cmap.get(32.), dense[255]);
    }

    #[test]
    fn clamping() {
        let cmap = ColorMap::new("terrain", -1., 1., 10).unwrap();
        let first = cmap.dense_palette()[0];
        let last = cmap.dense_palette()[PALETTE_COLORS - 1];
        for v in [-1., -1.5, -1e300, f64::NEG_INFINITY, f64::NAN] {
            assert_eq!(cmap.get(v), first, "{v}");
        }
        for v in [1., 1.5, 1e300, f64::INFINITY] {
            assert_eq!(cmap.get(v), last, "{v}");
        }
    }

    #[test]
    fn by_index_agrees_with_get() {
        let cmap = ColorMap::new("ocean", 10., 100., 45).unwrap();
        for k in 0 .. cmap.color_count() {
            let v = cmap.lower() + (k as f64 + 0.5) * cmap.color_range();
            assert_eq!(cmap.get_by_index(k), cmap.get(v), "bin {k}");
        }
        assert_eq!(cmap.get_by_index(45), cmap.get(cmap.upper()));
        assert_eq!(cmap.get_by_index(1000), cmap.get(cmap.upper()));
    }

    #[test]
    fn colors_is_exact_size_and_double_ended() {
        let cmap = ColorMap::new("viridis", -30., 30., 78).unwrap();
        let colors = cmap.colors();
        assert_eq!(colors.len(), 78);
        let fwd: Vec<_> = colors.clone().collect();
        let mut bwd: Vec<_> = colors.rev().collect();
        bwd.reverse();
        assert_eq!(fwd, bwd);
        assert_eq!(fwd, (&cmap).into_iter().collect::<Vec<_>>());
        let mut it = cmap.colors();
        it.next();
        it.next_back();
        assert_eq!(it.len(), 76);
    }

    #[test]
    fn registry_colormaps_share_the_reference_table() {
        let a = ColorMap::new("magma", 0., 1., 256).unwrap();
        let b = ColorMap::new("MAGMA", -5., 5., 16).unwrap();
        assert!(std::ptr::eq(a.dense_palette(), b.dense_palette()));
        assert!(std::ptr::eq(a.dense_palette(), a.clone().dense_palette()));
    }

    #[test]
    fn config_validation() {
        use ColorMapError::*;
        let cfg = |lower, upper, color_count| ColorMapConfig {
            lower, upper, color_count }.validate();
        assert_eq!(cfg(0., 1., 256), Ok(()));
        assert_eq!(cfg(0., 1., 2), Ok(()));
        assert_eq!(cfg(0., 1., 1), Err(ColorCount { count: 1 }));
        assert_eq!(cfg(0., 1., 257), Err(ColorCount { count: 257 }));
        assert_eq!(cfg(2., 1., 16), Err(Range { lower: 2., upper: 1. }));
        assert!(matches!(cfg(f64::NAN, 1., 16), Err(Range { .. })));
        assert!(matches!(cfg(0., f64::INFINITY, 16), Err(Range { .. })));
        assert_eq!(cfg(-f64::MAX, f64::MAX, 16),
                   Err(Range { lower: -f64::MAX, upper: f64::MAX }));
    }

    #[test]
    fn domain_width_must_be_finite() {
        // 1e308 - (-1e308) overflows.
        assert_eq!(ColorMap::new("jet", -1e308, 1e308, 4).unwrap_err(),
                   ColorMapError::Range { lower: -1e308, upper: 1e308 });
        // Wide but representable domains still bin normally.
        let cmap = ColorMap::new("jet", -1e307, 1e307, 4).unwrap();
        assert_eq!(cmap.get(-1e307), cmap.get_by_index(0));
        assert_eq!(cmap.get(9e306), cmap.get_by_index(3));
        assert_ne!(cmap.get_by_index(0), cmap.get_by_index(3));
    }

    #[test]
    fn builder_paths() {
        let err = ColorMap::builder().build().unwrap_err();
        assert_eq!(err, ColorMapError::MissingName);
        let err = ColorMap::builder().name("  ").build().unwrap_err();
        assert_eq!(err, ColorMapError::MissingName);

        let p = Palette::uniform("bw", vec![RGB8::new(0, 0, 0),
                                            RGB8::new(255, 255, 255)])
            .unwrap();
        let cmap = ColorMap::builder().palette(p.clone()).build().unwrap();
        assert_eq!(cmap.palette_name(), "bw");
        assert_eq!(cmap.dense_palette(), &p.dense());

        let cfg = ColorMapConfig { lower: -2., upper: 3., color_count: 7 };
        let cmap = ColorMap::builder().name("hot").config(cfg).build().unwrap();
        assert_eq!(cmap.config(), cfg);
    }

    #[test]
    fn default_colormap() {
        let cmap = ColorMap::default();
        assert_eq!(cmap.palette_name(), DEFAULT_PALETTE);
        assert_eq!(cmap.config(), ColorMapConfig::default());
        assert_eq!(cmap.get(0.), RGB8::new(68, 1, 84));
    }
}
