use pretty_assertions::assert_eq;
use rgb::RGB8;
use sci_colormaps::{ColorMap, ColorMapError, GrayScaleOptions, Palette,
                    DEFAULT_PALETTE, PALETTE_COLORS, USER_PALETTE};

fn black_white() -> (Vec<RGB8>, Vec<f64>) {
    (vec![RGB8::new(0, 0, 0), RGB8::new(255, 255, 255)], vec![0., 1.])
}

#[test]
fn values_below_the_domain_take_the_first_color() {
    for name in sci_colormaps::names() {
        let cmap = ColorMap::new(name, -2., 3., 17).unwrap();
        let first = cmap.dense_palette()[0];
        assert_eq!(cmap.get(-2.), first, "{name}");
        assert_eq!(cmap.get(-2.000001), first, "{name}");
        assert_eq!(cmap.get(-1e9), first, "{name}");
    }
}

#[test]
fn values_above_the_domain_take_the_last_color() {
    for name in sci_colormaps::names() {
        let cmap = ColorMap::new(name, -2., 3., 17).unwrap();
        let last = cmap.dense_palette()[PALETTE_COLORS - 1];
        assert_eq!(cmap.get(3.), last, "{name}");
        assert_eq!(cmap.get(3.5), last, "{name}");
        assert_eq!(cmap.get(f64::MAX), last, "{name}");
    }
}

#[test]
fn empty_or_reversed_ranges_are_rejected() {
    assert_eq!(ColorMap::new("viridis", 1., 1., 256).unwrap_err(),
               ColorMapError::Range { lower: 1., upper: 1. });
    assert_eq!(ColorMap::new("viridis", 2., -1., 256).unwrap_err(),
               ColorMapError::Range { lower: 2., upper: -1. });
}

#[test]
fn color_count_out_of_range_is_rejected() {
    for count in [0, 1, 257, 1000] {
        assert_eq!(ColorMap::new("viridis", 0., 1., count).unwrap_err(),
                   ColorMapError::ColorCount { count });
    }
}

#[test]
fn missing_name_is_rejected() {
    assert_eq!(ColorMap::new("", 0., 1., 256).unwrap_err(),
               ColorMapError::MissingName);
    assert_eq!(ColorMap::builder().range(0., 1.).build().unwrap_err(),
               ColorMapError::MissingName);
}

#[test]
fn unknown_name_resolves_to_the_default() {
    let cmap = ColorMap::new("UNKNOWN-NAME", 0., 1., 256).unwrap();
    assert_eq!(cmap.palette_name(), DEFAULT_PALETTE);
    assert_eq!(cmap.palette_name(), "viridis");
    let viridis = ColorMap::new("viridis", 0., 1., 256).unwrap();
    assert_eq!(cmap.dense_palette(), viridis.dense_palette());
}

#[test]
fn names_ignore_case() {
    let a = ColorMap::new("Viridis", 0., 1., 256).unwrap();
    let b = ColorMap::new("viridis", 0., 1., 256).unwrap();
    assert_eq!(a.palette_name(), b.palette_name());
    let jet = ColorMap::new("JET", 0., 1., 256).unwrap();
    assert_eq!(jet.palette_name(), "jet");
}

#[test]
fn colors_yields_color_count_entries() {
    let cmap = ColorMap::new("viridis", -30., 30., 78).unwrap();
    assert_eq!(cmap.colors().count(), 78);
    for count in 2 ..= PALETTE_COLORS {
        let cmap = ColorMap::new("jet", 0., 1., count).unwrap();
        assert_eq!(cmap.colors().count(), count);
        assert_eq!(cmap.colors().len(), count);
        // Restartable.
        assert_eq!(cmap.colors().collect::<Vec<_>>(),
                   cmap.colors().collect::<Vec<_>>());
    }
}

#[test]
fn colors_match_indexed_lookup() {
    let cmap = ColorMap::new("gist_earth", 5., 6., 100).unwrap();
    let indexed: Vec<_> = (0 .. 100).map(|k| cmap.get_by_index(k)).collect();
    assert_eq!(cmap.colors().collect::<Vec<_>>(), indexed);
}

#[test]
fn invalid_custom_palettes() {
    use ColorMapError::*;
    let (bw, _) = black_white();
    let build = |colors: Vec<RGB8>, positions: Vec<f64>| {
        ColorMap::from_colors(colors, positions, 0., 1., 256).unwrap_err()
    };
    assert_eq!(build(bw.clone(), vec![0., 0.5, 1.]),
               LengthMismatch { colors: 2, positions: 3 });
    assert_eq!(build(bw[.. 1].to_vec(), vec![0.]), ControlCount { count: 1 });
    assert_eq!(build(bw.clone(), vec![0.2, 1.]),
               Endpoints { first: 0.2, last: 1. });
    assert_eq!(build(bw.clone(), vec![0., 0.8]),
               Endpoints { first: 0., last: 0.8 });
    assert_eq!(build(vec![], vec![]), EmptyPalette);
}

#[test]
fn custom_black_to_white_ramp() {
    let (colors, positions) = black_white();
    let cmap = ColorMap::from_colors(colors, positions, 0., 1., 256).unwrap();
    assert_eq!(cmap.palette_name(), USER_PALETTE);
    let dense = cmap.dense_palette();
    assert_eq!(dense.colors().len(), PALETTE_COLORS);
    assert_eq!(dense[0], RGB8::new(0, 0, 0));
    assert_eq!(dense[PALETTE_COLORS - 1], RGB8::new(255, 255, 255));
    for w in dense.colors().windows(2) {
        assert!(w[0].r <= w[1].r);
        assert_eq!(w[1].r, w[1].g);
        assert_eq!(w[1].g, w[1].b);
    }
}

#[test]
fn custom_palette_from_bytes() {
    let colors = [vec![0u8, 0, 0], vec![192, 0, 0], vec![255, 224, 255]];
    let palette = Palette::from_bytes("fire", &colors, &[0., 0.4, 1.])
        .unwrap();
    let cmap = ColorMap::builder().palette(palette).range(10., 100.)
        .color_count(32).build().unwrap();
    assert_eq!(cmap.palette_name(), "fire");
    // floor(0.4 * 256) = 102
    assert_eq!(cmap.dense_palette()[102], RGB8::new(192, 0, 0));

    let bad = [vec![0u8, 0, 0, 0], vec![255, 255, 255]];
    assert_eq!(Palette::from_bytes("bad", &bad, &[0., 1.]).unwrap_err(),
               ColorMapError::Channels { index: 0, len: 4 });
}

#[test]
fn mirror_swaps_the_ends() {
    for name in ["viridis", "jet", "coolwarm", "terrain"] {
        let cmap = ColorMap::new(name, -1., 4., 33).unwrap();
        let m = cmap.mirrored();
        assert_eq!(m.get(cmap.upper()), cmap.get(cmap.lower()), "{name}");
        assert_eq!(m.get(cmap.lower()), cmap.get(cmap.upper()), "{name}");
    }
}

#[test]
fn decorating_leaves_the_source_unchanged() {
    let cmap = ColorMap::new("jet", 0., 1., 64).unwrap();
    let before: Vec<_> = cmap.colors().collect();
    let m = cmap.mirrored();
    let g = cmap.grayscale(GrayScaleOptions::default());
    assert_eq!(cmap.colors().collect::<Vec<_>>(), before);
    assert_ne!(m.colors().collect::<Vec<_>>(), before);
    assert_ne!(g.colors().collect::<Vec<_>>(), before);

    let (colors, positions) = black_white();
    let user = ColorMap::from_colors(colors, positions, 0., 1., 16).unwrap();
    let dense = user.dense_palette().clone();
    let _ = user.mirrored();
    assert_eq!(user.dense_palette(), &dense);
}

#[test]
fn grayscale_channels_are_equal() {
    for &options in GrayScaleOptions::ALL {
        for name in sci_colormaps::names() {
            let g = ColorMap::new(name, 0., 1., 50).unwrap().grayscale(options);
            for c in g.colors().chain([g.get(0.), g.get(1.)]) {
                assert!(c.r == c.g && c.g == c.b, "{name} {options}: {c:?}");
            }
        }
    }
}

#[test]
fn decorators_compose() {
    let cmap = ColorMap::new("hot", 0., 1., 256).unwrap();
    let a = cmap.mirrored().grayscale(GrayScaleOptions::Average);
    let b = cmap.grayscale(GrayScaleOptions::Average).mirrored();
    assert_eq!(a.dense_palette(), b.dense_palette());
    assert_eq!(a.config(), cmap.config());
    assert_eq!(a.palette_name(), "hot");
}
