use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use sci_colormaps::{ColorMap, GrayScaleOptions};

type Err = Box<dyn Error>;

fn hex(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// One `<td>` per color, each `width` × `height` pixels.
fn swatches(fh: &mut impl Write, colors: impl Iterator<Item = RGB8>,
            width: u32, height: u32) -> Result<(), Err> {
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: {height}px; \
                      background-color: {}\"></td>", hex(c))?;
    }
    Ok(())
}

/// Swatches of `cmap` with, below them, its luminosity grayscale.
fn colormap_rows(fh: &mut impl Write, cmap: &ColorMap,
                 width: u32, label: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border-spacing: 0px\"><tr>")?;
    swatches(fh, cmap.colors(), width, 30)?;
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {label}</td></tr><tr>")?;
    let gray = cmap.grayscale(GrayScaleOptions::Luminosity);
    swatches(fh, gray.colors(), width, 12)?;
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let path = env::args().nth(1).unwrap_or_else(|| "colormaps.html".into());
    let mut fh = BufWriter::new(File::create(&path)?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>sci-colormaps: reference palettes</title>\n\
                  </head>\n\
                  <body>")?;

    writeln!(fh, "<h3>Resolution</h3>")?;
    for n in [8, 32, 256] {
        let cmap = ColorMap::new("viridis", 0., 1., n)?;
        colormap_rows(&mut fh, &cmap, 512 / n as u32, &format!("{n} colors"))?;
    }

    writeln!(fh, "<h3>Custom palette</h3>")?;
    let fire = ColorMap::builder()
        .name("fire")
        .colors(vec![RGB8::new(0, 0, 0), RGB8::new(192, 0, 0),
                     RGB8::new(255, 224, 255)],
                vec![0., 0.4, 1.])
        .build()?;
    colormap_rows(&mut fh, &fire, 2, "fire")?;
    colormap_rows(&mut fh, &fire.mirrored(), 2, "fire (mirrored)")?;

    writeln!(fh, "<h3>Reference palettes</h3>")?;
    for name in sci_colormaps::names() {
        let cmap = ColorMap::new(name, 0., 1., 128)?;
        colormap_rows(&mut fh, &cmap, 4, name)?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    println!("Wrote {path}");
    Ok(())
}
