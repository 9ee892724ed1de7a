use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use palette_mosaic::{render, paint, RGBColor, Strategy, SvgSurface};
use rgb::RGBA;

type Err = Box<dyn Error>;

fn colors(hexes: &[&str]) -> Vec<RGBA<f64>> {
    hexes.iter().filter_map(|h| RGBA::<f64>::from_hex(h)).collect()
}

fn row(fh: &mut impl Write, hexes: &[&str], widths: &[f64],
       comment: &str) -> Result<(), Err> {
    let colors = colors(hexes);
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 7px\"><tr>")?;
    for reverse in [false, true] {
        for strategy in Strategy::ALL {
            let mut svg = SvgSurface::new(120., 80.);
            let fills = render(svg.bounds(), &colors, widths, strategy,
                               reverse);
            paint(&mut svg, &fills);
            writeln!(fh, "  <td title=\"{strategy}{}\">{}</td>",
                     if reverse { ", reversed" } else { "" }, svg.to_svg())?;
        }
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td>\
                  </tr></table>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("mosaic.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Palette mosaic: test {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;
    writeln!(fh, "<h3>Uniform widths</h3>")?;
    row(&mut fh, &["69D2E7", "A7DBD8", "E0E4CC", "F38630", "FA6900"],
        &[0.2; 5], "Giant Goldfish")?;
    row(&mut fh, &["#000", "#555", "#aaa", "#fff"], &[0.25; 4], "Greys")?;

    writeln!(fh, "<h3>Proportional widths</h3>")?;
    row(&mut fh, &["ECD078", "D95B43", "C02942", "542437", "53777A"],
        &[0.24, 0.16, 0.2, 0.2, 0.2], "Thought Provoking")?;
    row(&mut fh, &["CFF09E", "A8DBA8", "79BD9A", "3B8686", "0B486B"],
        &[0.1, 0.15, 0.25, 0.25, 0.25], "Adrift in Dreams")?;
    row(&mut fh, &["F00", "0F0"], &[0.9, 0.1], "One dominant color")?;

    writeln!(fh, "<h3>Translucent colors</h3>")?;
    row(&mut fh, &["FF000080", "00FF0080", "0000FF80"], &[0.4, 0.3, 0.3],
        "Alpha 0.5")?;

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
