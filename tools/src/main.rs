// To use this script, save a page of the ColourLovers API, e.g.
// http://www.colourlovers.com/api/palettes/top?format=json&showPaletteWidths=1
// as `top.json`, then run
//     cargo run -- top.json -o mosaic.html
// The sheet shows every palette of the page with every strategy.

use std::{fs::{self, File},
          io::{BufWriter, prelude::*},
          path::PathBuf,
          error::Error};
use clap::Parser;
use log::info;
use palette_mosaic::{decode_page, Config, Palette, PaletteList, Strategy,
                     SvgSurface};

#[derive(Parser, Debug)]
#[command(about = "Render a saved page of palettes as an HTML sheet")]
struct Args {
    /// JSON array of palette records, as returned by the API.
    page: PathBuf,
    /// Output HTML file.
    #[arg(short, long, default_value = "mosaic.html")]
    output: PathBuf,
    /// TOML configuration (`[view]` width and height are used).
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Only draw with this strategy.
    #[arg(short, long)]
    strategy: Option<Strategy>,
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn palette_row(fh: &mut impl Write, palette: &Palette, config: &Config,
               strategies: &[Strategy]) -> Result<(), Box<dyn Error>> {
    let mut view = config.view.view();
    view.set_palette(Some(palette.clone()));
    writeln!(fh, "<tr><td style=\"padding-right: 7px\"><b>{}</b><br/>\
                  by {}<br/>♥ {} · #{}</td>",
             escape(palette.title()), escape(palette.user_name()),
             palette.num_hearts(), palette.rank())?;
    for reverse in [false, true] {
        view.set_reverse(reverse);
        for &strategy in strategies {
            view.set_strategy(Some(strategy));
            let mut svg = SvgSurface::new(config.view.width, config.view.height);
            let bounds = svg.bounds();
            view.draw(bounds, &mut svg);
            writeln!(fh, "  <td>{}</td>", svg.to_svg())?;
        }
    }
    writeln!(fh, "</tr>")?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    let strategies = match args.strategy {
        Some(s) => vec![s],
        None => Strategy::ALL.to_vec(),
    };

    let mut list = PaletteList::new();
    let rows = list.apply_page(decode_page(&fs::read(&args.page)?)?);
    info!("{} palettes read from {}", rows.len(), args.page.display());

    let mut fh = BufWriter::new(File::create(&args.output)?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <meta charset=\"utf-8\"/>\n\
                  <title>Palette mosaic: {}</title>\n\
                  </head>\n\
                  <body>\n\
                  <table style=\"border-spacing: 7px\">\n\
                  <tr><th></th>",
             escape(&args.page.display().to_string()))?;
    for reverse in [false, true] {
        for s in &strategies {
            writeln!(fh, "<th>{s}{}</th>",
                     if reverse { " (reversed)" } else { "" })?;
        }
    }
    writeln!(fh, "</tr>")?;
    for palette in &list {
        palette_row(&mut fh, palette, &config, &strategies)?;
    }
    writeln!(fh, "</table>\n\
                  </body>\n\
                  </html>")?;
    info!("wrote {}", args.output.display());
    Ok(())
}
