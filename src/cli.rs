// Command-line arguments (clap derive).
//
//   coloring-canvas                              blank page in a window
//   coloring-canvas open page.png                line art in a window
//   coloring-canvas fill -i page.png -o out.png --color "#A3C4BC" --at 10,20 --at 40,5

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use crate::color::Color;
use crate::error::Error;
use crate::types::Coordinate;

/// Paint-bucket coloring canvas.
#[derive(Parser, Debug)]
#[command(name = "coloring-canvas", version, about = "Paint-bucket coloring canvas")]
pub struct CliArgs {
    /// TOML settings file (window size, palette, zoom limits, export path).
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive window (the default).
    Open {
        /// Line-art image to color. Without one, a blank page is shown.
        image: Option<PathBuf>,
    },

    /// Fill regions of an image without opening a window.
    Fill {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Written as PNG.
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Fill color as RRGGBB or #RRGGBB.
        #[arg(long, value_name = "HEX")]
        color: Color,

        /// Seed pixel as X,Y. Repeat to fill several regions in order.
        #[arg(long = "at", value_name = "X,Y", required = true, num_args = 1)]
        seeds: Vec<SeedArg>,
    },
}

/// `X,Y` seed as typed on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedArg(pub Coordinate);

impl FromStr for SeedArg {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || Error::InvalidCoordinate(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(bad)?;
        let x = x.trim().parse().map_err(|_| bad())?;
        let y = y.trim().parse().map_err(|_| bad())?;
        Ok(SeedArg(Coordinate::new(x, y)))
    }
}
