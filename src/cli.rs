//! CLI argument parsing via clap.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use hueprobe::color::Rgb;

/// Report a pixel's color and the closest named color from a reference table.
#[derive(Debug, Parser)]
#[command(name = "hueprobe", version)]
pub struct Args {
    /// Path to config file (default: ./hueprobe.toml or ~/.config/hueprobe/hueprobe.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Color catalog CSV (columns: name, hex, R, G, B).
    #[arg(long = "catalog", global = true)]
    pub catalog: Option<PathBuf>,

    /// Emit JSON instead of styled text.
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sample one pixel of an image and report its closest named color.
    Inspect {
        /// Image file, or `sample` for the built-in gradient.
        image: String,
        /// Column; out-of-range values are clamped to the image.
        #[arg(allow_negative_numbers = true)]
        x: i64,
        /// Row; out-of-range values are clamped to the image.
        #[arg(allow_negative_numbers = true)]
        y: i64,
    },
    /// Report the closest named color for `#RRGGBB`, `RRGGBB`, or `r,g,b`.
    Lookup {
        color: Rgb,
    },
    /// List every color in the active catalog.
    Catalog,
    /// Write the built-in gradient test image to a file.
    Sample {
        /// Output path; the image format follows the extension.
        out: PathBuf,
    },
}
