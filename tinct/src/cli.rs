use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "tinct",
    version,
    about = "Pick colors and convert them between HSL, RGB, HSV and hex"
)]
pub struct Cli {
    /// Config file, defaults to ./tinct.toml when present
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print an HSL color in every format
    Convert {
        #[arg(allow_negative_numbers = true)]
        hue: i32,
        #[arg(allow_negative_numbers = true)]
        saturation: i32,
        #[arg(allow_negative_numbers = true)]
        lightness: i32,
    },
    /// Reconstruct the HSL color behind a #rrggbb value
    Load { hex: String },
    /// List the quick colors
    Swatches,
    /// Print the hue slider gradient as CSS
    Gradient {
        #[arg(short, long, allow_negative_numbers = true)]
        saturation: Option<i32>,
        #[arg(short, long, allow_negative_numbers = true)]
        lightness: Option<i32>,
    },
    /// Pick colors interactively, one command per line on stdin
    Session,
}
