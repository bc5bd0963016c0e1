use async_std::path::Path;
use clap::Parser;

use tinct_color::{hex_to_hsl, swatch::css_hue_gradient, ColorFormats, Hsl};

mod cli;
mod config;
mod session;

use crate::cli::{Cli, Command};
use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::session::{format_lines, numbered_lines, Session};

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

#[async_std::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(Path::new(path)).await?,
        None => Config::load_if_exists(Path::new(DEFAULT_CONFIG_PATH)).await?,
    };

    match cli.command {
        Command::Convert {
            hue,
            saturation,
            lightness,
        } => {
            let hsl = Hsl::new(hue, saturation, lightness);
            if (i32::from(hsl.hue()), i32::from(hsl.saturation()), i32::from(hsl.lightness()))
                != (hue, saturation, lightness)
            {
                log::warn!("input adjusted into range: {}", hsl);
            }
            print_lines(format_lines(&ColorFormats::from_hsl(hsl)));
        }
        Command::Load { hex } => {
            let hsl = hex_to_hsl(&hex)?;
            print_lines(format_lines(&ColorFormats::from_hsl(hsl)));
        }
        Command::Swatches => print_lines(numbered_lines(config.swatches().iter())),
        Command::Gradient {
            saturation,
            lightness,
        } => {
            let saturation =
                saturation.unwrap_or_else(|| i32::from(config.initial_color.saturation()));
            let lightness =
                lightness.unwrap_or_else(|| i32::from(config.initial_color.lightness()));
            println!("{}", css_hue_gradient(saturation, lightness));
        }
        Command::Session => {
            let session = Session::new(config.picker_state(), config.swatches());
            session::run(session).await?;
        }
    }

    Ok(())
}
