//! RegionLens CLI — Compare image regions against a reference region.
//!
//! Usage:
//!   regionlens analyze <IMAGE> -r x1,y1,x2,y2 [-r ...]   Classify regions
//!   regionlens info <IMAGE>                               Show image information
//!   regionlens config [--init]                            Show or write configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use regionlens_common::config::AppConfig;
use regionlens_region_model::RawRect;

mod commands;
mod image_source;

#[derive(Parser)]
#[command(
    name = "regionlens",
    about = "Classify image regions by average intensity against a reference region",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Average each region and compare it with the first (reference) region
    Analyze {
        /// Path to the image file
        image: PathBuf,

        /// Region corners as x1,y1,x2,y2 in pixels; the first valid one is the reference
        #[arg(short, long = "region", value_parser = parse_rect, required = true)]
        regions: Vec<RawRect>,

        /// Match threshold on the 0-255 scale (overrides the config file)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show image dimensions, channel count, and overall average
    Info {
        /// Path to the image file
        image: PathBuf,
    },

    /// Show the effective configuration
    Config {
        /// Write a default config file to the standard location
        #[arg(long)]
        init: bool,
    },
}

/// Parse `x1,y1,x2,y2` into a raw rectangle.
fn parse_rect(value: &str) -> Result<RawRect, String> {
    let coords = value
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid coordinate in '{value}': {e}"))?;

    match coords.as_slice() {
        [x1, y1, x2, y2] => Ok(RawRect::new(*x1, *y1, *x2, *y2)),
        _ => Err(format!(
            "expected 4 comma-separated values (x1,y1,x2,y2), got {}",
            coords.len()
        )),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load();

    // Initialize logging
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if cli.json_logs {
        logging.json = true;
    }
    regionlens_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Analyze {
            image,
            regions,
            threshold,
            json,
        } => commands::analyze::run(image, regions, threshold, json, &config),
        Commands::Info { image } => commands::info::run(image),
        Commands::Config { init } => commands::config::run(init, &config),
    }
}
