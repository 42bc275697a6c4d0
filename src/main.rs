use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use heatwheel::{font, output, probability, render_heat_map, HeatMapConfig, HeatMapError};

/// Renders per-player win counts (one integer per line on stdin) as an
/// annular pie heat-map image.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Where to write the rendered image; format is keyed by extension (png)
    output: PathBuf,

    /// TTF/OTF font for slice labels; falls back to HEATWHEEL_FONT, then
    /// common system fonts
    #[arg(long)]
    font: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), HeatMapError> {
    let args = Args::parse();

    let counts = probability::read_win_counts(io::stdin().lock())?;
    let probabilities = probability::normalize(&counts)?;
    info!(players = probabilities.len(), "normalized win counts");

    let config = HeatMapConfig::default();
    let label_font = font::load(args.font.as_deref())?;

    let canvas = render_heat_map(&probabilities, &config, &label_font)?;
    output::write_image(&canvas, &args.output)?;
    info!(path = %args.output.display(), "heat map written");
    Ok(())
}
