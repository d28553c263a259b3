//! carbonfig CLI - render the carbon-cycle assessment figure.

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

use carbonfig::config::FigureConfig;
use carbonfig::data::FigureData;
use carbonfig::figure;

/// Render the multi-panel carbon-cycle figure from a directory of
/// fixed-name datasets.
#[derive(Parser)]
#[command(name = "carbonfig")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the input datasets.
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// Output image path.
    #[arg(short, long, default_value = "TS5.png")]
    output: PathBuf,

    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => FigureConfig::load(path)?,
        None => FigureConfig::default(),
    };

    let data = FigureData::load(&cli.data_dir, &config)?;
    let written = figure::render(&data, &config, &cli.output)?;
    println!("write {}", written.display());
    Ok(())
}
