//! CLI entry point for painting voxel structures

use clap::Parser;
use gridpaint::io::cli::{Cli, PaintProcessor};
use gridpaint::io::configuration::LOG_FILTER_ENV;
use tracing_subscriber::EnvFilter;

fn main() -> gridpaint::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let processor = PaintProcessor::new(cli);
    processor.process()
}
