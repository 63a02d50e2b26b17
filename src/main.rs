//! srcsnap - Concatenate a source tree into a single text snapshot
//!
//! srcsnap provides:
//! - Recursive discovery of files by extension suffix
//! - One delimited record per file, written to output.txt
//! - Presets for Go-only and Go + SQL snapshots

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_level().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    cli::run(cli)
}
