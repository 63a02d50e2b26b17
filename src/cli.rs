//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;

use crate::core::preset::Preset;

/// srcsnap - concatenate source files under the current directory into one snapshot.
#[derive(Parser, Debug)]
#[command(name = "srcsnap")]
#[command(
    author,
    version,
    about,
    long_about = r#"srcsnap walks the current directory recursively and writes every file whose
name ends with one of the preset's extensions into a single output.txt.

Each file becomes one record:

    <MARKER> <path>:

    <content>

Presets:
- go-sql (default): .go and .sql files under the current directory, marker "------"
- go: .go files under ".", marker "__________"

Examples:
    srcsnap
    srcsnap --preset go
    RUST_LOG=debug srcsnap
"#
)]
pub struct Cli {
    /// Snapshot preset (go/go-sql).
    #[arg(
        long,
        default_value = "go-sql",
        value_parser = ["go", "go-sql"],
        value_name = "PRESET",
        long_help = "Select which files are collected and how records are delimited.\n\n\
Supported values:\n\
- go-sql (default): .go and .sql files, absolute paths, marker \"------\"\n\
- go: .go files, paths relative to \".\", marker \"__________\""
    )]
    pub preset: String,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(
        short,
        long,
        conflicts_with = "verbose",
        long_help = "Only log errors to stderr. The confirmation line is still printed to\n\
stdout on success."
    )]
    pub quiet: bool,

    /// Verbose mode (progress logging).
    #[arg(
        short,
        long,
        long_help = "Log run progress to stderr. Set RUST_LOG for finer control\n\
(e.g. RUST_LOG=srcsnap=trace)."
    )]
    pub verbose: bool,
}

impl Cli {
    /// Default log level when RUST_LOG is unset
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let preset: Preset = cli.preset.parse().map_err(anyhow::Error::msg)?;
    tracing::debug!(%preset, "resolved preset");

    crate::flows::aggregate::run_aggregate(preset)
}
