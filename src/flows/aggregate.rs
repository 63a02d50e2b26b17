//! Aggregation flow - Concatenate matching files into one snapshot
//!
//! Single pass: open (truncate) the output, pull candidates from the walker one
//! at a time, and append a record for every file the extension filter accepts.
//! The first error ends the run and leaves the partial output behind.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::{debug, error, info, trace};

use crate::backends::walk::{DiskTree, FileTree};
use crate::core::error::SnapError;
use crate::core::preset::{AggregateConfig, Preset};
use crate::core::render::RecordWriter;

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateReport {
    pub output: PathBuf,
    /// Candidates seen by the walk, matched or not
    pub files_seen: usize,
    pub files_written: usize,
    pub bytes_written: u64,
}

/// Write every matching file under `config.root` into `config.output`
pub fn aggregate<T>(tree: &T, config: &AggregateConfig) -> Result<AggregateReport, SnapError>
where
    T: FileTree + ?Sized,
{
    info!(
        root = %config.root.display(),
        output = %config.output.display(),
        extensions = ?config.extensions.suffixes(),
        "building snapshot"
    );

    let file = File::create(&config.output).map_err(|source| SnapError::CreateOutput {
        path: config.output.clone(),
        source,
    })?;
    let mut writer = RecordWriter::new(BufWriter::new(file), config.marker.as_str());
    let write_failed = |source| SnapError::Write {
        path: config.output.clone(),
        source,
    };

    let mut files_seen = 0;
    for candidate in tree.walk(&config.root) {
        let candidate = candidate?;
        files_seen += 1;

        if !config.extensions.matches(&candidate.name) {
            trace!(
                path = %candidate.path.display(),
                extension = ?candidate.extension(),
                "skipping unmatched file"
            );
            continue;
        }

        let content = tree.read_text(&candidate.path)?;
        writer
            .write_entry(&candidate.path, &content)
            .map_err(write_failed)?;
        debug!(path = %candidate.path.display(), bytes = content.len(), "appended entry");
    }

    let files_written = writer.entries();
    let (_, bytes_written) = writer.finish().map_err(write_failed)?;

    Ok(AggregateReport {
        output: config.output.clone(),
        files_seen,
        files_written,
        bytes_written,
    })
}

/// Run the snapshot for a preset against the real filesystem
pub fn run_aggregate(preset: Preset) -> Result<()> {
    let config = preset.config()?;

    let report = aggregate(&DiskTree, &config)
        .inspect_err(|err| error!(path = ?err.path(), "snapshot aborted: {}", err))
        .with_context(|| format!("{} snapshot failed", preset))?;

    info!(
        files_seen = report.files_seen,
        files_written = report.files_written,
        bytes_written = report.bytes_written,
        "snapshot complete"
    );

    println!("{}", preset.confirmation(&report.output).green());

    Ok(())
}
