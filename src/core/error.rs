//! Error taxonomy for a snapshot run
//!
//! Every variant is fatal: the run stops at the first error and leaves
//! whatever was already written to the output file in place.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a snapshot
#[derive(Debug, Error)]
pub enum SnapError {
    /// The extension filter was built from an empty set
    #[error("extension filter must contain at least one suffix")]
    EmptyFilter,

    /// An empty suffix would match every file
    #[error("extension suffix must not be empty")]
    InvalidExtension,

    /// The current working directory could not be resolved
    #[error("failed to resolve current directory")]
    CurrentDir(#[source] io::Error),

    /// A directory under the root could not be listed
    #[error("failed to walk {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A candidate file could not be opened or read
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A candidate file is not valid UTF-8 text
    #[error("{} is not valid UTF-8 text", path.display())]
    Decode { path: PathBuf },

    /// The output file could not be created or truncated
    #[error("failed to create output file {}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the output file failed
    #[error("failed to write output file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SnapError {
    /// Path the error is about, when there is one
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            SnapError::Walk { path, .. }
            | SnapError::Read { path, .. }
            | SnapError::Decode { path }
            | SnapError::CreateOutput { path, .. }
            | SnapError::Write { path, .. } => Some(path),
            SnapError::EmptyFilter | SnapError::InvalidExtension | SnapError::CurrentDir(_) => {
                None
            }
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, SnapError>;
