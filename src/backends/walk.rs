//! Directory walker
//!
//! Uses walkdir for traversal. The walk is a lazy, single-pass sequence of
//! candidate files; directories are descended into and never yielded.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};
use walkdir::WalkDir;

use crate::core::error::{Result, SnapError};

/// A non-directory entry found during traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Traversal directory joined with the file name
    pub path: PathBuf,
    /// Bare file name
    pub name: OsString,
}

impl Candidate {
    pub fn new(path: PathBuf) -> Self {
        let name = path.file_name().map(OsStr::to_os_string).unwrap_or_default();
        Self { path, name }
    }

    /// True extension (without the dot), if the name has one
    pub fn extension(&self) -> Option<&OsStr> {
        Path::new(&self.name).extension()
    }
}

/// Source of candidate files and their text
pub trait FileTree {
    /// Lazily walk every candidate reachable from `root`
    fn walk<'a>(&'a self, root: &Path) -> Box<dyn Iterator<Item = Result<Candidate>> + 'a>;

    /// Read a candidate's full content as UTF-8 text
    fn read_text(&self, path: &Path) -> Result<String>;
}

/// The real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskTree;

impl FileTree for DiskTree {
    fn walk<'a>(&'a self, root: &Path) -> Box<dyn Iterator<Item = Result<Candidate>> + 'a> {
        Box::new(DiskWalk::new(root))
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|source| SnapError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        String::from_utf8(bytes).map_err(|_| SnapError::Decode {
            path: path.to_path_buf(),
        })
    }
}

/// Iterator over the candidates below a root directory
pub struct DiskWalk {
    inner: walkdir::IntoIter,
    root: PathBuf,
    done: bool,
}

impl DiskWalk {
    pub fn new(root: &Path) -> Self {
        let inner = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        Self {
            inner,
            root: root.to_path_buf(),
            done: false,
        }
    }

    fn fail(&mut self, err: walkdir::Error) -> Option<Result<Candidate>> {
        self.done = true;

        // A missing root yields nothing rather than failing the run
        let missing_root = err.depth() == 0
            && err
                .io_error()
                .is_some_and(|e| e.kind() == io::ErrorKind::NotFound);
        if missing_root {
            warn!(root = %self.root.display(), "root directory does not exist");
            return None;
        }

        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());
        Some(Err(SnapError::Walk {
            path,
            source: err.into(),
        }))
    }
}

impl Iterator for DiskWalk {
    type Item = Result<Candidate>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }

            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => return self.fail(err),
            };

            // The root itself is never a candidate
            if entry.depth() == 0 || entry.file_type().is_dir() {
                continue;
            }

            // Links to directories are neither followed nor read
            if entry.path_is_symlink() && entry.path().is_dir() {
                trace!(path = %entry.path().display(), "skipping directory symlink");
                continue;
            }

            return Some(Ok(Candidate::new(entry.into_path())));
        }
    }
}
