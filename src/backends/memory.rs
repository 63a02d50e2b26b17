//! In-memory file tree for exercising the aggregator without touching disk

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::backends::walk::{Candidate, FileTree};
use crate::core::error::{Result, SnapError};

#[derive(Debug, Clone)]
enum Node {
    File(Vec<u8>),
    /// Listed by the walk but gone by the time it is read
    Vanished,
    /// Directory that cannot be listed
    Unlistable,
}

/// Files keyed by full path, walked in path order
#[derive(Debug, Default)]
pub struct MemoryTree {
    nodes: BTreeMap<PathBuf, Node>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.nodes.insert(path.into(), Node::File(content.into()));
        self
    }

    pub fn vanished(mut self, path: impl Into<PathBuf>) -> Self {
        self.nodes.insert(path.into(), Node::Vanished);
        self
    }

    pub fn unlistable(mut self, path: impl Into<PathBuf>) -> Self {
        self.nodes.insert(path.into(), Node::Unlistable);
        self
    }
}

impl FileTree for MemoryTree {
    fn walk<'a>(&'a self, root: &Path) -> Box<dyn Iterator<Item = Result<Candidate>> + 'a> {
        let root = root.to_path_buf();
        Box::new(
            self.nodes
                .iter()
                .filter(move |(path, _)| path.starts_with(&root) && *path != &root)
                .map(|(path, node)| match node {
                    Node::Unlistable => Err(SnapError::Walk {
                        path: path.clone(),
                        source: io::Error::new(io::ErrorKind::PermissionDenied, "unlistable"),
                    }),
                    _ => Ok(Candidate::new(path.clone())),
                }),
        )
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        match self.nodes.get(path) {
            Some(Node::File(bytes)) => String::from_utf8(bytes.clone()).map_err(|_| {
                SnapError::Decode {
                    path: path.to_path_buf(),
                }
            }),
            _ => Err(SnapError::Read {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            }),
        }
    }
}
