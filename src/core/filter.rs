//! Extension filter
//!
//! Matching is a plain, case-sensitive suffix test on the file name. It is not
//! a true extension check: a file named exactly `.go` matches `.go`.

use std::ffi::OsStr;

use crate::core::error::{Result, SnapError};

/// A fixed, non-empty set of file-name suffixes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    /// Build a filter from a set of suffixes such as `.go` or `.sql`
    pub fn new<I, S>(extensions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut suffixes: Vec<String> = Vec::new();
        for ext in extensions {
            let ext = ext.into();
            if ext.is_empty() {
                return Err(SnapError::InvalidExtension);
            }
            if !suffixes.contains(&ext) {
                suffixes.push(ext);
            }
        }

        if suffixes.is_empty() {
            return Err(SnapError::EmptyFilter);
        }

        Ok(Self { suffixes })
    }

    /// Whether a file name ends with any of the suffixes
    pub fn matches(&self, name: &OsStr) -> bool {
        let name = name.as_encoded_bytes();
        self.suffixes
            .iter()
            .any(|suffix| name.ends_with(suffix.as_bytes()))
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}
