//! Backends module - Filesystem access
//!
//! Provides:
//! - walk: Candidate discovery with walkdir and the FileTree seam
//! - memory: In-memory FileTree (tests only)

pub mod walk;

#[cfg(test)]
pub mod memory;
