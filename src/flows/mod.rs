//! Flows module - End-to-end operations
//!
//! Provides:
//! - aggregate: Concatenate matching files into a single snapshot

pub mod aggregate;
