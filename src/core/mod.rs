//! Core module - Fundamental types shared by the walker and the aggregator
//!
//! This module provides:
//! - The error taxonomy (SnapError)
//! - Extension filtering
//! - Snapshot presets and run configuration
//! - Entry record rendering

pub mod error;
pub mod filter;
pub mod preset;
pub mod render;
