//! Shared utilities for docqc crates.
//!
//! This crate provides the filename helpers used by both engines:
//! extension stripping and the normalized comparison key.

pub mod names;

// Re-export commonly used functions at crate root for convenience
pub use names::{collapse_whitespace, is_blank, normalize_name, strip_extension};
