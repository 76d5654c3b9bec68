//! CLI library components for docqc.

pub mod inputs;
pub mod logging;
