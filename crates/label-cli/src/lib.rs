//! CLI library components for the label normalizer.

pub mod commands;
pub mod logging;
