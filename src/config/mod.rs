//! Configuration model for passcheck.
//!
//! This module defines the Config struct that represents `passcheck.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of config values.
//!
//! Only presentation and logging are configurable. The password rules are
//! fixed and have no config knobs.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use operations::CONFIG_FILE_NAME;
pub use types::{LogFormat, OutputFormat};
