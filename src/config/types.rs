//! Configuration types and defaults for passcheck.

use serde::{Deserialize, Serialize};

/// How verdicts are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable lines (default).
    #[default]
    Text,
    /// A `{"valid": ..., "message": ...}` JSON object.
    Json,
}

/// How log lines are written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Compact human-readable lines (default).
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

// Default value functions for serde
pub(crate) fn default_log_filter() -> String {
    "warn".to_string()
}
