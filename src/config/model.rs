//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for passcheck.
///
/// This struct represents the contents of `passcheck.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Output settings
    // =========================================================================
    /// Format used to print verdicts. `--format` overrides this.
    #[serde(default)]
    pub output_format: OutputFormat,

    // =========================================================================
    // Logging settings
    // =========================================================================
    /// Format of log lines on stderr.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Tracing filter directive (e.g. `"info"` or `"passcheck=debug"`).
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            log_format: LogFormat::default(),
            log_filter: default_log_filter(),
        }
    }
}
