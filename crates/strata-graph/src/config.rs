//! Analyzer configuration.
//!
//! None of these settings change query results on graphs that finish
//! within the configured bounds; they only trade memory for time or cap
//! runaway enumerations.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default tolerance when comparing centrality scores for top-k ties.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tuning knobs for shortest-path enumeration and centrality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Reuse path enumerations for a vertex pair within one centrality pass.
    pub memoize: bool,

    /// Upper bound on partial or completed paths held for one pair.
    /// `None` means unbounded.
    pub max_paths: Option<usize>,

    /// Absolute tolerance for treating two scores as tied.
    pub tolerance: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            memoize: true,
            max_paths: None,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl AnalyzerConfig {
    /// Loads a config from a JSON file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Sets the per-pair enumeration bound.
    pub fn with_max_paths(mut self, limit: usize) -> Self {
        self.max_paths = Some(limit);
        self
    }

    /// Enables or disables the per-pass pair cache.
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }
}
