//! Harness configuration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::HarnessError;

/// Default per-analysis timeout: 30 seconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default extension of the `Invalid.<ext>` / `Valid.<ext>` samples.
pub const DEFAULT_SAMPLE_EXTENSION: &str = "java";

/// Configuration for a harness run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HarnessConfig {
    /// Directory holding one subdirectory per rule identifier.
    pub fixtures_root: Option<PathBuf>,
    /// Rule identifiers to verify. Empty means the built-in catalog.
    #[serde(default)]
    pub rules: Vec<String>,
    /// Extension of the sample files. Default: "java".
    pub sample_extension: Option<String>,
    /// Per-analysis timeout in milliseconds. 0 disables it. Default: 30000.
    pub timeout_ms: Option<u64>,
    /// Worker threads. 0 = rayon default.
    pub threads: Option<usize>,
    /// Values for `${name}` expansion inside rule configurations.
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl HarnessConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Load a configuration file. Relative `fixtures_root` paths resolve against
    /// the directory containing the file.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let text = std::fs::read_to_string(path).map_err(|e| HarnessError::Settings {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut config = Self::from_toml_str(&text).map_err(|e| HarnessError::Settings {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if let (Some(root), Some(base)) = (config.fixtures_root.as_ref(), path.parent()) {
            if root.is_relative() {
                config.fixtures_root = Some(base.join(root));
            }
        }
        tracing::debug!(
            path = %path.display(),
            rules = config.rules.len(),
            "loaded harness config"
        );
        Ok(config)
    }

    /// Returns the effective sample extension, defaulting to "java".
    pub fn effective_sample_extension(&self) -> &str {
        self.sample_extension
            .as_deref()
            .unwrap_or(DEFAULT_SAMPLE_EXTENSION)
    }

    /// Returns the effective timeout, or `None` when disabled with 0.
    pub fn effective_timeout(&self) -> Option<Duration> {
        match self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS) {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    /// Returns the effective thread count, defaulting to 0 (auto-detect).
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(0)
    }
}
