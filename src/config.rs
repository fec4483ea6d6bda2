use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Which normalization a stream request gets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Values are non-negative weights, see [`crate::normalize_inplace`].
    #[default]
    Linear,
    /// Values are log-weights, see [`crate::log_normalize_inplace`].
    Log,
}

/// Settings for the `normalize_stream` binary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Axis used when a request does not name one. `None` normalizes the
    /// whole array (or each whole segment).
    pub axis: Option<usize>,
    pub domain: Domain,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/normalize_stream.ndjson"),
            output: PathBuf::from("out/normalize_stream.ndjson"),
            axis: Some(1),
            domain: Domain::Linear,
        }
    }
}

impl StreamConfig {
    /// Reads a JSON config file; missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
