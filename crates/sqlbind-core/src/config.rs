//! Declarative configuration
//!
//! Delimiters can be loaded from TOML:
//!
//! ```toml
//! [delimiters]
//! left = ":"
//! right = ""
//! ```
//!
//! Missing keys fall back to the defaults (`:` and empty).

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::delimiters::DelimiterPair;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindConfig {
    #[serde(default)]
    pub delimiters: DelimiterPair,
}

impl BindConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(
            path = %path.display(),
            left = %config.delimiters.left,
            right = %config.delimiters.right,
            "bind config loaded"
        );
        Ok(config)
    }
}
