//! Executable lookup configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Where to find the external command.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExecutableConfig {
    /// Program name looked up on `PATH` when `path` is unset.
    pub name: String,
    /// Explicit location; skips the `PATH` lookup.
    pub path: Option<PathBuf>,
}

impl Default for ExecutableConfig {
    fn default() -> Self {
        Self {
            name: "lifx".to_string(),
            path: None,
        }
    }
}
