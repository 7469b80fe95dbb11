//! # daydusk-adapter-executable
//!
//! [`ExecutableLocator`] backed by the filesystem: an explicit path must
//! point at an existing file, otherwise the program name is resolved on
//! `PATH` with [`which`].

pub mod config;

use std::path::{Path, PathBuf};

use daydusk_app::ports::ExecutableLocator;
use daydusk_domain::error::DayDuskError;

pub use config::ExecutableConfig;

/// Read-only lookup of the external command.
#[derive(Debug, Clone, Default)]
pub struct FsLocator {
    config: ExecutableConfig,
}

impl FsLocator {
    #[must_use]
    pub fn new(config: ExecutableConfig) -> Self {
        Self { config }
    }

    fn check_path(path: &Path) -> Result<PathBuf, DayDuskError> {
        if path.is_file() {
            Ok(path.to_path_buf())
        } else {
            Err(DayDuskError::MissingExecutable {
                name: path.display().to_string(),
            })
        }
    }
}

impl ExecutableLocator for FsLocator {
    fn locate(&self) -> Result<PathBuf, DayDuskError> {
        if let Some(path) = &self.config.path {
            return Self::check_path(path);
        }
        which::which(&self.config.name).map_err(|err| {
            tracing::debug!(%err, name = %self.config.name, "executable lookup failed");
            DayDuskError::MissingExecutable {
                name: self.config.name.clone(),
            }
        })
    }
}
