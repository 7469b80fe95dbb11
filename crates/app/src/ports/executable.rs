//! Executable port — locating the command every job invokes.

use std::path::PathBuf;

use daydusk_domain::error::DayDuskError;

/// Finds the external command line tool.
pub trait ExecutableLocator {
    /// Return the absolute path of the executable.
    ///
    /// # Errors
    ///
    /// Returns [`DayDuskError::MissingExecutable`] when it cannot be found.
    fn locate(&self) -> Result<PathBuf, DayDuskError>;
}
