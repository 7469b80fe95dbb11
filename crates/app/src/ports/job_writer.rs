//! Job writer port — persisting compiled jobs.

use std::path::Path;

use daydusk_domain::error::DayDuskError;
use daydusk_domain::job::JobDescriptor;

/// Persists job descriptors in a scheduler's native format.
///
/// Implementations fully replace whatever exists at `destination`: one
/// entry per job, in order, with no partial file left behind on success.
pub trait JobWriter {
    /// Render `jobs` in the scheduler format without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`DayDuskError::Output`] if a job cannot be represented in
    /// the format, e.g. a command spanning several lines.
    fn render(&self, jobs: &[JobDescriptor]) -> Result<String, DayDuskError>;

    /// Replace `destination` with the rendered `jobs`.
    ///
    /// # Errors
    ///
    /// Returns [`DayDuskError::Output`] if the artifact cannot be written.
    fn write(&self, jobs: &[JobDescriptor], destination: &Path) -> Result<(), DayDuskError>;
}
