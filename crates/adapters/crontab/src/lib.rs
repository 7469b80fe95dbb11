//! # daydusk-adapter-crontab
//!
//! Crontab implementation of the [`JobWriter`] port.
//!
//! Each job becomes one line, `<minute> <hour> * * <days> <command>`,
//! preceded by a `# <schedule>` comment. The file is written to a temporary
//! sibling and renamed over the destination, so readers see either the old
//! crontab or the complete new one. The replacement keeps the permissions of
//! the file it replaces, or gets `0644` when there was none.

pub mod config;
pub mod error;

use std::io::Write as _;
use std::path::Path;

use daydusk_app::ports::JobWriter;
use daydusk_domain::error::DayDuskError;
use daydusk_domain::job::JobDescriptor;

pub use config::CrontabConfig;
pub use error::WriterError;

const HEADER: &str = "# Generated by daydusk. Manual changes are overwritten on the next run.\n";
const DISCARD_OUTPUT: &str = " >/dev/null";
#[cfg(unix)]
const DEFAULT_MODE: u32 = 0o644;

/// Writes jobs as a crontab file.
#[derive(Debug, Clone, Default)]
pub struct CrontabWriter {
    config: CrontabConfig,
}

impl CrontabWriter {
    #[must_use]
    pub fn new(config: CrontabConfig) -> Self {
        Self { config }
    }

    /// Render a single crontab entry (without the trailing newline).
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::LineBreak`] if the schedule name or the command
    /// contains a line break, which would split the entry in two.
    pub fn entry(&self, job: &JobDescriptor) -> Result<String, WriterError> {
        if has_line_break(&job.schedule) || has_line_break(&job.command_line) {
            return Err(WriterError::LineBreak {
                schedule: job.schedule.escape_debug().to_string(),
            });
        }
        let days = job
            .trigger_days
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(",");
        // cron turns an unescaped `%` into a newline
        let command = job.command_line.replace('%', "\\%");
        let suffix = if self.config.discard_output {
            DISCARD_OUTPUT
        } else {
            ""
        };
        Ok(format!(
            "{} {} * * {} {}{}",
            job.trigger_minute, job.trigger_hour, days, command, suffix
        ))
    }

    fn replace(&self, contents: &str, destination: &Path) -> Result<bool, WriterError> {
        let dir = destination
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let temp_err = |source: std::io::Error| WriterError::Temp {
            dir: dir.display().to_string(),
            source,
        };

        let mut file = tempfile::Builder::new()
            .prefix(".daydusk-")
            .suffix(".crontab")
            .tempfile_in(dir)
            .map_err(temp_err)?;
        file.write_all(contents.as_bytes()).map_err(temp_err)?;
        #[cfg(unix)]
        file.as_file()
            .set_permissions(permissions_for(destination)?)
            .map_err(|source| WriterError::Permissions {
                path: destination.display().to_string(),
                source,
            })?;
        file.as_file().sync_all().map_err(temp_err)?;

        let replaced = destination.exists();
        file.persist(destination)
            .map_err(|err| WriterError::Persist {
                path: destination.display().to_string(),
                source: err.error,
            })?;
        Ok(replaced)
    }
}

fn has_line_break(value: &str) -> bool {
    value.contains(['\n', '\r'])
}

/// Permissions of the file being replaced, or `0644` for a new one.
#[cfg(unix)]
fn permissions_for(destination: &Path) -> Result<std::fs::Permissions, WriterError> {
    use std::os::unix::fs::PermissionsExt as _;

    match std::fs::metadata(destination) {
        Ok(metadata) => Ok(metadata.permissions()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Ok(std::fs::Permissions::from_mode(DEFAULT_MODE))
        }
        Err(source) => Err(WriterError::Permissions {
            path: destination.display().to_string(),
            source,
        }),
    }
}

impl JobWriter for CrontabWriter {
    fn render(&self, jobs: &[JobDescriptor]) -> Result<String, DayDuskError> {
        let mut out = String::new();
        if self.config.header {
            out.push_str(HEADER);
        }
        for job in jobs {
            let entry = self.entry(job)?;
            out.push_str(&format!("# {}\n{entry}\n", job.schedule));
        }
        Ok(out)
    }

    #[tracing::instrument(skip_all, fields(destination = %destination.display(), jobs = jobs.len()))]
    fn write(&self, jobs: &[JobDescriptor], destination: &Path) -> Result<(), DayDuskError> {
        let contents = self.render(jobs)?;
        let replaced = self.replace(&contents, destination)?;
        tracing::debug!(replaced, "crontab written");
        Ok(())
    }
}
