//! Crontab adapter error types.

use daydusk_domain::error::DayDuskError;

/// Errors raised while replacing the crontab file.
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// Creating or writing the temporary file failed.
    #[error("failed to write temporary crontab in {dir}")]
    Temp {
        dir: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading or applying the destination's permissions failed.
    #[error("failed to set permissions for {path}")]
    Permissions {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A job would not fit on a single crontab line.
    #[error("job `{schedule}` spans several lines and cannot be written to a crontab")]
    LineBreak { schedule: String },

    /// Moving the temporary file over the destination failed.
    #[error("failed to replace {path}")]
    Persist {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<WriterError> for DayDuskError {
    fn from(err: WriterError) -> Self {
        Self::Output(Box::new(err))
    }
}
