//! Job compiler — turns validated schedules into job descriptors.
//!
//! Compilation is pure: the executable path comes in through
//! [`JobCompiler::new`], and the same collection always compiles to the same
//! descriptors.

use std::path::Path;

use daydusk_domain::collection::ScheduleCollection;
use daydusk_domain::error::DayDuskError;
use daydusk_domain::job::JobDescriptor;
use daydusk_domain::schedule::Schedule;
use daydusk_domain::task::Task;

use crate::shell;

/// Flag asking the external command to suppress its own output.
pub const SILENT_FLAG: &str = "--silent";

/// How the external command is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOptions {
    /// Prefix of the task argument (`lan` gives `lan:transform`); empty for
    /// a bare task name.
    pub target: String,
    /// Pass [`SILENT_FLAG`].
    pub silent: bool,
}

impl Default for CommandOptions {
    fn default() -> Self {
        Self {
            target: "lan".to_string(),
            silent: true,
        }
    }
}

/// Compiles schedules against one located executable.
#[derive(Debug, Clone)]
pub struct JobCompiler {
    executable: String,
    options: CommandOptions,
}

impl JobCompiler {
    pub fn new(executable: impl AsRef<Path>, options: CommandOptions) -> Self {
        Self {
            executable: executable.as_ref().to_string_lossy().into_owned(),
            options,
        }
    }

    /// The task argument passed to the executable.
    #[must_use]
    pub fn task_argument(&self, task: Task) -> String {
        if self.options.target.is_empty() {
            task.as_str().to_string()
        } else {
            format!("{}:{}", self.options.target, task)
        }
    }

    /// Compile a single schedule.
    ///
    /// # Errors
    ///
    /// Returns [`DayDuskError::Serialization`] if the payload cannot be
    /// encoded as JSON.
    pub fn compile_schedule(&self, schedule: &Schedule) -> Result<JobDescriptor, DayDuskError> {
        let payload = schedule
            .payload()
            .to_json()
            .map_err(|source| DayDuskError::Serialization {
                schedule: schedule.name().to_string(),
                source,
            })?;

        let mut argv = vec![
            self.executable.clone(),
            self.task_argument(schedule.task()),
            schedule.reference().to_string(),
        ];
        if self.options.silent {
            argv.push(SILENT_FLAG.to_string());
        }
        argv.push("--".to_string());
        argv.push(payload);

        Ok(JobDescriptor {
            schedule: schedule.name().to_string(),
            trigger_hour: schedule.hour(),
            trigger_minute: schedule.minute(),
            trigger_days: schedule.effective_days(),
            command_line: shell::join(&argv),
            command_argv: argv,
        })
    }

    /// Compile every schedule, in collection order.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`compile_schedule`](Self::compile_schedule).
    pub fn compile(&self, schedules: &ScheduleCollection) -> Result<Vec<JobDescriptor>, DayDuskError> {
        schedules
            .iter()
            .map(|schedule| self.compile_schedule(schedule))
            .collect()
    }
}
