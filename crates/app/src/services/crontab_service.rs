//! Crontab service — validate, locate, compile, write.

use std::path::Path;

use daydusk_domain::collection::{ScheduleCollection, ScheduleInputs};
use daydusk_domain::error::DayDuskError;
use daydusk_domain::job::JobDescriptor;

use crate::compiler::{CommandOptions, JobCompiler};
use crate::ports::{ExecutableLocator, JobWriter};

/// Turns raw schedule configuration into a scheduler file.
pub struct CrontabService<L, W> {
    locator: L,
    writer: W,
    options: CommandOptions,
}

impl<L: ExecutableLocator, W: JobWriter> CrontabService<L, W> {
    /// Create a new service backed by the given locator and writer.
    pub fn new(locator: L, writer: W, options: CommandOptions) -> Self {
        Self {
            locator,
            writer,
            options,
        }
    }

    /// Validate every schedule, locate the executable and compile the jobs.
    ///
    /// Validation runs first, so an invalid configuration is reported even
    /// when the executable is missing.
    ///
    /// # Errors
    ///
    /// Returns [`DayDuskError::EmptyScheduleSet`] or
    /// [`DayDuskError::InvalidSchedule`] for bad configuration,
    /// [`DayDuskError::MissingExecutable`] from the locator, or a
    /// serialization error from the compiler.
    #[tracing::instrument(skip_all, fields(schedules = inputs.len()))]
    pub fn compile(&self, inputs: &ScheduleInputs) -> Result<Vec<JobDescriptor>, DayDuskError> {
        let collection = ScheduleCollection::from_inputs(inputs)?;
        for schedule in &collection {
            if schedule.has_unused_theme_fields() {
                tracing::warn!(
                    schedule = schedule.name(),
                    "`colors`/`override` only apply to the apply_theme task and will be ignored"
                );
            }
        }

        let executable = self.locator.locate()?;
        tracing::debug!(executable = %executable.display(), "located executable");

        let jobs = JobCompiler::new(&executable, self.options.clone()).compile(&collection)?;
        for job in &jobs {
            tracing::debug!(schedule = %job.schedule, command = %job.command_line, "compiled job");
        }
        Ok(jobs)
    }

    /// Render the compiled jobs without writing anything.
    ///
    /// # Errors
    ///
    /// Same as [`compile`](Self::compile), or [`DayDuskError::Output`] if
    /// the writer cannot render a job.
    pub fn preview(&self, inputs: &ScheduleInputs) -> Result<String, DayDuskError> {
        let jobs = self.compile(inputs)?;
        self.writer.render(&jobs)
    }

    /// Compile the jobs and replace `destination` with them.
    ///
    /// Nothing is written unless every schedule compiles.
    ///
    /// # Errors
    ///
    /// Any error from [`compile`](Self::compile), or
    /// [`DayDuskError::Output`] from the writer.
    #[tracing::instrument(skip_all, fields(destination = %destination.display()))]
    pub fn generate(
        &self,
        inputs: &ScheduleInputs,
        destination: &Path,
    ) -> Result<Vec<JobDescriptor>, DayDuskError> {
        let jobs = self.compile(inputs)?;
        self.writer.write(&jobs, destination)?;
        tracing::info!(jobs = jobs.len(), "wrote schedule file");
        Ok(jobs)
    }
}
