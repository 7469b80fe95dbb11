//! Job descriptor — a schedule compiled into a trigger and a command.

use std::collections::BTreeSet;

/// Trigger time plus the command to run, ready for a scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDescriptor {
    /// Name of the schedule this job was compiled from.
    pub schedule: String,
    pub trigger_hour: u8,
    pub trigger_minute: u8,
    /// Cron day-of-week codes (`SUNDAY = 0`).
    pub trigger_days: BTreeSet<u8>,
    pub command_argv: Vec<String>,
    /// `command_argv` with every argument shell-quoted, joined by spaces.
    pub command_line: String,
}
