//! Common error types used across the workspace.
//!
//! Validators return a bare [`ValidationError`]. The schedule model attaches
//! the offending field ([`FieldError`]) and the schedule name
//! ([`DayDuskError::InvalidSchedule`]) on the way up, so a failure always
//! reads as `schedule → field → constraint`.

use std::fmt;

/// Top-level error for every daydusk operation.
#[derive(Debug, thiserror::Error)]
pub enum DayDuskError {
    /// The configuration declares zero schedules.
    #[error("no schedules configured, add at least one entry under `schedules`")]
    EmptyScheduleSet,

    /// The external command invoked by generated jobs could not be found.
    #[error("could not find the `{name}` executable")]
    MissingExecutable { name: String },

    /// A schedule failed validation.
    #[error("invalid schedule `{schedule}`")]
    InvalidSchedule {
        schedule: String,
        #[source]
        source: FieldError,
    },

    /// A payload could not be encoded as JSON.
    #[error("failed to serialize payload for schedule `{schedule}`")]
    Serialization {
        schedule: String,
        #[source]
        source: serde_json::Error,
    },

    /// The output writer failed.
    #[error("failed to write output")]
    Output(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DayDuskError {
    /// Stable category of this error, independent of its message.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyScheduleSet => ErrorCategory::EmptyScheduleSet,
            Self::MissingExecutable { .. } => ErrorCategory::MissingExecutable,
            Self::InvalidSchedule { source, .. } => match source.source {
                ValidationError::Missing => ErrorCategory::MissingField,
                ValidationError::OutOfRange { .. } => ErrorCategory::OutOfRange,
                ValidationError::InvalidEnumValue { .. } => ErrorCategory::InvalidEnumValue,
                ValidationError::ControlCharacter { .. } => ErrorCategory::ControlCharacter,
            },
            Self::Serialization { .. } => ErrorCategory::SerializationFailure,
            Self::Output(_) => ErrorCategory::Output,
        }
    }

    /// The validation failure behind an [`InvalidSchedule`](Self::InvalidSchedule).
    #[must_use]
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::InvalidSchedule { source, .. } => Some(&source.source),
            _ => None,
        }
    }
}

/// A validation failure attached to the field it was raised for.
#[derive(Debug, PartialEq, thiserror::Error)]
#[error("field `{field}`")]
pub struct FieldError {
    pub field: String,
    #[source]
    pub source: ValidationError,
}

impl FieldError {
    pub fn new(field: impl Into<String>, source: ValidationError) -> Self {
        Self {
            field: field.into(),
            source,
        }
    }
}

/// A value rejected by one of the validators.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was not provided.
    #[error("value is required")]
    Missing,

    /// A numeric value fell outside its inclusive bounds.
    #[error("value {value} is outside the range [{minimum}, {maximum}]")]
    OutOfRange {
        value: f64,
        minimum: f64,
        maximum: f64,
    },

    /// A token outside a closed set (power state, day, …).
    #[error("invalid value `{value}`, expected one of {accepted}")]
    InvalidEnumValue {
        value: String,
        accepted: &'static str,
    },

    /// Free text containing a control character such as a line break.
    #[error("value `{}` contains a control character", .value.escape_debug())]
    ControlCharacter { value: String },
}

impl ValidationError {
    /// Reject `value` if it contains any control character.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ControlCharacter`] carrying the value.
    pub fn check_printable(value: &str) -> Result<(), Self> {
        if value.chars().any(char::is_control) {
            return Err(Self::ControlCharacter {
                value: value.to_string(),
            });
        }
        Ok(())
    }
}

/// Stable, machine-readable error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    EmptyScheduleSet,
    MissingExecutable,
    MissingField,
    OutOfRange,
    InvalidEnumValue,
    ControlCharacter,
    SerializationFailure,
    Output,
}

impl ErrorCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmptyScheduleSet => "empty_schedule_set",
            Self::MissingExecutable => "missing_executable",
            Self::MissingField => "missing_field",
            Self::OutOfRange => "out_of_range",
            Self::InvalidEnumValue => "invalid_enum_value",
            Self::ControlCharacter => "control_character",
            Self::SerializationFailure => "serialization_failure",
            Self::Output => "output",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
