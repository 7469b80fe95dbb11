//! Day of week, as understood by cron (`SUNDAY = 0`).

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ValidationError;

const ACCEPTED: &str =
    "SUNDAY, MONDAY, TUESDAY, WEDNESDAY, THURSDAY, FRIDAY, SATURDAY or 0..=6";

/// A day of the week backed by a stable integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Day {
    /// Every day, in code order.
    pub const ALL: [Day; 7] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Cron day-of-week code.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sunday => "SUNDAY",
            Self::Monday => "MONDAY",
            Self::Tuesday => "TUESDAY",
            Self::Wednesday => "WEDNESDAY",
            Self::Thursday => "THURSDAY",
            Self::Friday => "FRIDAY",
            Self::Saturday => "SATURDAY",
        }
    }

    /// Look a day up by its cron code.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidEnumValue`] for codes outside `0..=6`.
    pub fn from_code(code: i64) -> Result<Self, ValidationError> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or_else(|| invalid(code.to_string()))
    }
}

impl FromStr for Day {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day| day.name() == s)
            .ok_or_else(|| invalid(s.to_string()))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn invalid(value: String) -> ValidationError {
    ValidationError::InvalidEnumValue {
        value,
        accepted: ACCEPTED,
    }
}

/// Raw day as written in configuration: a name or a code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DayInput {
    Code(i64),
    Name(String),
    /// Any other JSON shape, kept so it can be reported as an invalid value.
    Other(serde_json::Value),
}

impl TryFrom<&DayInput> for Day {
    type Error = ValidationError;

    fn try_from(input: &DayInput) -> Result<Self, Self::Error> {
        match input {
            DayInput::Code(code) => Day::from_code(*code),
            DayInput::Name(name) => name.parse(),
            DayInput::Other(value) => Err(invalid(value.to_string())),
        }
    }
}

impl From<Day> for DayInput {
    fn from(day: Day) -> Self {
        Self::Name(day.name().to_string())
    }
}
