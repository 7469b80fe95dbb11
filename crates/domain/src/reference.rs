//! Device reference — an opaque selector for the lights to target.
//!
//! Either empty (every device that can be discovered) or a comma-joined
//! list of targets such as `d073d5001337` or `match:label=kitchen`.

use std::fmt;

use serde::Deserialize;

use crate::error::ValidationError;

/// Placeholder meaning "all devices", same as an empty reference.
pub const ALL_DEVICES: &str = "_";

/// Normalised device reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Reference(String);

impl Reference {
    /// Reference to every discoverable device.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Targets end up verbatim on a crontab line, so control characters are refused.
impl TryFrom<Option<&ReferenceInput>> for Reference {
    type Error = ValidationError;

    fn try_from(input: Option<&ReferenceInput>) -> Result<Self, Self::Error> {
        let joined = match input {
            None => return Ok(Self::all()),
            Some(ReferenceInput::One(target)) => target.clone(),
            Some(ReferenceInput::Many(targets)) => targets.join(","),
        };
        ValidationError::check_printable(&joined)?;
        if joined == ALL_DEVICES {
            return Ok(Self::all());
        }
        Ok(Self(joined))
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw reference as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ReferenceInput {
    One(String),
    Many(Vec<String>),
}
