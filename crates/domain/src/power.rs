//! Power state — normalised to `"on"` / `"off"`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const ACCEPTED: &str = "on, ON, true, 1, off, OFF, false, 0";

/// Requested power state of the target devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Power {
    On,
    Off,
}

impl Power {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw power value as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PowerInput {
    Flag(bool),
    Number(i64),
    Text(String),
    /// Any other JSON shape, kept so it can be reported as an invalid value.
    Other(serde_json::Value),
}

impl TryFrom<&PowerInput> for Power {
    type Error = ValidationError;

    /// Only `on`/`ON`/`true`/`1` and `off`/`OFF`/`false`/`0` are accepted.
    fn try_from(input: &PowerInput) -> Result<Self, Self::Error> {
        match input {
            PowerInput::Flag(true) | PowerInput::Number(1) => Ok(Self::On),
            PowerInput::Flag(false) | PowerInput::Number(0) => Ok(Self::Off),
            PowerInput::Text(text) if text == "on" || text == "ON" => Ok(Self::On),
            PowerInput::Text(text) if text == "off" || text == "OFF" => Ok(Self::Off),
            PowerInput::Number(n) => Err(invalid(n.to_string())),
            PowerInput::Text(text) => Err(invalid(text.clone())),
            PowerInput::Other(value) => Err(invalid(value.to_string())),
        }
    }
}

fn invalid(value: String) -> ValidationError {
    ValidationError::InvalidEnumValue {
        value,
        accepted: ACCEPTED,
    }
}
