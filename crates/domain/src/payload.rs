//! JSON parameter payload handed to the external command.
//!
//! Each struct names exactly the keys it may contribute, so the structural
//! fields (`days`, `hour`, `minute`, `reference`, `task`) can never leak into
//! the payload. Keys are emitted in declaration order; unset fields are
//! omitted.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Number;

use crate::color::Color;
use crate::power::Power;

/// Explicitly configured colour fields of a transform schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColorPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kelvin: Option<i64>,
}

impl ColorPayload {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hue.is_none()
            && self.saturation.is_none()
            && self.brightness.is_none()
            && self.kelvin.is_none()
    }
}

/// Every other optional parameter that was set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtraPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<Power>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_options: Option<BTreeMap<String, bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<Color>>,
    #[serde(rename = "override", skip_serializing_if = "Option::is_none")]
    pub overrides: Option<BTreeMap<String, Number>>,
}

/// Colour payload merged with the extra payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Payload {
    #[serde(flatten)]
    pub color: ColorPayload,
    #[serde(flatten)]
    pub extra: ExtraPayload,
}

impl Payload {
    #[must_use]
    pub fn new(color: ColorPayload, extra: ExtraPayload) -> Self {
        Self { color, extra }
    }

    /// Encode as a compact JSON object.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] if a value cannot be encoded.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
