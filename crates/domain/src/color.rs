//! Theme colours and the built-in palette.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::FieldError;
use crate::range::{BRIGHTNESS, HUE, KELVIN, SATURATION};

/// Kelvin used when a colour does not specify one.
pub const DEFAULT_KELVIN: i64 = 3500;

/// One fully-specified colour of a theme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Color {
    pub hue: Number,
    pub saturation: Number,
    pub brightness: Number,
    pub kelvin: i64,
}

impl Color {
    /// Validate a raw colour, filling unset components with the schedule
    /// defaults (hue 0, saturation 0, brightness 1, kelvin 3500).
    ///
    /// `field` prefixes the component name in errors (e.g. `colors[2]`).
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] naming the first component out of range.
    pub fn from_input(field: &str, input: &ColorInput) -> Result<Self, FieldError> {
        let at = |component: &str| format!("{field}.{component}");
        let hue = input.hue.clone().unwrap_or_else(|| Number::from(0));
        let saturation = input.saturation.clone().unwrap_or_else(|| Number::from(0));
        let brightness = input.brightness.clone().unwrap_or_else(|| Number::from(1));
        let kelvin = input.kelvin.unwrap_or(DEFAULT_KELVIN);

        Ok(Self {
            hue: HUE
                .check_number(&hue)
                .map_err(|e| FieldError::new(at("hue"), e))?,
            saturation: SATURATION
                .check_number(&saturation)
                .map_err(|e| FieldError::new(at("saturation"), e))?,
            brightness: BRIGHTNESS
                .check_number(&brightness)
                .map_err(|e| FieldError::new(at("brightness"), e))?,
            kelvin: KELVIN
                .check(kelvin)
                .map_err(|e| FieldError::new(at("kelvin"), e))?,
        })
    }

    fn palette_entry(hue: u64) -> Self {
        Self {
            hue: Number::from(hue),
            saturation: Number::from(1),
            brightness: Number::from_f64(0.3).unwrap_or_else(|| Number::from(0)),
            kelvin: DEFAULT_KELVIN,
        }
    }
}

/// The seven-colour theme applied when a theme schedule gives no colours.
#[must_use]
pub fn default_palette() -> Vec<Color> {
    [0, 40, 60, 127, 187, 236, 288]
        .into_iter()
        .map(Color::palette_entry)
        .collect()
}

/// Raw colour as written in configuration; every component is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorInput {
    pub hue: Option<Number>,
    pub saturation: Option<Number>,
    pub brightness: Option<Number>,
    pub kelvin: Option<i64>,
}
