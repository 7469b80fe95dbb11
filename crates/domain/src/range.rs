//! Bounded numeric ranges.
//!
//! Values are accepted unchanged when `minimum <= value <= maximum` and
//! rejected otherwise. Nothing is ever clamped.

use serde_json::Number;

use crate::error::ValidationError;

/// A numeric type that can be range-checked and reported in errors.
pub trait RangeValue: PartialOrd + Copy {
    fn to_f64(self) -> f64;
}

impl RangeValue for i64 {
    #[allow(clippy::cast_precision_loss)]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl RangeValue for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

/// Inclusive bounds for a numeric field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub minimum: T,
    pub maximum: T,
}

impl<T: RangeValue> Bounds<T> {
    #[must_use]
    pub const fn new(minimum: T, maximum: T) -> Self {
        Self { minimum, maximum }
    }

    /// Check `value` against these bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] when `value` is outside the bounds.
    pub fn check(&self, value: T) -> Result<T, ValidationError> {
        check_range(value, self.minimum, self.maximum)
    }
}

impl Bounds<f64> {
    /// Check a JSON number, keeping its integer/float representation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] when `value` is outside the bounds.
    pub fn check_number(&self, value: &Number) -> Result<Number, ValidationError> {
        self.check(value.as_f64().unwrap_or(f64::NAN))?;
        Ok(value.clone())
    }
}

pub const HOUR: Bounds<i64> = Bounds::new(0, 23);
pub const MINUTE: Bounds<i64> = Bounds::new(0, 59);
pub const HUE: Bounds<f64> = Bounds::new(0.0, 360.0);
pub const SATURATION: Bounds<f64> = Bounds::new(0.0, 1.0);
pub const BRIGHTNESS: Bounds<f64> = Bounds::new(0.0, 1.0);
pub const KELVIN: Bounds<i64> = Bounds::new(1500, 9000);
pub const DURATION: Bounds<f64> = Bounds::new(0.0, f64::INFINITY);
pub const OVERRIDE: Bounds<f64> = Bounds::new(0.0, 1.0);

/// Return `value` unchanged if it lies within `[minimum, maximum]`.
///
/// `NaN` never satisfies the bounds.
///
/// # Errors
///
/// Returns [`ValidationError::OutOfRange`] carrying the value and both bounds.
pub fn check_range<T: RangeValue>(value: T, minimum: T, maximum: T) -> Result<T, ValidationError> {
    if minimum <= value && value <= maximum {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            value: value.to_f64(),
            minimum: minimum.to_f64(),
            maximum: maximum.to_f64(),
        })
    }
}
