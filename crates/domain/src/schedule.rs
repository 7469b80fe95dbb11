//! Schedule — one named rule describing when and how to command lights.
//!
//! A [`Schedule`] is built from a raw [`ScheduleInput`] in one pass. Every
//! field goes through its validator and the first failure aborts
//! construction, so a `Schedule` value is always fully valid.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;
use serde_json::Number;

use crate::color::{Color, ColorInput, default_palette};
use crate::day::{Day, DayInput};
use crate::error::{DayDuskError, FieldError, ValidationError};
use crate::payload::{ColorPayload, ExtraPayload, Payload};
use crate::power::{Power, PowerInput};
use crate::range::{BRIGHTNESS, DURATION, HOUR, HUE, KELVIN, MINUTE, OVERRIDE, SATURATION};
use crate::reference::{Reference, ReferenceInput};
use crate::task::Task;

/// Raw schedule as written in configuration, before validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleInput {
    pub hour: Option<i64>,
    pub minute: Option<i64>,
    pub days: Option<Vec<DayInput>>,
    pub task: Option<String>,
    pub reference: Option<ReferenceInput>,
    pub hue: Option<Number>,
    pub saturation: Option<Number>,
    pub brightness: Option<Number>,
    pub kelvin: Option<i64>,
    pub duration: Option<Number>,
    pub power: Option<PowerInput>,
    pub colors: Option<Vec<ColorInput>>,
    #[serde(rename = "override")]
    pub overrides: Option<BTreeMap<String, Number>>,
    pub transform_options: Option<BTreeMap<String, bool>>,
}

/// A validated schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    name: String,
    hour: u8,
    minute: u8,
    days: BTreeSet<Day>,
    task: Task,
    reference: Reference,
    color: ColorPayload,
    duration: Option<Number>,
    power: Option<Power>,
    colors: Option<Vec<Color>>,
    overrides: Option<BTreeMap<String, Number>>,
    transform_options: Option<BTreeMap<String, bool>>,
}

impl Schedule {
    /// Validate `input` into a schedule called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`DayDuskError::InvalidSchedule`] naming the schedule, the
    /// field and the violated constraint of the first invalid field.
    pub fn from_input(name: impl Into<String>, input: &ScheduleInput) -> Result<Self, DayDuskError> {
        let name = name.into();
        Self::validate(name.clone(), input).map_err(|source| DayDuskError::InvalidSchedule {
            schedule: name,
            source,
        })
    }

    fn validate(name: String, input: &ScheduleInput) -> Result<Self, FieldError> {
        ValidationError::check_printable(&name).map_err(|e| FieldError::new("name", e))?;

        let hour = required("hour", input.hour).and_then(|h| in_bounds_u8("hour", HOUR.check(h)))?;
        let minute =
            required("minute", input.minute).and_then(|m| in_bounds_u8("minute", MINUTE.check(m)))?;

        let days = input
            .days
            .iter()
            .flatten()
            .enumerate()
            .map(|(idx, day)| {
                Day::try_from(day).map_err(|e| FieldError::new(format!("days[{idx}]"), e))
            })
            .collect::<Result<BTreeSet<_>, _>>()?;

        let task = Task::resolve_with_fallback(input.task.as_deref());

        let reference = Reference::try_from(input.reference.as_ref())
            .map_err(|e| FieldError::new("reference", e))?;

        let color = ColorPayload {
            hue: optional_number("hue", input.hue.as_ref(), |n| HUE.check_number(n))?,
            saturation: optional_number("saturation", input.saturation.as_ref(), |n| {
                SATURATION.check_number(n)
            })?,
            brightness: optional_number("brightness", input.brightness.as_ref(), |n| {
                BRIGHTNESS.check_number(n)
            })?,
            kelvin: input
                .kelvin
                .map(|k| KELVIN.check(k))
                .transpose()
                .map_err(|e| FieldError::new("kelvin", e))?,
        };

        let duration = optional_number("duration", input.duration.as_ref(), |n| {
            DURATION.check_number(n)
        })?;

        let power = input
            .power
            .as_ref()
            .map(Power::try_from)
            .transpose()
            .map_err(|e| FieldError::new("power", e))?;

        let colors = match &input.colors {
            Some(colors) if !colors.is_empty() => Some(
                colors
                    .iter()
                    .enumerate()
                    .map(|(idx, c)| Color::from_input(&format!("colors[{idx}]"), c))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Some(_) => Some(default_palette()),
            None if task == Task::ApplyTheme => Some(default_palette()),
            None => None,
        };

        let overrides = input
            .overrides
            .as_ref()
            .map(|overrides| {
                overrides
                    .iter()
                    .map(|(key, value)| {
                        OVERRIDE
                            .check_number(value)
                            .map(|v| (key.clone(), v))
                            .map_err(|e| FieldError::new(format!("override.{key}"), e))
                    })
                    .collect::<Result<BTreeMap<_, _>, _>>()
            })
            .transpose()?;

        Ok(Self {
            name,
            hour,
            minute,
            days,
            task,
            reference,
            color,
            duration,
            power,
            colors,
            overrides,
            transform_options: input.transform_options.clone(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    #[must_use]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// The days given in configuration; empty means every day.
    #[must_use]
    pub fn days(&self) -> &BTreeSet<Day> {
        &self.days
    }

    #[must_use]
    pub fn task(&self) -> Task {
        self.task
    }

    #[must_use]
    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    /// Theme colours, resolved to the default palette where applicable.
    #[must_use]
    pub fn colors(&self) -> Option<&[Color]> {
        self.colors.as_deref()
    }

    #[must_use]
    pub fn overrides(&self) -> Option<&BTreeMap<String, Number>> {
        self.overrides.as_ref()
    }

    /// Whether theme-only fields were set on a transform schedule.
    ///
    /// They are passed through unchanged; the external tool ignores them.
    #[must_use]
    pub fn has_unused_theme_fields(&self) -> bool {
        self.task == Task::Transform && (self.colors.is_some() || self.overrides.is_some())
    }

    /// Day-of-week codes this schedule fires on.
    #[must_use]
    pub fn effective_days(&self) -> BTreeSet<u8> {
        if self.days.is_empty() {
            Day::ALL.iter().map(|d| d.code()).collect()
        } else {
            self.days.iter().map(|d| d.code()).collect()
        }
    }

    /// Colour fields to send; empty for theme schedules, which carry colour
    /// in `colors`/`override` instead.
    #[must_use]
    pub fn color_payload(&self) -> ColorPayload {
        match self.task {
            Task::Transform => self.color.clone(),
            Task::ApplyTheme => ColorPayload::default(),
        }
    }

    /// Every other optional parameter that is set.
    #[must_use]
    pub fn extra_payload(&self) -> ExtraPayload {
        ExtraPayload {
            duration: self.duration.clone(),
            power: self.power,
            transform_options: self.transform_options.clone(),
            colors: self.colors.clone(),
            overrides: self.overrides.clone(),
        }
    }

    /// Colour payload merged with the extra payload.
    #[must_use]
    pub fn payload(&self) -> Payload {
        Payload::new(self.color_payload(), self.extra_payload())
    }
}

fn required(field: &str, value: Option<i64>) -> Result<i64, FieldError> {
    value.ok_or_else(|| FieldError::new(field, ValidationError::Missing))
}

fn in_bounds_u8(field: &str, checked: Result<i64, ValidationError>) -> Result<u8, FieldError> {
    checked
        .map(|v| u8::try_from(v).unwrap_or(u8::MAX))
        .map_err(|e| FieldError::new(field, e))
}

fn optional_number(
    field: &str,
    value: Option<&Number>,
    check: impl Fn(&Number) -> Result<Number, ValidationError>,
) -> Result<Option<Number>, FieldError> {
    value
        .map(check)
        .transpose()
        .map_err(|e| FieldError::new(field, e))
}
