//! Schedule collection — every schedule of one run, in configuration order.

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::error::DayDuskError;
use crate::schedule::{Schedule, ScheduleInput};

/// Raw, order-preserving `name → schedule` mapping.
///
/// Deserializing rejects duplicate names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleInputs(Vec<(String, ScheduleInput)>);

impl ScheduleInputs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a schedule, replacing (in place) any existing one with the
    /// same name.
    pub fn insert(&mut self, name: impl Into<String>, input: ScheduleInput) -> Option<ScheduleInput> {
        let name = name.into();
        if let Some((_, existing)) = self.0.iter_mut().find(|(n, _)| *n == name) {
            return Some(std::mem::replace(existing, input));
        }
        self.0.push((name, input));
        None
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScheduleInput)> {
        self.0.iter().map(|(name, input)| (name.as_str(), input))
    }
}

impl<N: Into<String>> FromIterator<(N, ScheduleInput)> for ScheduleInputs {
    fn from_iter<I: IntoIterator<Item = (N, ScheduleInput)>>(iter: I) -> Self {
        let mut inputs = Self::new();
        for (name, input) in iter {
            inputs.insert(name, input);
        }
        inputs
    }
}

impl<'de> Deserialize<'de> for ScheduleInputs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct InputsVisitor;

        impl<'de> Visitor<'de> for InputsVisitor {
            type Value = ScheduleInputs;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of schedule name to schedule")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut inputs = ScheduleInputs::new();
                while let Some((name, input)) = map.next_entry::<String, ScheduleInput>()? {
                    if inputs.iter().any(|(existing, _)| existing == name) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate schedule `{name}`"
                        )));
                    }
                    inputs.0.push((name, input));
                }
                Ok(inputs)
            }
        }

        deserializer.deserialize_map(InputsVisitor)
    }
}

/// A validated, non-empty set of schedules.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleCollection {
    schedules: Vec<Schedule>,
}

impl ScheduleCollection {
    /// Validate every input. Validation is all-or-nothing: the first invalid
    /// schedule fails the whole collection.
    ///
    /// # Errors
    ///
    /// Returns [`DayDuskError::EmptyScheduleSet`] when `inputs` is empty, or
    /// [`DayDuskError::InvalidSchedule`] for the first invalid schedule.
    pub fn from_inputs(inputs: &ScheduleInputs) -> Result<Self, DayDuskError> {
        if inputs.is_empty() {
            return Err(DayDuskError::EmptyScheduleSet);
        }
        let schedules = inputs
            .iter()
            .map(|(name, input)| Schedule::from_input(name, input))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { schedules })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    /// Always `false`; kept for API symmetry with [`len`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Schedule> {
        self.schedules.iter()
    }
}

impl<'a> IntoIterator for &'a ScheduleCollection {
    type Item = &'a Schedule;
    type IntoIter = std::slice::Iter<'a, Schedule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
