//! Task selector — which operation the external command performs.
//!
//! Unlike power and day values, the task is never rejected: anything other
//! than the exact theme literal falls back to [`Task::Transform`].

use std::fmt;

/// Operation run by the generated job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Task {
    #[default]
    Transform,
    ApplyTheme,
}

impl Task {
    /// The literal (case-sensitive) that selects [`Task::ApplyTheme`].
    pub const THEME_LITERAL: &'static str = "apply_theme";

    /// Resolve a configured task with the fallback policy: absent or
    /// unrecognised values become [`Task::Transform`].
    #[must_use]
    pub fn resolve_with_fallback(input: Option<&str>) -> Self {
        match input {
            Some(Self::THEME_LITERAL) => Self::ApplyTheme,
            _ => Self::Transform,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transform => "transform",
            Self::ApplyTheme => "apply_theme",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
