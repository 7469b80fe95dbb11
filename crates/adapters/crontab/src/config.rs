//! Crontab writer configuration.

use serde::Deserialize;

/// How jobs are rendered into the crontab.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrontabConfig {
    /// Append ` >/dev/null` to every command.
    pub discard_output: bool,
    /// Start the file with a "generated file" comment.
    pub header: bool,
}

impl Default for CrontabConfig {
    fn default() -> Self {
        Self {
            discard_output: true,
            header: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let config = CrontabConfig::default();
        assert!(config.discard_output);
        assert!(config.header);
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let config: CrontabConfig = toml::from_str("discard_output = false").unwrap();
        assert!(!config.discard_output);
        assert!(config.header);
    }
}
