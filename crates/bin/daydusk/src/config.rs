//! Configuration loading — TOML file with environment variable overrides.
//!
//! Reads the file given on the command line, which must exist, or else
//! `daydusk.toml` in the working directory, which may be absent. Every
//! section except `schedules` has a sensible default; an absent default file
//! yields an empty schedule set, which is reported when the schedules are
//! compiled. Environment variables take precedence over file values.

use std::path::{Path, PathBuf};

use daydusk_adapter_crontab::CrontabConfig;
use daydusk_adapter_executable::ExecutableConfig;
use daydusk_app::compiler::CommandOptions;
use daydusk_domain::collection::ScheduleInputs;
use serde::Deserialize;

/// Configuration file read when none is given explicitly.
pub const DEFAULT_PATH: &str = "daydusk.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Crontab destination and rendering.
    pub output: OutputConfig,
    /// External command lookup and invocation.
    pub executable: ExecutableSection,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Schedules, keyed by name, in document order.
    pub schedules: ScheduleInputs,
}

/// Where and how the crontab is written.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Crontab file to replace.
    pub path: PathBuf,
    #[serde(flatten)]
    pub crontab: CrontabConfig,
}

/// External command settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ExecutableSection {
    #[serde(flatten)]
    pub lookup: ExecutableConfig,
    /// Prefix of the task argument (`lan:transform`).
    pub target: String,
    /// Pass `--silent` to the command.
    pub silent: bool,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path`, or from [`DEFAULT_PATH`] if it
    /// exists, then apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if an explicit `path` does not
    /// exist, and an error if the file cannot be read or parsed or the
    /// resulting configuration is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::from_optional_file(Path::new(DEFAULT_PATH))?,
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            }),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn from_optional_file(path: &Path) -> Result<Self, ConfigError> {
        match Self::from_file(path) {
            Err(ConfigError::NotFound { .. }) => Ok(Self::default()),
            other => other,
        }
    }

    fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("DAYDUSK_OUTPUT") {
            self.output.path = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("DAYDUSK_EXECUTABLE") {
            self.executable.lookup.path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("DAYDUSK_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.output.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output path must not be empty".to_string(),
            ));
        }
        if self.executable.lookup.path.is_none() && self.executable.lookup.name.is_empty() {
            return Err(ConfigError::Validation(
                "executable name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Options passed to the job compiler.
    #[must_use]
    pub fn command_options(&self) -> CommandOptions {
        CommandOptions {
            target: self.executable.target.clone(),
            silent: self.executable.silent,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("/config/daydusk.crontab"),
            crontab: CrontabConfig::default(),
        }
    }
}

impl Default for ExecutableSection {
    fn default() -> Self {
        let options = CommandOptions::default();
        Self {
            lookup: ExecutableConfig::default(),
            target: options.target,
            silent: options.silent,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "daydusk=info,daydusk_app=info,daydusk_adapter_crontab=info,daydusk_adapter_executable=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// An explicitly requested file does not exist.
    #[error("config file {} does not exist", .path.display())]
    NotFound { path: PathBuf },
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

impl ConfigError {
    /// Stable category of this error, reported next to the message.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Parse(_) => "config_parse",
            Self::NotFound { .. } => "config_not_found",
            Self::Io(_) => "config_io",
            Self::Validation(_) => "config_invalid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.output.path, PathBuf::from("/config/daydusk.crontab"));
        assert!(config.output.crontab.discard_output);
        assert_eq!(config.executable.lookup.name, "lifx");
        assert_eq!(config.executable.target, "lan");
        assert!(config.executable.silent);
        assert!(config.schedules.is_empty());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.output.path, PathBuf::from("/config/daydusk.crontab"));
        assert!(config.schedules.is_empty());
    }

    #[test]
    fn should_parse_full_toml() {
        let config = Config::parse(
            r#"
            [output]
            path = "/tmp/out.crontab"
            discard_output = false

            [executable]
            path = "/opt/photons/bin/lifx"
            target = "lan"
            silent = false

            [logging]
            filter = "debug"

            [schedules.day]
            hour = 7
            minute = 0
            days = ["MONDAY", "WEDNESDAY"]
            hue = 0
            brightness = 0.9
            kelvin = 3500
            duration = 60
            power = "ON"

            [schedules.evening]
            hour = 0
            minute = 0
            brightness = 0.8
            kelvin = 2700
            duration = 600
            power = "ON"
            "#,
        )
        .unwrap();
        assert_eq!(config.output.path, PathBuf::from("/tmp/out.crontab"));
        assert!(!config.output.crontab.discard_output);
        assert_eq!(
            config.executable.lookup.path,
            Some(PathBuf::from("/opt/photons/bin/lifx"))
        );
        assert!(!config.executable.silent);
        assert_eq!(config.logging.filter, "debug");

        let names: Vec<&str> = config.schedules.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["day", "evening"]);
    }

    #[test]
    fn should_fail_when_explicit_file_not_found() {
        let err = Config::load(Some(Path::new("nonexistent-daydusk.toml"))).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NotFound { ref path } if path == Path::new("nonexistent-daydusk.toml")
        ));
        assert_eq!(err.category(), "config_not_found");
        assert_eq!(
            err.to_string(),
            "config file nonexistent-daydusk.toml does not exist"
        );
    }

    #[test]
    fn should_return_default_when_optional_file_not_found() {
        let config = Config::from_optional_file(Path::new("nonexistent-daydusk.toml")).unwrap();
        assert!(config.schedules.is_empty());
    }

    #[test]
    fn should_read_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daydusk.toml");
        std::fs::write(&path, "[schedules.day]\nhour = 7\nminute = 0\n").unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.schedules.len(), 1);
    }

    #[test]
    fn should_categorise_config_errors() {
        assert_eq!(
            Config::parse("invalid {{{").unwrap_err().category(),
            "config_parse"
        );
        assert_eq!(
            ConfigError::Validation("x".to_string()).category(),
            "config_invalid"
        );
        assert_eq!(
            ConfigError::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied)).category(),
            "config_io"
        );
    }

    #[test]
    fn should_reject_unknown_sections() {
        assert!(matches!(
            Config::parse("[scheduels.day]\nhour = 1\nminute = 2\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn should_reject_empty_output_path() {
        let mut config = Config::default();
        config.output.path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_empty_executable_name_without_path() {
        let mut config = Config::default();
        config.executable.lookup.name = String::new();
        assert!(config.validate().is_err());
        config.executable.lookup.path = Some(PathBuf::from("/bin/lifx"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_build_command_options() {
        let mut config = Config::default();
        config.executable.target = String::new();
        let options = config.command_options();
        assert!(options.target.is_empty());
        assert!(options.silent);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        assert!(Config::parse("invalid {{{").is_err());
    }
}
