//! End-to-end tests for the full daydusk stack.
//!
//! The first half wires the real domain, app and adapter crates together in
//! process; the second half runs the compiled `daydusk` binary against
//! configuration files in a temporary directory.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use daydusk_adapter_crontab::{CrontabConfig, CrontabWriter};
use daydusk_adapter_executable::{ExecutableConfig, FsLocator};
use daydusk_app::compiler::CommandOptions;
use daydusk_app::services::crontab_service::CrontabService;
use daydusk_app::shell;
use daydusk_domain::collection::ScheduleInputs;
use daydusk_domain::error::{DayDuskError, ErrorCategory, ValidationError};

const SCHEDULES: &str = r#"
[day]
hour = 7
minute = 0
days = ["MONDAY", "WEDNESDAY"]
hue = 0
brightness = 0.9
kelvin = 3500
duration = 60
power = "ON"

[evening]
hour = 0
minute = 0
brightness = 0.8
kelvin = 2700
duration = 600
power = "ON"
"#;

struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        std::fs::write(dir.path().join("lifx"), "#!/bin/sh\n").expect("fake executable");
        Self { dir }
    }

    fn executable(&self) -> PathBuf {
        self.dir.path().join("lifx")
    }

    fn output(&self) -> PathBuf {
        self.dir.path().join("daydusk.crontab")
    }

    fn service(&self) -> CrontabService<FsLocator, CrontabWriter> {
        CrontabService::new(
            FsLocator::new(ExecutableConfig {
                path: Some(self.executable()),
                ..ExecutableConfig::default()
            }),
            CrontabWriter::new(CrontabConfig::default()),
            CommandOptions::default(),
        )
    }

    fn write_config(&self, schedules: &str) -> PathBuf {
        let path = self.dir.path().join("daydusk.toml");
        let config = format!(
            "[output]\npath = {:?}\n\n[executable]\npath = {:?}\n\n{}",
            self.output().display().to_string(),
            self.executable().display().to_string(),
            schedules
        );
        std::fs::write(&path, config).expect("config should be written");
        path
    }

    fn run(&self, config: &Path, extra: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_daydusk"))
            .arg("--config")
            .arg(config)
            .args(extra)
            .env_remove("DAYDUSK_OUTPUT")
            .env_remove("DAYDUSK_EXECUTABLE")
            .env_remove("DAYDUSK_CONFIG")
            .env_remove("RUST_LOG")
            .output()
            .expect("daydusk binary should run")
    }
}

fn inputs(toml_src: &str) -> ScheduleInputs {
    toml::from_str(toml_src).expect("schedules should parse")
}

fn prefixed(schedules: &str) -> String {
    schedules.replace("\n[", "\n[schedules.")
}

// ---------------------------------------------------------------------------
// In-process pipeline
// ---------------------------------------------------------------------------

#[test]
fn should_compile_scenario_a_with_explicit_days_and_transform_payload() {
    let fx = Fixture::new();
    let jobs = fx.service().compile(&inputs(SCHEDULES)).unwrap();

    let day = &jobs[0];
    assert_eq!(day.schedule, "day");
    assert_eq!(day.trigger_hour, 7);
    assert_eq!(day.trigger_minute, 0);
    assert_eq!(day.trigger_days, BTreeSet::from([1, 3]));
    assert_eq!(day.command_argv[1], "lan:transform");
    assert_eq!(day.command_argv[2], "");

    let payload: serde_json::Value = serde_json::from_str(&day.command_argv[5]).unwrap();
    assert_eq!(
        payload,
        serde_json::json!({"hue": 0, "brightness": 0.9, "kelvin": 3500, "duration": 60, "power": "on"})
    );
    assert!(payload["hue"].is_u64());
    assert!(payload["brightness"].is_f64());
}

#[test]
fn should_compile_scenario_b_on_every_day_with_transform_task() {
    let fx = Fixture::new();
    let jobs = fx.service().compile(&inputs(SCHEDULES)).unwrap();

    let evening = &jobs[1];
    assert_eq!(evening.schedule, "evening");
    assert_eq!(evening.trigger_days, BTreeSet::from([0, 1, 2, 3, 4, 5, 6]));
    assert_eq!(evening.command_argv[1], "lan:transform");
    assert_eq!(
        evening.command_argv[5],
        r#"{"brightness":0.8,"kelvin":2700,"duration":600,"power":"on"}"#
    );
}

#[test]
fn should_fail_scenario_c_without_creating_output() {
    let fx = Fixture::new();
    let err = fx
        .service()
        .generate(&ScheduleInputs::new(), &fx.output())
        .unwrap_err();
    assert!(matches!(err, DayDuskError::EmptyScheduleSet));
    assert!(!fx.output().exists());
}

#[test]
fn should_fail_scenario_d_with_hour_bounds_before_compiling() {
    let fx = Fixture::new();
    let err = fx
        .service()
        .generate(&inputs("[late]\nhour = 24\nminute = 0\n"), &fx.output())
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::OutOfRange);
    assert_eq!(
        err.validation(),
        Some(&ValidationError::OutOfRange {
            value: 24.0,
            minimum: 0.0,
            maximum: 23.0
        })
    );
    assert!(!fx.output().exists());
}

#[test]
fn should_compile_identically_twice() {
    let fx = Fixture::new();
    let service = fx.service();
    let schedules = inputs(SCHEDULES);
    assert_eq!(
        service.compile(&schedules).unwrap(),
        service.compile(&schedules).unwrap()
    );
}

#[test]
fn should_write_one_crontab_entry_per_schedule() {
    let fx = Fixture::new();
    fx.service()
        .generate(&inputs(SCHEDULES), &fx.output())
        .unwrap();

    let contents = std::fs::read_to_string(fx.output()).unwrap();
    let entries: Vec<&str> = contents
        .lines()
        .filter(|line| !line.starts_with('#'))
        .collect();
    let exe = shell::quote(&fx.executable().display().to_string());
    assert_eq!(
        entries,
        vec![
            format!(
                r#"0 7 * * 1,3 {exe} lan:transform '' --silent -- '{{"hue":0,"brightness":0.9,"kelvin":3500,"duration":60,"power":"on"}}' >/dev/null"#
            ),
            format!(
                r#"0 0 * * 0,1,2,3,4,5,6 {exe} lan:transform '' --silent -- '{{"brightness":0.8,"kelvin":2700,"duration":600,"power":"on"}}' >/dev/null"#
            ),
        ]
    );
}

#[test]
fn should_overwrite_previous_crontab() {
    let fx = Fixture::new();
    std::fs::write(fx.output(), "0 0 * * * old-job\n").unwrap();
    fx.service()
        .generate(&inputs("[only]\nhour = 1\nminute = 2\n"), &fx.output())
        .unwrap();

    let contents = std::fs::read_to_string(fx.output()).unwrap();
    assert!(!contents.contains("old-job"));
    assert!(contents.contains("2 1 * * "));
}

// ---------------------------------------------------------------------------
// Binary
// ---------------------------------------------------------------------------

#[test]
fn should_print_confirmation_and_write_crontab() {
    let fx = Fixture::new();
    let config = fx.write_config(&prefixed(SCHEDULES));
    let out = fx.run(&config, &[]);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        format!("Created crontab at {}\n", fx.output().display())
    );
    let contents = std::fs::read_to_string(fx.output()).unwrap();
    assert!(contents.contains("# day\n"));
    assert!(contents.contains("# evening\n"));
}

#[test]
fn should_exit_non_zero_when_no_schedules_configured() {
    let fx = Fixture::new();
    let config = fx.write_config("");
    let out = fx.run(&config, &[]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("empty_schedule_set"), "stderr: {stderr}");
    assert!(!fx.output().exists());
}

#[test]
fn should_describe_schedule_field_and_bounds_on_failure() {
    let fx = Fixture::new();
    let config = fx.write_config("[schedules.late]\nhour = 24\nminute = 0\n");
    let out = fx.run(&config, &[]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("out_of_range"), "stderr: {stderr}");
    assert!(stderr.contains("`late`"), "stderr: {stderr}");
    assert!(stderr.contains("`hour`"), "stderr: {stderr}");
    assert!(stderr.contains("value 24 is outside the range [0, 23]"), "stderr: {stderr}");
    assert!(!fx.output().exists());
}

#[test]
fn should_exit_non_zero_when_executable_missing() {
    let fx = Fixture::new();
    let config = fx.write_config(&prefixed(SCHEDULES));
    std::fs::remove_file(fx.executable()).unwrap();
    let out = fx.run(&config, &[]);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("missing_executable"));
    assert!(!fx.output().exists());
}

#[test]
fn should_print_crontab_on_dry_run_without_writing() {
    let fx = Fixture::new();
    let config = fx.write_config(&prefixed(SCHEDULES));
    let out = fx.run(&config, &["--dry-run"]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("# Generated by daydusk"));
    assert!(stdout.contains("0 7 * * 1,3 "));
    assert!(!fx.output().exists());
}

#[test]
fn should_honour_output_flag() {
    let fx = Fixture::new();
    let config = fx.write_config(&prefixed(SCHEDULES));
    let elsewhere = fx.dir.path().join("elsewhere.crontab");
    let out = fx.run(&config, &["--output", &elsewhere.display().to_string()]);

    assert!(out.status.success());
    assert!(elsewhere.exists());
    assert!(!fx.output().exists());
}

#[test]
fn should_fail_when_explicit_config_is_missing() {
    let fx = Fixture::new();
    let out = fx.run(&fx.dir.path().join("typo.toml"), &[]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error[config_not_found]"), "stderr: {stderr}");
    assert!(stderr.contains("typo.toml"), "stderr: {stderr}");
    assert!(!fx.output().exists());
}

#[test]
fn should_categorise_malformed_config() {
    let fx = Fixture::new();
    let config = fx.dir.path().join("broken.toml");
    std::fs::write(&config, "[schedules.day\nhour = 1\n").unwrap();
    let out = fx.run(&config, &[]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error[config_parse]"), "stderr: {stderr}");
}

#[test]
fn should_report_wrongly_typed_power_as_invalid_value() {
    let fx = Fixture::new();
    let config = fx.write_config("[schedules.day]\nhour = 1\nminute = 0\npower = 0.5\n");
    let out = fx.run(&config, &[]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error[invalid_enum_value]"), "stderr: {stderr}");
    assert!(stderr.contains("`power`"), "stderr: {stderr}");
    assert!(!fx.output().exists());
}

#[test]
fn should_refuse_reference_that_would_add_a_crontab_line() {
    let fx = Fixture::new();
    let config = fx.write_config(
        "[schedules.day]\nhour = 1\nminute = 0\nreference = \"kitchen\\n* * * * * touch /tmp/pwned #\"\n",
    );
    let out = fx.run(&config, &[]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("error[control_character]"), "stderr: {stderr}");
    assert!(stderr.contains("`reference`"), "stderr: {stderr}");
    assert!(!fx.output().exists());
}

#[cfg(unix)]
#[test]
fn should_leave_crontab_readable_by_the_scheduler() {
    use std::os::unix::fs::PermissionsExt as _;

    let fx = Fixture::new();
    let config = fx.write_config(&prefixed(SCHEDULES));
    assert!(fx.run(&config, &[]).status.success());
    let mode = std::fs::metadata(fx.output()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);

    std::fs::set_permissions(fx.output(), std::fs::Permissions::from_mode(0o640)).unwrap();
    assert!(fx.run(&config, &[]).status.success());
    let mode = std::fs::metadata(fx.output()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o640);
}
