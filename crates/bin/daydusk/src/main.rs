//! # daydusk — lighting schedule compiler
//!
//! Composition root that turns the `schedules` of a configuration file into
//! a crontab whose jobs run the `lifx` command line tool.
//!
//! ## Responsibilities
//! - Parse command line arguments and configuration (file + env vars)
//! - Initialise logging
//! - Construct the executable locator and crontab writer (adapters)
//! - Run the crontab service and report the outcome
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use daydusk_adapter_crontab::CrontabWriter;
use daydusk_adapter_executable::FsLocator;
use daydusk_app::services::crontab_service::CrontabService;
use daydusk_domain::error::DayDuskError;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, ConfigError};

/// Compile lighting schedules into a crontab.
#[derive(Debug, Parser)]
#[command(name = "daydusk", version, about)]
struct Cli {
    /// Configuration file; must exist when given. Defaults to `daydusk.toml`
    /// in the working directory, if present.
    #[arg(short, long, env = "DAYDUSK_CONFIG")]
    config: Option<PathBuf>,

    /// Crontab to write, overriding `output.path`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the crontab instead of writing it.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(domain) = err.downcast_ref::<DayDuskError>() {
                eprintln!("error[{}]: {err:#}", domain.category());
            } else if let Some(config) = err.downcast_ref::<ConfigError>() {
                eprintln!("error[{}]: {err:#}", config.category());
            } else {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_PATH));
    let config = Config::load(cli.config.as_deref())
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    init_tracing(&config.logging.filter);
    tracing::debug!(config = %config_path.display(), schedules = config.schedules.len(), "configuration loaded");

    let service = CrontabService::new(
        FsLocator::new(config.executable.lookup.clone()),
        CrontabWriter::new(config.output.crontab.clone()),
        config.command_options(),
    );

    if cli.dry_run {
        print!("{}", service.preview(&config.schedules)?);
        return Ok(());
    }

    let output = cli.output.unwrap_or(config.output.path);
    service.generate(&config.schedules, &output)?;
    println!("Created crontab at {}", output.display());
    Ok(())
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter `{filter}` ({err}), falling back to `info`");
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
