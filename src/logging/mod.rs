//! Process-wide logging setup.
//!
//! Two sinks: stdout and a size-rotating, zip-compressed file. Installed
//! exactly once at process entry via [`init`].

mod rolling;

use std::fs;
use std::io;
use std::sync::Mutex;

use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{Environment, Settings};
use rolling::RollingWriter;

/// Rotate the log file once it grows past this size.
const MAX_LOG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Install the global subscriber: console sink plus rotating file sink.
///
/// Creates the log directory if needed; an unwritable directory is an error,
/// there is no fallback sink. Logs the resolved environment and the API base
/// URL once installed.
pub fn init(settings: &Settings, environment: Environment) -> io::Result<()> {
    let level = parse_level(&settings.log_level);

    if let Some(dir) = settings.log_file_path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    let writer = RollingWriter::open(&settings.log_file_path, MAX_LOG_FILE_SIZE)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(writer)),
        )
        .init();

    info!(environment = %environment, "environment loaded");
    info!(api_base_url = %settings.api_base_url, "API base URL");

    Ok(())
}

fn parse_level(log_level: &str) -> Level {
    match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
