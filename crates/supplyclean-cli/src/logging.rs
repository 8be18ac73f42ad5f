use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::errors::ConfigError;
use crate::parser::Logging;

/// Install the global subscriber: a plain-text file layer appending to
/// `<dir>/<file>` and a console layer on stderr. `RUST_LOG` overrides the
/// configured level; `debug` forces debug events.
///
/// The returned guard flushes the file writer on drop and must outlive the run.
pub fn init_logging(config: &Logging, debug: bool) -> Result<WorkerGuard> {
    fs::create_dir_all(&config.dir)
        .with_context(|| format!("Failed to create log directory: {}", config.dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&config.dir, &config.file);
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    let level = if debug { "debug" } else { config.level.as_str() };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|_| ConfigError::InvalidLogLevel {
            level: level.to_string(),
        })?,
    };

    let file_layer = fmt::layer().with_ansi(false).with_writer(non_blocking_writer);
    let console_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("Failed to install the log subscriber")?;

    Ok(guard)
}
