//! Logging configuration using tracing

use anyhow::{anyhow, Result};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the logging subsystem
///
/// Logs go to a daily file under `~/.local/share/accent/logs/` so they never
/// land on the terminal the UI is drawing to. The level is controlled by the
/// `ACCENT_LOG` environment variable (`ACCENT_LOG=debug accent`).
pub fn init() -> Result<PathBuf> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "accent.log");

    let env_filter = EnvFilter::try_from_env("ACCENT_LOG")
        .unwrap_or_else(|_| EnvFilter::new("accent=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;

    tracing::info!("accent starting, logging to {}", log_dir.display());
    Ok(log_dir)
}

fn get_log_directory() -> Result<PathBuf> {
    let base = home::home_dir().ok_or_else(|| anyhow!("no home directory for logs"))?;
    Ok(base.join(".local").join("share").join("accent").join("logs"))
}
