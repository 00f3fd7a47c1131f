//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "aboutpages.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/about-pages/logs/`, never to stdout,
/// which carries the NDJSON event stream.
/// Log level is controlled by the `ABOUTPAGES_LOG` environment variable.
///
/// # Examples
/// ```bash
/// ABOUTPAGES_LOG=debug aboutpages --page preferences
/// ABOUTPAGES_LOG=aboutpages_app=trace aboutpages
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info, allow override via ABOUTPAGES_LOG
    let env_filter = EnvFilter::try_from_env("ABOUTPAGES_LOG")
        .unwrap_or_else(|_| EnvFilter::new("about_pages=info,aboutpages_app=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("about-pages starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("about-pages").join("logs"))
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_in_about_pages_dir() {
        let path = get_current_log_file().unwrap();
        assert!(path.ends_with("about-pages/logs/aboutpages.log"));
    }
}
