use std::path::PathBuf;

use anyhow::Context;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CASK_LOG";
const DEFAULT_FILTER: &str = "cask=info";

/// Sends logs to a daily rolling file under `log_path`. Stdout belongs to the
/// completion protocol, so nothing is logged there.
pub fn init_tracing(log_path: PathBuf) -> anyhow::Result<Guard> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("cask.log")
        .build(&log_path)
        .with_context(|| format!("Failed to create log directory {}", log_path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or(EnvFilter::new(DEFAULT_FILTER)))
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_thread_ids(false)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(writer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    debug!(path = %log_path.display(), "Logging initialized");
    Ok(Guard(guard))
}

/// Keeps the background log writer alive; logs are flushed when dropped.
pub struct Guard(#[allow(dead_code)] WorkerGuard);
