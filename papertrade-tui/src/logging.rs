//! File-only tracing setup.
//!
//! The TUI owns the terminal, so log lines must never reach stdout or
//! stderr while it runs. Everything goes to a per-session file under the
//! user's data directory; `RUST_LOG` controls the filter as usual.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing_appender::non_blocking;
use tracing_subscriber::EnvFilter;

/// Directory where session logs accumulate.
pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("papertrade")
        .join("logs")
}

/// Initialize file-only logging for this session. Returns the log file
/// path so the UI can surface it in the help screen.
pub fn init() -> Result<PathBuf> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir).context("creating log directory")?;

    let session_id = Utc::now().format("%Y%m%d_%H%M%S").to_string();
    let path = dir.join(format!("papertrade-{session_id}.log"));
    let file = std::fs::File::create(&path).context("creating log file")?;

    let (writer, guard) = non_blocking(file);
    // The guard flushes on drop; the subscriber lives for the whole
    // process, so leak it rather than threading it through main.
    std::mem::forget(guard);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .init();

    tracing::info!(log_file = %path.display(), "logging initialized");
    Ok(path)
}
