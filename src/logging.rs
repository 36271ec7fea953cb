use std::path::PathBuf;

use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::Result;

lazy_static::lazy_static! {
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

/// Install a file-writing tracing subscriber at the default WARN level.
///
/// The library itself only emits `tracing` events; applications embedding
/// it can call this once at startup (or install their own subscriber).
pub fn init() -> Result<()> {
    init_with(None, None)
}

/// Install a file-writing tracing subscriber with a custom log path and/or
/// level. The `RUST_LOG` environment variable still refines the filter.
pub fn init_with(log_path: Option<PathBuf>, level: Option<tracing::Level>) -> Result<()> {
    let log_path = match log_path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            path
        }
        None => std::env::current_dir()?.join(LOG_FILE.clone()),
    };

    let default_level = level.unwrap_or(tracing::Level::WARN);
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_ansi(false)
        .with_writer(move || {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .expect("failed to open log file")
        })
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}
