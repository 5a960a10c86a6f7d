//! Logging setup.
//!
//! All modules log through the `log` macros. [`init`] installs a `fern`
//! dispatch that feeds an in-memory [`Logger`] (shown in the logs dialog) and,
//! when enabled in the configuration, an append-mode log file. Nothing is
//! printed to the terminal because the UI owns it while running.

use crate::config::LoggingConfig;
use crate::constants::{LOG_BUFFER_CAPACITY, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared in-memory log buffer that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_capacity(LOG_BUFFER_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Add a log entry, dropping the oldest one when full
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == self.capacity {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Location of the optional log file
    pub fn get_log_file_path() -> Result<PathBuf> {
        let dir = dirs::data_local_dir()
            .or_else(dirs::data_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        Ok(dir.join("watch2gether").join(LOG_FILE_NAME))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the global `log` backend.
///
/// Can only succeed once per process.
pub fn init(logger: &Logger, config: &LoggingConfig) -> Result<()> {
    let sink = logger.clone();
    let mut dispatch = fern::Dispatch::new()
        .level(log::LevelFilter::Info)
        .chain(
            fern::Dispatch::new()
                .format(|out, message, record| out.finish(format_args!("{:<5} {}", record.level(), message)))
                .chain(fern::Output::call(move |record| sink.log(record.args().to_string()))),
        );

    if config.enabled {
        let path = Logger::get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file =
            fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} {:<5} {}] {}",
                        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(file),
        );
    }

    dispatch.apply().context("Failed to install logger")?;
    log::info!("Logging initialized (file logging {})", if config.enabled { "on" } else { "off" });
    Ok(())
}
