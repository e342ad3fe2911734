use crate::constants::{APP_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Utc;
use log::LevelFilter;
use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Number of formatted lines kept in memory
const MAX_IN_MEMORY_LOGS: usize = 1000;

type FileWriter = Arc<Mutex<BufWriter<File>>>;

/// Shared logger that can be used across the application.
///
/// Lines are always kept in memory; when enabled they are also appended to
/// the log file. The terminal is owned by the UI, so nothing is ever printed.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    file_writer: Option<FileWriter>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            file_writer: None,
        }
    }

    /// Build a logger from the `[logging] enabled` setting
    pub fn from_config(enabled: bool) -> Result<Self> {
        let mut logger = Self::new();
        if enabled {
            let path = Self::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            logger.file_writer = Some(Arc::new(Mutex::new(BufWriter::new(file))));
        }
        Ok(logger)
    }

    /// Route every `log` record at or above `level` into this logger
    pub fn install(&self, level: LevelFilter) -> Result<()> {
        let sink = self.clone();
        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("{:<5} {}: {}", record.level(), record.target(), message))
            })
            .level(level)
            .chain(fern::Output::call(move |record| sink.log(record.args().to_string())))
            .apply()
            .map_err(|e| anyhow::anyhow!("Failed to install log dispatcher: {}", e))
    }

    pub fn has_file_writer(&self) -> bool {
        self.file_writer.is_some()
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Some(writer) = &self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                let _ = writeln!(writer, "{}", formatted_message);
                let _ = writer.flush();
            }
        }

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == MAX_IN_MEMORY_LOGS {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Log file location: `$XDG_DATA_HOME/tallylist/tallylist.log`, or the temp dir
    pub fn get_log_file_path() -> Result<PathBuf> {
        let base = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
        Ok(base.join(APP_NAME).join(LOG_FILE_NAME))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
