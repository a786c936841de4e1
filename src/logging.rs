//! File-based logging. The terminal is owned by the UI while the app runs, so
//! diagnostics go to rotating files under the configured log directory.

use std::fs;

use anyhow::{Context, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

use crate::config::Settings;

const LOG_FILE_BASENAME: &str = "attendance";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

/// Start the logger. Keep the returned handle alive until shutdown so buffered
/// lines get flushed.
pub fn init_logging(settings: &Settings) -> Result<LoggerHandle> {
    fs::create_dir_all(&settings.log_dir).with_context(|| {
        format!(
            "failed to create log directory `{}`",
            settings.log_dir.display()
        )
    })?;

    Logger::try_with_str(&settings.log_level)
        .with_context(|| format!("invalid log level `{}`", settings.log_level))?
        .log_to_file(
            FileSpec::default()
                .directory(settings.log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .context("failed to start logger")
}
