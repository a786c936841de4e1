//! Runtime settings read from the environment. Nothing about the roster is
//! configurable; the knobs only steer diagnostics.

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::ConfigError;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".church-attendance";
/// Sub-folder of the data directory that receives log files.
const LOG_DIR_NAME: &str = "logs";
const DEFAULT_LOG_LEVEL: &str = "info";

pub const LOG_LEVEL_VAR: &str = "ATTENDANCE_LOG";
pub const LOG_DIR_VAR: &str = "ATTENDANCE_LOG_DIR";

const SUPPORTED_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Normalized to lowercase; always one of the supported levels.
    pub log_level: String,
    /// Absolute.
    pub log_dir: PathBuf,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let log_level = match value(LOG_LEVEL_VAR) {
            Some(raw) => normalize_level(&raw)?,
            None => DEFAULT_LOG_LEVEL.to_string(),
        };

        let log_dir = match value(LOG_DIR_VAR) {
            Some(raw) => {
                let dir = PathBuf::from(raw.trim());
                if !dir.is_absolute() {
                    return Err(ConfigError::RelativeLogDir(dir));
                }
                dir
            }
            None => default_log_dir()?,
        };

        Ok(Self { log_level, log_dir })
    }
}

fn normalize_level(raw: &str) -> Result<String, ConfigError> {
    let level = raw.trim().to_ascii_lowercase();
    if SUPPORTED_LEVELS.contains(&level.as_str()) {
        Ok(level)
    } else {
        Err(ConfigError::InvalidLogLevel(raw.trim().to_string()))
    }
}

/// `~/.church-attendance/logs`.
fn default_log_dir() -> Result<PathBuf, ConfigError> {
    let base_dirs = BaseDirs::new().ok_or(ConfigError::NoHomeDir)?;
    Ok(base_dirs
        .home_dir()
        .join(DATA_DIR_NAME)
        .join(LOG_DIR_NAME))
}
