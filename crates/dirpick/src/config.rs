//! User configuration loaded from `~/.dirpick/config.json`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use tracing::Level;

/// Directory name of the dirpick home under the user's home directory.
pub const DIRPICK_HOME_DIR: &str = ".dirpick";
/// Configuration file name inside the dirpick home.
pub const CONFIG_FILE: &str = "config.json";
/// Log file name inside the dirpick home.
pub const LOG_FILE: &str = "dirpick.log";

/// Returns the dirpick home directory (`~/.dirpick`).
pub fn dirpick_home() -> PathBuf {
    if let Some(home_dir) = dirs::home_dir() {
        return home_dir.join(DIRPICK_HOME_DIR);
    }

    PathBuf::from(DIRPICK_HOME_DIR)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config `{}`: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown log level `{0}`")]
    InvalidLogLevel(String),
}

/// Picker settings; every field is optional in the file.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PickerConfig {
    /// Tracing level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    /// Command run with the chosen file appended; enables loop mode.
    pub open_command: Option<String>,
    /// Applies `.gitignore` and `.ignore` rules to listings.
    pub respect_ignore: bool,
    /// Lists dot-prefixed entries.
    pub show_hidden: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            open_command: None,
            respect_ignore: false,
            show_hidden: true,
        }
    }
}

impl PickerConfig {
    /// Loads configuration from `path`, using defaults when the file does
    /// not exist.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses `log_level` into a tracing level.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidLogLevel`] for unknown names.
    pub fn tracing_level(&self) -> Result<Level, ConfigError> {
        Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Splits `open_command` into program and arguments.
    ///
    /// Returns `None` when no command is configured or it is blank.
    pub fn open_command_parts(&self) -> Option<Vec<String>> {
        let parts: Vec<String> = self
            .open_command
            .as_deref()?
            .split_whitespace()
            .map(ToString::to_string)
            .collect();

        (!parts.is_empty()).then_some(parts)
    }
}
