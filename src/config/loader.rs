use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{StepConfig, CONFIG_VERSION};
use crate::paths::is_absolute;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl StepConfig {
    /// Returns the path to the default step configuration file.
    ///
    /// Uses `~/.config/rxrun/step.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("rxrun").join("step.toml")
    }

    /// Loads, parses and validates a step configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: StepConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration the way the job form does.
    ///
    /// Checks:
    /// - The format version is supported
    /// - A test executable ending in `.exe` is given
    /// - Report file names are not absolute paths
    /// - TestRail user and password are set when TestRail is enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |message: String| Err(ConfigError::ValidationError { message });

        if self.version != CONFIG_VERSION {
            return invalid(format!(
                "Unsupported config version {} (expected {})",
                self.version, CONFIG_VERSION
            ));
        }

        let executable = self.executable.trim();
        if executable.is_empty() {
            return invalid("Test executable is required".to_string());
        }
        if !executable.contains(".exe") {
            return invalid(format!("'{}' is not a valid executable", executable));
        }

        for (field, value) in [
            ("report_file", &self.report_file),
            ("compressed_report_file", &self.compressed_report_file),
        ] {
            if is_absolute(value.trim()) {
                return invalid(format!(
                    "{} '{}' must be a file name, not an absolute path",
                    field, value
                ));
            }
        }

        if self.test_rail.enabled {
            if self.test_rail.user.trim().is_empty() {
                return invalid("TestRail user name is required".to_string());
            }
            if self.test_rail.password.trim().is_empty() {
                return invalid("TestRail password is required".to_string());
            }
        }

        Ok(())
    }
}
