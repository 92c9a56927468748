use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::defaults::{
    clamp_test_fraction, clamp_typing_delay, default_dataset_path, default_smoothing_alpha,
    default_split_seed, default_test_fraction, default_typing_delay_ms, sanitize_alpha,
};

/// User-editable application settings.
///
/// Config keys (TOML): `dataset_path`, `test_fraction`, `split_seed`,
/// `smoothing_alpha`, `typing_delay_ms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Labeled CSV dataset; relative paths resolve against the working directory.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
    /// Share of the corpus held out for evaluation.
    #[serde(default = "default_test_fraction")]
    pub test_fraction: f64,
    #[serde(default = "default_split_seed")]
    pub split_seed: u64,
    /// Additive smoothing for the Naive Bayes estimator.
    #[serde(default = "default_smoothing_alpha")]
    pub smoothing_alpha: f64,
    /// Delay before bot replies appear; `0` replies immediately.
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            test_fraction: default_test_fraction(),
            split_seed: default_split_seed(),
            smoothing_alpha: default_smoothing_alpha(),
            typing_delay_ms: default_typing_delay_ms(),
        }
    }
}

impl AppSettings {
    pub(crate) fn normalized(mut self) -> Self {
        self.test_fraction = clamp_test_fraction(self.test_fraction);
        self.smoothing_alpha = sanitize_alpha(self.smoothing_alpha);
        self.typing_delay_ms = clamp_typing_delay(self.typing_delay_ms);
        self
    }

    /// Typing indicator duration, `Duration::ZERO` when disabled.
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }
}

/// Errors that may occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to create the config directory.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        /// Directory path that failed to create.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to read the settings file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the settings file.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Settings file is not valid TOML for [`AppSettings`].
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    /// No usable config directory found.
    #[error("No suitable config directory found")]
    NoConfigDir,
}
