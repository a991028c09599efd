//! Configuration management for arnold-logs

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

impl Config {
    /// Get the config file path (~/.config/arnold-logs/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/arnold-logs)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Reject values that would make every derived number meaningless.
    pub fn validate(&self) -> Result<(), String> {
        if self.labels.peers_per_processor == 0 {
            return Err("[labels].peers_per_processor must be at least 1".to_string());
        }
        if self.experiment.leecher_runtime == 0 {
            return Err("[experiment].leecher_runtime must be at least 1".to_string());
        }
        if self
            .experiment
            .leecher_runtime
            .checked_mul(self.experiment.runtime_multiplier)
            .is_none()
        {
            return Err(
                "[experiment].leecher_runtime times runtime_multiplier does not fit in 32 bits"
                    .to_string(),
            );
        }
        Ok(())
    }
}
