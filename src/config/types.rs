//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub labels: LabelsConfig,
    #[serde(default)]
    pub experiment: ExperimentConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Label extraction configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelsConfig {
    /// Peers started per simulation process
    #[serde(default = "default_peers_per_processor")]
    pub peers_per_processor: u32,
}

pub fn default_peers_per_processor() -> u32 {
    2
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            peers_per_processor: default_peers_per_processor(),
        }
    }
}

/// Experiment file generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    #[serde(default = "default_application")]
    pub application: String,
    #[serde(default = "default_cluster")]
    pub cluster: String,
    /// Torrent description shipped to every peer
    #[serde(default = "default_jorrent_file")]
    pub jorrent_file: String,
    /// File being distributed
    #[serde(default = "default_shared_file")]
    pub shared_file: String,
    /// Runtime in seconds granted to leechers
    #[serde(default = "default_leecher_runtime")]
    pub leecher_runtime: u32,
    /// Factor applied to the leecher runtime for every other role
    #[serde(default = "default_runtime_multiplier")]
    pub runtime_multiplier: u32,
}

pub fn default_application() -> String {
    "Arnold".to_string()
}

pub fn default_cluster() -> String {
    "VU".to_string()
}

pub fn default_jorrent_file() -> String {
    "ubuntu-karmic-desktop-i386.jorrent".to_string()
}

pub fn default_shared_file() -> String {
    "ubuntu-karmic-desktop-i386.iso".to_string()
}

pub fn default_leecher_runtime() -> u32 {
    1000
}

pub fn default_runtime_multiplier() -> u32 {
    4
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            application: default_application(),
            cluster: default_cluster(),
            jorrent_file: default_jorrent_file(),
            shared_file: default_shared_file(),
            leecher_runtime: default_leecher_runtime(),
            runtime_multiplier: default_runtime_multiplier(),
        }
    }
}

/// Diagnostic logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,
}

pub fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
