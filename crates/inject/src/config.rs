//! Adapter-facing configuration surface.

use std::path::PathBuf;

use serde::Deserialize;

use browserlog_protocol::constants::{CONSOLE_LEVELS, DEFAULT_LOG_FILE, DEFAULT_PORT};

/// Options a build-tool adapter recognizes.
///
/// Every field defaults, so a partial config file (or none at all)
/// yields a working setup. `levels` filters at capture time only; the
/// server accepts whatever level string a record carries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwarderConfig {
    /// Gates whether forwarding activates at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Ingestion port, shared by server and generated snippet.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path of the persisted log file.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    /// Console methods eligible for interception.
    #[serde(default = "default_levels")]
    pub levels: Vec<String>,
}

impl Default for ForwarderConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            port: default_port(),
            log_file: default_log_file(),
            levels: default_levels(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

fn default_levels() -> Vec<String> {
    CONSOLE_LEVELS.iter().map(|s| (*s).to_string()).collect()
}
