use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration for the radio wrapper.
///
/// The executable path is injected at startup so tests can substitute a stub
/// script for the real tuner binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RadioConfig {
    /// Path of the external radio executable
    pub radio_path: PathBuf,
    /// Upper bound for each external invocation, in seconds
    pub timeout_secs: u64,
}

impl Default for RadioConfig {
    fn default() -> Self {
        RadioConfig {
            radio_path: PathBuf::from("/usr/local/bin/piradio"),
            timeout_secs: 10,
        }
    }
}

impl RadioConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
