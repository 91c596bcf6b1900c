mod config;
mod exec;
mod station;
mod status;

pub use crate::config::RadioConfig;
pub use crate::exec::{Radio, RadioControl, TuneOutcome};
pub use crate::station::{MAX_STATION_LEN, sanitize_station};
pub use crate::status::{render_status, status_lines};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RadioError {
    #[error("Failed to spawn radio executable '{path}': {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Radio executable '{path}' did not finish within {timeout_secs}s")]
    Timeout { path: PathBuf, timeout_secs: u64 },
}
