use crate::{RadioConfig, RadioError};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Result of a tune invocation.
///
/// The endpoint's current policy ignores the exit status, but it is reported
/// here rather than swallowed so callers (and tests) can observe failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuneOutcome {
    /// Exit code of the radio executable, `None` if killed by a signal
    pub exit_code: Option<i32>,
}

/// Invocation abstraction over the external radio executable.
///
/// Handlers depend on this trait rather than on [`Radio`] directly so tests
/// can substitute a double and assert on the invocations performed.
#[async_trait]
pub trait RadioControl: Send + Sync {
    /// Tune to a sanitized station identifier. Output is discarded.
    async fn tune(&self, station: &str) -> Result<TuneOutcome, RadioError>;

    /// Query current status, capturing the executable's stdout.
    async fn status(&self) -> Result<String, RadioError>;
}

/// Production [`RadioControl`] backed by the configured executable.
#[derive(Debug, Clone)]
pub struct Radio {
    path: PathBuf,
    timeout: Duration,
}

impl Radio {
    pub fn new(config: &RadioConfig) -> Self {
        Radio {
            path: config.radio_path.clone(),
            timeout: config.timeout(),
        }
    }

    async fn run(&self, args: &[&str]) -> Result<std::process::Output, RadioError> {
        let mut command = Command::new(&self.path);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // A timed-out child must not outlive the request handling it
            .kill_on_drop(true);

        let child = command.spawn().map_err(|source| RadioError::Spawn {
            path: self.path.clone(),
            source,
        })?;

        match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|source| RadioError::Spawn {
                path: self.path.clone(),
                source,
            }),
            Err(_) => Err(RadioError::Timeout {
                path: self.path.clone(),
                timeout_secs: self.timeout.as_secs(),
            }),
        }
    }
}

#[async_trait]
impl RadioControl for Radio {
    async fn tune(&self, station: &str) -> Result<TuneOutcome, RadioError> {
        tracing::debug!(station, radio = %self.path.display(), "Tuning radio");
        let output = self.run(&[station]).await?;
        Ok(TuneOutcome {
            exit_code: output.status.code(),
        })
    }

    async fn status(&self) -> Result<String, RadioError> {
        tracing::debug!(radio = %self.path.display(), "Querying radio status");
        let output = self.run(&[]).await?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    struct Stub {
        path: PathBuf,
    }

    impl Stub {
        fn new(name: &str, script: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "radio-stub-{}-{}",
                name,
                std::process::id()
            ));
            std::fs::write(&path, script).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            Stub { path }
        }

        fn radio(&self, timeout_secs: u64) -> Radio {
            Radio::new(&RadioConfig {
                radio_path: self.path.clone(),
                timeout_secs,
            })
        }
    }

    impl Drop for Stub {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.path);
        }
    }

    #[tokio::test]
    async fn test_status_captures_stdout() {
        let stub = Stub::new(
            "status",
            "#!/bin/sh\necho 'playing: fip'\necho '  volume: 80'\n",
        );
        let radio = stub.radio(5);

        let raw = radio.status().await.unwrap();
        assert_eq!(raw, "playing: fip\n  volume: 80\n");
    }

    #[tokio::test]
    async fn test_tune_reports_exit_code() {
        let stub = Stub::new("tune-exit", "#!/bin/sh\n[ -n \"$1\" ] && exit 3\nexit 0\n");
        let radio = stub.radio(5);

        let outcome = radio.tune("fip").await.unwrap();
        assert_eq!(outcome.exit_code, Some(3));
    }

    #[tokio::test]
    async fn test_spawn_failure_on_missing_executable() {
        let radio = Radio::new(&RadioConfig {
            radio_path: PathBuf::from("/nonexistent/piradio"),
            timeout_secs: 5,
        });

        let result = radio.status().await;
        match result {
            Err(RadioError::Spawn { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/piradio"));
            }
            other => panic!("Expected Spawn error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_timeout_on_hanging_executable() {
        let stub = Stub::new("hang", "#!/bin/sh\nsleep 30\n");
        let radio = stub.radio(1);

        let result = radio.status().await;
        match result {
            Err(RadioError::Timeout { timeout_secs, .. }) => {
                assert_eq!(timeout_secs, 1);
            }
            other => panic!("Expected Timeout error, got {other:?}"),
        }
    }
}
