// src/error.rs

//! Error types for refresh trigger execution

use thiserror::Error;

/// Result type for hook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running a refresh tool
///
/// None of these ever reach the installer: the executor logs them and
/// records them in [`crate::trigger::TriggerResults`].
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while waiting on or reading from a tool
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The tool could not be started
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran longer than the configured timeout and was killed
    #[error("handler '{program}' timed out after {secs} seconds")]
    Timeout { program: String, secs: u64 },

    /// The tool exited unsuccessfully
    #[error("handler '{program}' failed with exit code {code}: {stderr}")]
    Failed {
        program: String,
        code: i32,
        stderr: String,
    },
}
