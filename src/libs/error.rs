//! Error types for the three failure classes of the daemon.
//!
//! - [`ConnectionError`] is fatal at startup and ends the process with exit code 1.
//! - [`InspectionError`] is per tick; the poll loop skips the tick.
//! - [`ReportError`] is per tick; it is printed and the next state change retries.

use thiserror::Error;

/// Failure to read the focused window for one poll cycle.
#[derive(Debug, Error)]
pub enum InspectionError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    CommandFailed { command: String, status: String },

    #[error("`{command}` timed out after {timeout_ms}ms")]
    Timeout { command: String, timeout_ms: u64 },

    #[error("`{command}` produced no output")]
    EmptyOutput { command: String },

    #[error("invalid process id: {0:?}")]
    InvalidPid(String),

    #[error("process {0} not found")]
    ProcessNotFound(u32),
}

/// Failure to reach the presence service at startup.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("no client id was compiled in (set OFFICE_PRESENCE_CLIENT_ID when building)")]
    MissingClientId,

    #[error("failed to create presence client: {0}")]
    Client(String),

    #[error("{0}")]
    Connect(String),
}

/// Failure to deliver a status change to the presence service.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{0}")]
    Update(String),

    #[error("{0}")]
    Clear(String),

    #[error("{0}")]
    Disconnect(String),
}
