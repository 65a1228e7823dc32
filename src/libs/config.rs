//! Compiled-in settings for the presence daemon.
//!
//! There is no configuration file: every value below is a constant baked into
//! the binary. The Discord client id comes from `[package.metadata]` in
//! `Cargo.toml` and can be replaced at build time with the
//! `OFFICE_PRESENCE_CLIENT_ID` environment variable (or a `.env` file), see
//! `build.rs`.

use serde::{Deserialize, Serialize};

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

/// Seconds between two window checks.
pub const POLL_INTERVAL_SECS: u64 = 5;

/// Longest document name shown in the status line, in characters.
pub const MAX_DOCUMENT_LEN: usize = 50;

/// Upper bound for a single external window query, in milliseconds.
pub const QUERY_TIMEOUT_MS: u64 = 2_000;

/// Settings shared by the inspector, the reporter and the poll loop.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PresenceConfig {
    /// Discord application id used for the IPC handshake.
    pub client_id: String,
    /// Interval in seconds between window checks.
    pub poll_interval: u64,
    /// Maximum number of characters of the document name in the status line.
    pub max_document_len: usize,
    /// Timeout in milliseconds for each `xdotool` invocation.
    pub query_timeout: u64,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        PresenceConfig {
            client_id: APP_METADATA_CLIENT_ID.to_string(),
            poll_interval: POLL_INTERVAL_SECS,
            max_document_len: MAX_DOCUMENT_LEN,
            query_timeout: QUERY_TIMEOUT_MS,
        }
    }
}

impl PresenceConfig {
    /// Application name as compiled in.
    pub fn app_name() -> &'static str {
        APP_METADATA_NAME
    }

    /// Application version as compiled in.
    pub fn app_version() -> &'static str {
        APP_METADATA_VERSION
    }
}
