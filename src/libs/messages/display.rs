//! Display implementation for office-presence messages.
//!
//! Every user-facing line the daemon prints is defined here, so the wording
//! stays consistent between the console output and the tracing output used in
//! debug mode.
//!
//! ```rust
//! use office_presence::libs::messages::Message;
//!
//! let message = Message::AppDetected {
//!     app_name: "Writer".to_string(),
//!     document: "Report".to_string(),
//! };
//! assert_eq!(message.to_string(), "Detected: Writer - Report");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === STARTUP MESSAGES ===
            Message::Starting { name, version } => {
                format!("Starting Discord Rich Presence for LibreOffice ({} v{})...", name, version)
            }
            Message::ConnectingToPresence => "Connecting to Discord...".to_string(),
            Message::PresenceConnected => "Connected to Discord!".to_string(),
            Message::PresenceConnectFailed(error) => format!("Failed to connect to Discord: {}", error),
            Message::PresenceConnectHint => "Make sure the Discord desktop app is running.".to_string(),

            // === MONITOR MESSAGES ===
            Message::MonitorStarted { poll_interval, query_timeout } => format!(
                "Watching the active window every {}s (query timeout {}ms)",
                poll_interval, query_timeout
            ),
            Message::MonitorShuttingDown => "Shutting down...".to_string(),
            Message::CaptureSkipped(reason) => format!("Window capture skipped: {}", reason),

            // === DETECTION MESSAGES ===
            Message::AppDetected { app_name, document } => format!("Detected: {} - {}", app_name, document),
            Message::AppLostFocus => "LibreOffice is not in focus".to_string(),
            Message::PresenceUpdateFailed(error) => format!("Failed to update status: {}", error),
            Message::PresenceClearFailed(error) => format!("Failed to clear status: {}", error),
            Message::PresencePayload(payload) => format!("Presence payload: {}", payload),

            // === SHUTDOWN MESSAGES ===
            Message::WatcherReceivedSigterm => "Received SIGTERM, shutting down gracefully...".to_string(),
            Message::WatcherReceivedSigint => "Received SIGINT, shutting down gracefully...".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C, shutting down gracefully...".to_string(),
            Message::WatcherCtrlCListenFailed(error) => format!("Failed to listen for Ctrl+C: {}", error),
            Message::WatcherSignalHandlingNotSupported => "Warning: Signal handling not supported on this platform".to_string(),
            Message::FailedToCreateSignalHandler(error) => format!("Failed to create signal handler: {}", error),
            Message::PresenceDisconnectFailed(error) => format!("Failed to disconnect from Discord: {}", error),
            Message::Farewell => "Disconnected from Discord. Bye!".to_string(),
        };
        write!(f, "{}", text)
    }
}
