//! Transport to the presence service.
//!
//! [`PresenceClient`] is the seam between the daemon and Discord. The real
//! implementation talks to the local Discord client over IPC through the
//! `discord-rich-presence` crate; tests substitute a recording fake.

use super::error::{ConnectionError, ReportError};
use discord_rich_presence::{activity, DiscordIpc, DiscordIpcClient};
use serde::Serialize;

/// Status shown on the user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresencePayload {
    pub state_text: String,
    pub details_text: String,
    pub large_image_key: String,
    pub large_image_text: String,
    pub small_image_key: String,
    pub small_image_text: String,
    /// Unix timestamp in seconds; Discord shows elapsed time from here.
    pub session_start: i64,
}

/// Operations the daemon needs from a presence service.
pub trait PresenceClient {
    fn connect(&mut self) -> Result<(), ConnectionError>;
    fn set_activity(&mut self, payload: &PresencePayload) -> Result<(), ReportError>;
    fn clear_activity(&mut self) -> Result<(), ReportError>;
    fn close(&mut self) -> Result<(), ReportError>;
}

/// Discord Rich Presence over the local IPC socket.
pub struct DiscordPresence {
    client: DiscordIpcClient,
}

impl DiscordPresence {
    pub fn new(client_id: &str) -> Result<Self, ConnectionError> {
        if client_id.trim().is_empty() {
            return Err(ConnectionError::MissingClientId);
        }
        let client = DiscordIpcClient::new(client_id).map_err(|e| ConnectionError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl PresenceClient for DiscordPresence {
    fn connect(&mut self) -> Result<(), ConnectionError> {
        self.client.connect().map_err(|e| ConnectionError::Connect(e.to_string()))
    }

    fn set_activity(&mut self, payload: &PresencePayload) -> Result<(), ReportError> {
        let assets = activity::Assets::new()
            .large_image(&payload.large_image_key)
            .large_text(&payload.large_image_text)
            .small_image(&payload.small_image_key)
            .small_text(&payload.small_image_text);
        let timestamps = activity::Timestamps::new().start(payload.session_start);
        let activity = activity::Activity::new()
            .state(&payload.state_text)
            .details(&payload.details_text)
            .assets(assets)
            .timestamps(timestamps);

        self.client.set_activity(activity).map_err(|e| ReportError::Update(e.to_string()))
    }

    fn clear_activity(&mut self) -> Result<(), ReportError> {
        self.client.clear_activity().map_err(|e| ReportError::Clear(e.to_string()))
    }

    fn close(&mut self) -> Result<(), ReportError> {
        self.client.close().map_err(|e| ReportError::Disconnect(e.to_string()))
    }
}
