//! Builds status payloads and hands them to the presence client.

use super::classifier::truncate;
use super::error::ReportError;
use super::presence::{PresenceClient, PresencePayload};
use super::profile::{AppProfile, LIBREOFFICE};
use crate::libs::messages::Message;
use crate::msg_debug;
use chrono::{DateTime, Local};

/// Formats and sends presence updates for one session.
///
/// The session start is fixed when the reporter is created, so the elapsed
/// time shown by Discord counts from program start, not from the current
/// document.
pub struct StateReporter<C> {
    client: C,
    session_start: DateTime<Local>,
    max_document_len: usize,
}

impl<C: PresenceClient> StateReporter<C> {
    pub fn new(client: C, session_start: DateTime<Local>, max_document_len: usize) -> Self {
        Self {
            client,
            session_start,
            max_document_len,
        }
    }

    pub fn session_start(&self) -> DateTime<Local> {
        self.session_start
    }

    /// Builds the payload for `profile` editing `document`.
    pub fn payload(&self, profile: &AppProfile, document: &str) -> PresencePayload {
        PresencePayload {
            state_text: format!("Editing: {}", truncate(document, self.max_document_len)),
            details_text: profile.description.to_string(),
            large_image_key: profile.icon_key.to_string(),
            large_image_text: profile.full_name(),
            small_image_key: LIBREOFFICE.icon_key.to_string(),
            small_image_text: LIBREOFFICE.display_name.to_string(),
            session_start: self.session_start.timestamp(),
        }
    }

    /// Sends the status for `profile` editing `document`.
    pub fn report(&mut self, profile: &AppProfile, document: &str) -> Result<(), ReportError> {
        let payload = self.payload(profile, document);
        if let Ok(json) = serde_json::to_string(&payload) {
            msg_debug!(Message::PresencePayload(json));
        }
        self.client.set_activity(&payload)
    }

    /// Removes the status from the profile.
    pub fn clear(&mut self) -> Result<(), ReportError> {
        self.client.clear_activity()
    }

    /// Closes the connection to the presence service.
    pub fn disconnect(&mut self) -> Result<(), ReportError> {
        self.client.close()
    }
}
