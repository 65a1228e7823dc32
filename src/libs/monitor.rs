//! Poll loop that turns window snapshots into presence updates.
//!
//! The monitor owns everything that changes over time (the last reported
//! state, the reporter and its session start), so each cycle can be driven
//! directly from tests through [`Monitor::tick`] without a timer or X server.
//!
//! ```text
//!            tracked, new composite           tracked, same composite
//!   IDLE ───────────────────────────▶ TRACKING ◀──────────────────────┐
//!    ▲                                 │    └─────────────────────────┘
//!    └──────── not tracked ───────────┘ (clear)
//! ```
//!
//! A failed capture never changes the state.

use super::classifier::{classify, extract_document_name, is_tracked};
use super::inspector::Inspect;
use super::presence::PresenceClient;
use super::profile::AppProfile;
use super::reporter::StateReporter;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info};
use tokio::sync::oneshot;
use tokio::time::{self, Duration, MissedTickBehavior};

/// What the monitor last reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TrackedState {
    #[default]
    Idle,
    Tracking { app_key: String, document: String },
}

impl TrackedState {
    /// The `app_key:document` string used for change detection; empty when idle.
    pub fn composite(&self) -> String {
        match self {
            TrackedState::Idle => String::new(),
            TrackedState::Tracking { app_key, document } => format!("{}:{}", app_key, document),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, TrackedState::Idle)
    }
}

/// Result of a single poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The window could not be inspected; nothing changed.
    Skipped,
    /// Another application has focus and nothing was being reported.
    Ignored,
    /// Same application and document as last time.
    Unchanged,
    /// A new application or document was reported.
    Detected { app_key: String, document: String },
    /// LibreOffice lost focus and the status was cleared.
    LostFocus,
}

pub struct Monitor<I, C> {
    inspector: I,
    reporter: StateReporter<C>,
    state: TrackedState,
    poll_interval: Duration,
}

impl<I: Inspect, C: PresenceClient> Monitor<I, C> {
    pub fn new(inspector: I, reporter: StateReporter<C>, poll_interval: Duration) -> Self {
        Self {
            inspector,
            reporter,
            state: TrackedState::Idle,
            poll_interval,
        }
    }

    pub fn state(&self) -> &TrackedState {
        &self.state
    }

    /// Runs one poll cycle.
    ///
    /// Report and clear failures are printed and the new state is kept
    /// anyway: the update is retried on the next change, not on the next tick.
    pub async fn tick(&mut self) -> TickOutcome {
        let snapshot = match self.inspector.capture().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                msg_debug!(Message::CaptureSkipped(e.to_string()));
                return TickOutcome::Skipped;
            }
        };

        if !is_tracked(&snapshot.process_name) {
            if self.state.is_idle() {
                return TickOutcome::Ignored;
            }
            msg_info!(Message::AppLostFocus);
            if let Err(e) = self.reporter.clear() {
                msg_error!(Message::PresenceClearFailed(e.to_string()));
            }
            self.state = TrackedState::Idle;
            return TickOutcome::LostFocus;
        }

        let app_key = classify(&snapshot.title);
        let document = extract_document_name(&snapshot.title);
        let next = TrackedState::Tracking {
            app_key: app_key.to_string(),
            document: document.clone(),
        };
        if next.composite() == self.state.composite() {
            return TickOutcome::Unchanged;
        }

        let profile = AppProfile::lookup(app_key);
        msg_info!(Message::AppDetected {
            app_name: profile.display_name.to_string(),
            document: document.clone(),
        });
        if let Err(e) = self.reporter.report(profile, &document) {
            msg_error!(Message::PresenceUpdateFailed(e.to_string()));
        }
        self.state = next;

        TickOutcome::Detected {
            app_key: app_key.to_string(),
            document,
        }
    }

    /// Polls until `shutdown` fires (or its sender is dropped), then
    /// disconnects from the presence service.
    ///
    /// The first check happens immediately. Shutdown is only observed between
    /// ticks, never in the middle of one. Taking `self` by value means the
    /// disconnect runs exactly once.
    pub async fn run(mut self, mut shutdown: oneshot::Receiver<()>) {
        let mut interval = time::interval(self.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    msg_info!(Message::MonitorShuttingDown);
                    break;
                }
                _ = interval.tick() => {
                    let outcome = self.tick().await;
                    msg_debug!(format!("Tick outcome: {:?}", outcome));
                }
            }
        }

        if let Err(e) = self.reporter.disconnect() {
            msg_error!(Message::PresenceDisconnectFailed(e.to_string()));
        }
    }
}
