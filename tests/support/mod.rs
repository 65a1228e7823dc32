//! Fakes shared by the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use office_presence::libs::error::{ConnectionError, InspectionError, ReportError};
use office_presence::libs::inspector::{Inspect, WindowSnapshot};
use office_presence::libs::presence::{PresenceClient, PresencePayload};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const TRACKED_PROCESS: &str = "soffice.bin";

/// A call received by [`RecordingClient`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Set(PresencePayload),
    Clear,
    Close,
}

/// Presence client that records every call and can be told to fail updates.
#[derive(Clone, Default)]
pub struct RecordingClient {
    pub calls: Arc<Mutex<Vec<Call>>>,
    pub fail_updates: bool,
}

impl RecordingClient {
    pub fn failing() -> Self {
        Self {
            fail_updates: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_count(&self) -> usize {
        self.calls().iter().filter(|call| matches!(call, Call::Set(_))).count()
    }

    pub fn clear_count(&self) -> usize {
        self.calls().iter().filter(|call| matches!(call, Call::Clear)).count()
    }
}

impl PresenceClient for RecordingClient {
    fn connect(&mut self) -> Result<(), ConnectionError> {
        Ok(())
    }

    fn set_activity(&mut self, payload: &PresencePayload) -> Result<(), ReportError> {
        self.calls.lock().unwrap().push(Call::Set(payload.clone()));
        if self.fail_updates {
            return Err(ReportError::Update("pipe closed".to_string()));
        }
        Ok(())
    }

    fn clear_activity(&mut self) -> Result<(), ReportError> {
        self.calls.lock().unwrap().push(Call::Clear);
        if self.fail_updates {
            return Err(ReportError::Clear("pipe closed".to_string()));
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), ReportError> {
        self.calls.lock().unwrap().push(Call::Close);
        Ok(())
    }
}

/// Inspector that replays a fixed list of captures, then fails.
#[derive(Default)]
pub struct ScriptedInspector {
    captures: VecDeque<Result<WindowSnapshot, InspectionError>>,
    pub taken: Arc<AtomicUsize>,
}

impl ScriptedInspector {
    pub fn new(captures: Vec<Result<WindowSnapshot, InspectionError>>) -> Self {
        Self {
            captures: captures.into(),
            taken: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn windows(windows: &[(&str, &str)]) -> Self {
        Self::new(windows.iter().map(|(process, title)| Ok(snapshot(process, title))).collect())
    }
}

#[async_trait]
impl Inspect for ScriptedInspector {
    async fn capture(&mut self) -> Result<WindowSnapshot, InspectionError> {
        self.taken.fetch_add(1, Ordering::SeqCst);
        self.captures.pop_front().unwrap_or_else(|| Err(no_window()))
    }
}

pub fn snapshot(process: &str, title: &str) -> WindowSnapshot {
    WindowSnapshot {
        window_id: "62914565".to_string(),
        title: title.to_string(),
        process_name: process.to_string(),
        pid: 4242,
    }
}

pub fn no_window() -> InspectionError {
    InspectionError::CommandFailed {
        command: "xdotool getactivewindow".to_string(),
        status: "exit status: 1".to_string(),
    }
}
