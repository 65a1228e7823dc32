//! Active window inspection.
//!
//! A capture is three dependent queries: the focused window id, then that
//! window's title and owning pid, then the pid's process name. Window queries
//! go through `xdotool`, the process name comes from the process table via
//! `sysinfo`. Every external command runs under a timeout so a hung X server
//! cannot stall the poll loop forever.

use super::error::InspectionError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use sysinfo::{Pid, ProcessesToUpdate, System};
use tokio::process::Command;
use tokio::time;

/// Everything known about the focused window for one poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSnapshot {
    pub window_id: String,
    pub title: String,
    pub process_name: String,
    pub pid: u32,
}

/// The individual queries a capture is built from.
#[async_trait]
pub trait WindowQuery: Send {
    async fn active_window_id(&mut self) -> Result<String, InspectionError>;
    async fn window_title(&mut self, window_id: &str) -> Result<String, InspectionError>;
    async fn window_pid(&mut self, window_id: &str) -> Result<u32, InspectionError>;
    async fn process_name(&mut self, pid: u32) -> Result<String, InspectionError>;
}

/// Source of window snapshots for the poll loop.
#[async_trait]
pub trait Inspect: Send {
    async fn capture(&mut self) -> Result<WindowSnapshot, InspectionError>;
}

/// Runs the queries of a [`WindowQuery`] in sequence to build a snapshot.
pub struct WindowInspector<Q> {
    query: Q,
}

impl<Q: WindowQuery> WindowInspector<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl WindowInspector<XdoTool> {
    /// Inspector backed by `xdotool` and the system process table.
    pub fn x11(timeout: Duration) -> Self {
        Self::new(XdoTool::new(timeout))
    }
}

#[async_trait]
impl<Q: WindowQuery> Inspect for WindowInspector<Q> {
    async fn capture(&mut self) -> Result<WindowSnapshot, InspectionError> {
        let window_id = self.query.active_window_id().await?;
        let title = self.query.window_title(&window_id).await?;
        let pid = self.query.window_pid(&window_id).await?;
        let process_name = self.query.process_name(pid).await?;

        Ok(WindowSnapshot {
            window_id,
            title,
            process_name,
            pid,
        })
    }
}

/// [`WindowQuery`] implementation for X11 desktops.
pub struct XdoTool {
    program: PathBuf,
    timeout: Duration,
    system: System,
}

impl XdoTool {
    pub fn new(timeout: Duration) -> Self {
        Self::with_program("xdotool", timeout)
    }

    /// Uses `program` in place of `xdotool` found on `PATH`.
    pub fn with_program(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
            system: System::new(),
        }
    }

    /// Runs the program with `args` and returns its trimmed stdout, which may be empty.
    async fn run(&self, args: &[&str]) -> Result<String, InspectionError> {
        let command = format!("{} {}", self.program.display(), args.join(" "));
        let mut xdotool = Command::new(&self.program);
        xdotool.args(args).kill_on_drop(true);

        let output = match time::timeout(self.timeout, xdotool.output()).await {
            Ok(result) => result.map_err(|source| InspectionError::Spawn {
                command: command.clone(),
                source,
            })?,
            Err(_) => {
                return Err(InspectionError::Timeout {
                    command,
                    timeout_ms: self.timeout.as_millis() as u64,
                })
            }
        };

        if !output.status.success() {
            return Err(InspectionError::CommandFailed {
                command,
                status: output.status.to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Like [`XdoTool::run`], but empty output is an error.
    async fn run_non_empty(&self, args: &[&str]) -> Result<String, InspectionError> {
        let stdout = self.run(args).await?;
        if stdout.is_empty() {
            return Err(InspectionError::EmptyOutput {
                command: format!("{} {}", self.program.display(), args.join(" ")),
            });
        }
        Ok(stdout)
    }
}

#[async_trait]
impl WindowQuery for XdoTool {
    async fn active_window_id(&mut self) -> Result<String, InspectionError> {
        self.run_non_empty(&["getactivewindow"]).await
    }

    /// Untitled windows are valid and yield an empty title.
    async fn window_title(&mut self, window_id: &str) -> Result<String, InspectionError> {
        self.run(&["getwindowname", window_id]).await
    }

    async fn window_pid(&mut self, window_id: &str) -> Result<u32, InspectionError> {
        let raw = self.run_non_empty(&["getwindowpid", window_id]).await?;
        parse_pid(&raw)
    }

    async fn process_name(&mut self, pid: u32) -> Result<String, InspectionError> {
        let pid_key = Pid::from_u32(pid);
        self.system.refresh_processes(ProcessesToUpdate::Some(&[pid_key]), true);
        self.system
            .process(pid_key)
            .map(|process| process.name().to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
            .ok_or(InspectionError::ProcessNotFound(pid))
    }
}

/// Parses the pid printed by `xdotool getwindowpid`.
pub fn parse_pid(raw: &str) -> Result<u32, InspectionError> {
    raw.trim().parse::<u32>().map_err(|_| InspectionError::InvalidPid(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pid_accepts_padded_number() {
        assert_eq!(parse_pid(" 4242\n").unwrap(), 4242);
    }

    #[test]
    fn parse_pid_rejects_garbage() {
        assert!(matches!(parse_pid("abc"), Err(InspectionError::InvalidPid(_))));
        assert!(matches!(parse_pid("-1"), Err(InspectionError::InvalidPid(_))));
    }

    #[tokio::test]
    #[ignore] // Requires an X11 session with xdotool installed
    async fn capture_live_window() {
        let mut inspector = WindowInspector::x11(Duration::from_secs(2));
        let snapshot = inspector.capture().await.unwrap();
        println!("Active: {} ({}) - {}", snapshot.process_name, snapshot.pid, snapshot.title);
    }
}
