//! Lifecycle of the presence daemon.
//!
//! Connects to Discord, runs the monitor in the foreground and turns SIGINT /
//! SIGTERM (Ctrl+C on Windows) into an orderly shutdown.

use crate::libs::config::PresenceConfig;
use crate::libs::error::ConnectionError;
use crate::libs::inspector::WindowInspector;
use crate::libs::messages::Message;
use crate::libs::monitor::Monitor;
use crate::libs::presence::{DiscordPresence, PresenceClient};
use crate::libs::reporter::StateReporter;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use std::time::Duration;
use tokio::sync::oneshot;

/// Runs the daemon until a termination signal arrives.
///
/// Returns an error only when the presence service cannot be reached at
/// startup; everything after that is recovered inside the monitor.
pub async fn run_with_signal_handling(config: PresenceConfig) -> Result<()> {
    msg_print!(Message::Starting {
        name: PresenceConfig::app_name().to_string(),
        version: PresenceConfig::app_version().to_string(),
    });
    let session_start = Local::now();

    let client = match connect(&config) {
        Ok(client) => client,
        Err(e) => {
            msg_error!(Message::PresenceConnectFailed(e.to_string()));
            msg_print!(Message::PresenceConnectHint);
            return Err(e.into());
        }
    };
    msg_success!(Message::PresenceConnected);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    spawn_signal_listener(shutdown_tx);

    let inspector = WindowInspector::x11(Duration::from_millis(config.query_timeout));
    let reporter = StateReporter::new(client, session_start, config.max_document_len);
    let monitor = Monitor::new(inspector, reporter, Duration::from_secs(config.poll_interval));

    msg_info!(Message::MonitorStarted {
        poll_interval: config.poll_interval,
        query_timeout: config.query_timeout,
    });
    monitor.run(shutdown_rx).await;

    msg_print!(Message::Farewell);
    Ok(())
}

/// Creates the Discord client and performs the IPC handshake.
pub fn connect(config: &PresenceConfig) -> Result<DiscordPresence, ConnectionError> {
    msg_info!(Message::ConnectingToPresence);
    let mut client = DiscordPresence::new(&config.client_id)?;
    client.connect()?;
    Ok(client)
}

/// Fires `shutdown_tx` on the first termination signal.
///
/// If no handler can be installed the sender is kept alive forever, since
/// dropping it would stop the monitor.
fn spawn_signal_listener(shutdown_tx: oneshot::Sender<()>) {
    #[cfg(unix)]
    {
        tokio::spawn(async move {
            use tokio::signal::unix::{signal, SignalKind};

            let handlers = signal(SignalKind::terminate()).and_then(|term| signal(SignalKind::interrupt()).map(|int| (term, int)));
            let (mut sigterm, mut sigint) = match handlers {
                Ok(handlers) => handlers,
                Err(e) => {
                    msg_error!(Message::FailedToCreateSignalHandler(e.to_string()));
                    std::future::pending::<()>().await;
                    return;
                }
            };

            tokio::select! {
                _ = sigterm.recv() => {
                    msg_info!(Message::WatcherReceivedSigterm);
                }
                _ = sigint.recv() => {
                    msg_info!(Message::WatcherReceivedSigint);
                }
            }

            let _ = shutdown_tx.send(());
        });
    }

    #[cfg(windows)]
    {
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    msg_info!(Message::WatcherReceivedCtrlC);
                    let _ = shutdown_tx.send(());
                }
                Err(e) => {
                    msg_error!(Message::WatcherCtrlCListenFailed(e.to_string()));
                    std::future::pending::<()>().await;
                    drop(shutdown_tx);
                }
            }
        });
    }

    #[cfg(not(any(unix, windows)))]
    {
        crate::msg_warning!(Message::WatcherSignalHandlingNotSupported);
        std::mem::forget(shutdown_tx);
    }
}
