use crate::libs::config::PresenceConfig;
use crate::libs::daemon;
use anyhow::Result;

/// Runs the presence daemon in the foreground until interrupted.
pub async fn cmd() -> Result<()> {
    let config = PresenceConfig::default();
    crate::msg_debug!(format!("Effective configuration: {:?}", config));
    daemon::run_with_signal_handling(config).await
}
