#[derive(Debug, Clone)]
pub enum Message {
    // === STARTUP MESSAGES ===
    Starting {
        name: String,
        version: String,
    },
    ConnectingToPresence,
    PresenceConnected,
    PresenceConnectFailed(String), // error
    PresenceConnectHint,

    // === MONITOR MESSAGES ===
    MonitorStarted {
        poll_interval: u64,
        query_timeout: u64,
    },
    MonitorShuttingDown,
    CaptureSkipped(String), // reason

    // === DETECTION MESSAGES ===
    AppDetected {
        app_name: String,
        document: String,
    },
    AppLostFocus,
    PresenceUpdateFailed(String), // error
    PresenceClearFailed(String),  // error
    PresencePayload(String),      // serialized payload

    // === SHUTDOWN MESSAGES ===
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String), // error
    WatcherSignalHandlingNotSupported,
    FailedToCreateSignalHandler(String), // error
    PresenceDisconnectFailed(String),    // error
    Farewell,
}
