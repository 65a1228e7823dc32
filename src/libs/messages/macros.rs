//! Convenient macros for console output and logging.
//!
//! Each macro prints a [`Message`](super::Message) with a short visual marker.
//! Output is routed by mode:
//!
//! - **Normal mode**: plain `println!` to stdout, one status line per event.
//! - **Debug mode**: the same text goes through `tracing`, so timestamps and
//!   levels are attached by the subscriber installed in `main`.
//!
//! Debug mode is on when `OFFICE_PRESENCE_DEBUG` or `RUST_LOG` is set. The
//! check happens once and is cached.
//!
//! ```text
//! msg_info!(..)  ──▶ debug mode? ──yes──▶ tracing::info!
//!                          └─────no──▶ println!
//! ```
//!
//! Errors are printed to stdout as well: the daemon runs in a terminal and its
//! whole log is its standard output.

use std::sync::OnceLock;

/// Name of the environment variable that switches on debug output.
pub const DEBUG_ENV: &str = "OFFICE_PRESENCE_DEBUG";

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns whether debug output is enabled.
///
/// Checks `OFFICE_PRESENCE_DEBUG` and `RUST_LOG` on first call and caches the
/// answer for the lifetime of the process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV).is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a message without a marker.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
///
/// ```text
/// ✅ Connected to Discord!
/// ```
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix.
///
/// Unlike most CLIs this goes to stdout; see the module docs.
///
/// ```text
/// ❌ Failed to update status: pipe closed
/// ```
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            println!("❌ {}", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
///
/// ```text
/// ℹ️ Detected: Writer - Report
/// ```
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Debug-only message with 🔍 prefix. Suppressed entirely in normal mode.
///
/// Used for per-tick details such as skipped captures, which would flood the
/// console every five seconds otherwise.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
