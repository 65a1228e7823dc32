//! # office-presence - Discord Rich Presence for LibreOffice
//!
//! Polls the focused X11 window every few seconds. When it belongs to
//! LibreOffice, the window title tells which application (Writer, Calc, ...)
//! and which document are open, and that pair becomes the user's Discord
//! status. Updates are only sent when the pair changes; the status is cleared
//! when LibreOffice loses focus.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use office_presence::commands::Cli;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
