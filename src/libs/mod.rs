//! Core library modules of office-presence.
//!
//! Leaves first: [`inspector`] reads the focused window, [`classifier`] and
//! [`profile`] turn it into an application and a document, [`reporter`] and
//! [`presence`] forward changes to Discord, [`monitor`] runs the poll loop and
//! [`daemon`] wires it all together with signal handling.

pub mod classifier;
pub mod config;
pub mod daemon;
pub mod error;
pub mod inspector;
pub mod messages;
pub mod monitor;
pub mod presence;
pub mod profile;
pub mod reporter;
