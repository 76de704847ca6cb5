//! Interactive chat mode.
//!
//! A REPL over [`crate::controller::ChatController`] with slash commands for
//! quick messages, health checks and transcript export.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
pub(crate) mod ui;

pub use session::ChatSession;
