//! # medchat - MCP Medical Assistant chat client
//!
//! `medchat` is a terminal client for a medical-assistant chat backend. It
//! posts each question to the backend's `/chat` route, renders replies
//! (including patient tables) as chat bubbles, and keeps an append-only
//! transcript that can be exported as an HTML page.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive chat against http://localhost:3000
//! medchat
//!
//! # One-shot question
//! medchat ask Show all patients
//!
//! # Backend health
//! medchat health --endpoint https://chat.example.com
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/medchat/config.toml`:
//!
//! ```toml
//! [medchat]
//! endpoint = "http://localhost:3000"
//! timeout_secs = 30
//!
//! [[quick_messages]]
//! label = "All patients"
//! text = "Show all patients"
//! ```

/// Interactive chat mode.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Request dispatch, busy flag and transcript updates.
pub mod controller;

/// Inline markup and table formatting.
pub mod format;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Message bubbles and the transcript.
pub mod render;

/// HTTP transport to the chat backend.
pub mod transport;

/// Terminal UI components (spinner, colors).
pub mod ui;
