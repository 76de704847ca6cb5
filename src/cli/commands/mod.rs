//! Subcommand implementations.

use anyhow::Result;

use crate::cli::BackendArgs;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

/// One-shot message command handler.
pub mod ask;

/// Chat mode command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Formatter command handler.
pub mod format;

/// Backend health command handler.
pub mod health;

/// Resolves the backend configuration from CLI flags and the config file.
fn load_config(backend: &BackendArgs) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;

    let options = ResolveOptions {
        endpoint: backend.endpoint.clone(),
        timeout_secs: backend.timeout,
    };
    resolve_config(&options, &file_config)
}
