//! Configuration file management and CLI override resolution.

mod manager;

pub use manager::{
    ChatSettings, ConfigFile, ConfigManager, DEFAULT_ENDPOINT, QuickMessage, ResolveOptions,
    ResolvedConfig, default_quick_messages, resolve_config,
};
