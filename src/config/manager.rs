use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::paths;
use crate::transport::DEFAULT_TIMEOUT;

/// Backend used when neither the CLI nor the config file names one.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000";

const DEFAULT_GREETING_DELAY_MS: u64 = 500;

/// Settings in the `[medchat]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSettings {
    /// Base URL of the chat backend.
    pub endpoint: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Delay before the greeting, in milliseconds.
    pub greeting_delay_ms: Option<u64>,
}

/// A canned prompt offered by `/quick`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickMessage {
    pub label: String,
    pub text: String,
}

impl QuickMessage {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Quick messages used when the config file defines none.
pub fn default_quick_messages() -> Vec<QuickMessage> {
    vec![
        QuickMessage::new("All patients", "Show all patients"),
        QuickMessage::new("Find by name", "Find patient John Smith"),
        QuickMessage::new("Patient details", "Get details for patient 123"),
        QuickMessage::new("By provider", "Find patients by Dr. Johnson"),
    ]
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/medchat/config.toml`:
///
/// ```toml
/// [medchat]
/// endpoint = "http://localhost:3000"
/// timeout_secs = 30
///
/// [[quick_messages]]
/// label = "All patients"
/// text = "Show all patients"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub medchat: ChatSettings,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quick_messages: Vec<QuickMessage>,
}

/// Configuration after merging CLI options, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub greeting_delay: Duration,
    pub quick_messages: Vec<QuickMessage>,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI options, then the config file, then built-in defaults.
///
/// # Errors
///
/// Returns an error if the endpoint is not an http(s) URL or the timeout is zero.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let endpoint = options
        .endpoint
        .as_ref()
        .or(config_file.medchat.endpoint.as_ref())
        .map_or(DEFAULT_ENDPOINT, String::as_str)
        .trim()
        .to_string();

    if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        bail!(
            "Invalid endpoint: '{endpoint}'\n\n\
             The endpoint must be an http:// or https:// URL, e.g. {DEFAULT_ENDPOINT}"
        );
    }

    let timeout_secs = options
        .timeout_secs
        .or(config_file.medchat.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT.as_secs());

    if timeout_secs == 0 {
        bail!("Invalid timeout: must be at least 1 second");
    }

    let greeting_delay_ms = config_file
        .medchat
        .greeting_delay_ms
        .unwrap_or(DEFAULT_GREETING_DELAY_MS);

    let quick_messages = if config_file.quick_messages.is_empty() {
        default_quick_messages()
    } else {
        config_file.quick_messages.clone()
    };

    Ok(ResolvedConfig {
        endpoint,
        timeout: Duration::from_secs(timeout_secs),
        greeting_delay: Duration::from_millis(greeting_delay_ms),
        quick_messages,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/medchat/config.toml`
    /// or `~/.config/medchat/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager for an explicit file.
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, falling back to defaults if it is missing.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager::with_path(temp_dir.path().join("config.toml"))
    }

    fn create_test_config() -> ConfigFile {
        ConfigFile {
            medchat: ChatSettings {
                endpoint: Some("https://chat.example.com".to_string()),
                timeout_secs: Some(10),
                greeting_delay_ms: Some(0),
            },
            quick_messages: vec![QuickMessage::new("Females", "Find female patients")],
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        let config = create_test_config();

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("nested/dir/config.toml"));

        manager.save(&ConfigFile::default()).unwrap();

        assert!(manager.config_path().exists());
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
        assert_eq!(manager.load_or_default().unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_load_or_default_rejects_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "[medchat\nendpoint = ").unwrap();

        let err = manager.load_or_default().unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_parse_partial_file() {
        let config: ConfigFile = toml::from_str("[medchat]\nendpoint = \"http://10.0.0.5:3000\"\n").unwrap();

        assert_eq!(config.medchat.endpoint.as_deref(), Some("http://10.0.0.5:3000"));
        assert!(config.medchat.timeout_secs.is_none());
        assert!(config.quick_messages.is_empty());
    }

    #[test]
    fn test_resolve_defaults() {
        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.timeout, DEFAULT_TIMEOUT);
        assert_eq!(resolved.greeting_delay, Duration::from_millis(500));
        assert_eq!(resolved.quick_messages, default_quick_messages());
    }

    #[test]
    fn test_default_timeout_shared_with_controller() {
        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

        assert_eq!(
            resolved.timeout,
            crate::controller::ControllerOptions::default().timeout
        );
    }

    #[test]
    fn test_resolve_falls_back_to_file() {
        let resolved = resolve_config(&ResolveOptions::default(), &create_test_config()).unwrap();

        assert_eq!(resolved.endpoint, "https://chat.example.com");
        assert_eq!(resolved.timeout, Duration::from_secs(10));
        assert_eq!(resolved.greeting_delay, Duration::ZERO);
        assert_eq!(resolved.quick_messages.len(), 1);
    }

    #[test]
    fn test_resolve_cli_overrides_file() {
        let options = ResolveOptions {
            endpoint: Some("http://localhost:8080".to_string()),
            timeout_secs: Some(5),
        };

        let resolved = resolve_config(&options, &create_test_config()).unwrap();

        assert_eq!(resolved.endpoint, "http://localhost:8080");
        assert_eq!(resolved.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_resolve_invalid_endpoint() {
        let options = ResolveOptions {
            endpoint: Some("localhost:3000".to_string()),
            timeout_secs: None,
        };

        let err = resolve_config(&options, &ConfigFile::default()).unwrap_err();
        assert!(err.to_string().contains("Invalid endpoint"));
    }

    #[test]
    fn test_resolve_zero_timeout() {
        let options = ResolveOptions {
            endpoint: None,
            timeout_secs: Some(0),
        };

        let err = resolve_config(&options, &ConfigFile::default()).unwrap_err();
        assert!(err.to_string().contains("timeout"));
    }
}
