//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::Text;

use crate::config::{
    ChatSettings, ConfigFile, ConfigManager, DEFAULT_ENDPOINT, ResolveOptions, resolve_config,
};
use crate::transport::DEFAULT_TIMEOUT;
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the effective configuration. Otherwise prompts for
/// the endpoint and timeout and saves them.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        let manager = ConfigManager::new()?;
        let config = manager.load_or_default()?;
        print_current(&manager, &config)
    } else {
        handle_prompt_cancellation(run_configure_inner)
    }
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_current(&manager, &config)?;

    let endpoint = prompt_endpoint(config.medchat.endpoint.as_deref())?;
    let timeout_secs = prompt_timeout(config.medchat.timeout_secs)?;

    config.medchat = ChatSettings {
        endpoint: Some(endpoint),
        timeout_secs: Some(timeout_secs),
        greeting_delay_ms: config.medchat.greeting_delay_ms,
    };

    // Reject anything the chat commands would refuse to start with.
    resolve_config(&ResolveOptions::default(), &config)?;
    manager.save(&config)?;

    crate::status!();
    crate::status!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_current(manager: &ConfigManager, config: &ConfigFile) -> Result<()> {
    let resolved = resolve_config(&ResolveOptions::default(), config)?;

    println!("{}", Style::header("Current configuration"));
    println!(
        "  {}      {}",
        Style::label("file"),
        Style::secondary(manager.config_path().display())
    );
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        Style::value(&resolved.endpoint)
    );
    println!(
        "  {}   {}",
        Style::label("timeout"),
        Style::value(format!("{}s", resolved.timeout.as_secs()))
    );
    println!(
        "  {}     {}",
        Style::label("quick"),
        Style::value(format!("{} messages", resolved.quick_messages.len()))
    );
    println!();
    Ok(())
}

fn prompt_endpoint(current: Option<&str>) -> Result<String> {
    let endpoint = Text::new("Chat backend URL:")
        .with_default(current.unwrap_or(DEFAULT_ENDPOINT))
        .with_help_message("The server that answers POST /chat")
        .prompt()?;

    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        bail!("Endpoint cannot be empty");
    }
    Ok(endpoint.to_string())
}

fn prompt_timeout(current: Option<u64>) -> Result<u64> {
    let default = current.unwrap_or(DEFAULT_TIMEOUT.as_secs()).to_string();
    let answer = Text::new("Request timeout (seconds):")
        .with_default(&default)
        .prompt()?;

    match answer.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => bail!("Timeout must be a positive number of seconds, got '{answer}'"),
    }
}
