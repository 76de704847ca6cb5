//! Chat mode UI components.

use crate::config::{QuickMessage, ResolvedConfig};
use crate::transport::HealthStatus;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(config: &ResolvedConfig) {
    println!(
        "{} {} - MCP Medical Assistant",
        Style::header("medchat"),
        Style::version(format!("v{VERSION}"))
    );
    println!("{}", Style::secondary(&config.endpoint));
    println!("{}", Style::hint("Type /quick for suggested questions"));
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &ResolvedConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::value(&config.endpoint)
    );
    println!(
        "  {}    {}",
        Style::label("timeout"),
        Style::value(format!("{}s", config.timeout.as_secs()))
    );
    println!(
        "  {}   {}",
        Style::label("greeting"),
        Style::value(format!("{}ms", config.greeting_delay.as_millis()))
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let commands = [
        ("/quick", "List quick messages"),
        ("/quick N", "Send quick message N"),
        ("/health", "Check the backend's health"),
        ("/save PATH", "Save the transcript as an HTML page"),
        ("/config", "Show current configuration"),
        ("/help", "Show this help"),
        ("/quit", "Exit chat mode"),
    ];
    for (command, description) in commands {
        println!(
            "  {}  {}",
            Style::command(format!("{command:<10}")),
            Style::secondary(description)
        );
    }
    println!();
}

pub fn print_quick_messages(messages: &[QuickMessage]) {
    println!("{}", Style::header("Quick messages"));
    for (index, message) in messages.iter().enumerate() {
        println!(
            "  {}  {}  {}",
            Style::command(index + 1),
            Style::value(&message.label),
            Style::secondary(format!("\"{}\"", message.text))
        );
    }
    println!();
}

pub fn print_health(endpoint: &str, health: &HealthStatus) {
    let status = if health.is_healthy() {
        Style::success(&health.status)
    } else {
        Style::warning(&health.status)
    };

    println!("{}", Style::header("Backend health"));
    println!("  {}     {}", Style::label("backend"), Style::secondary(endpoint));
    println!("  {}      {status}", Style::label("status"));
    println!(
        "  {}         {}",
        Style::label("llm"),
        if health.llm_initialized {
            Style::success("initialized")
        } else {
            Style::warning("not initialized")
        }
    );
    if let Some(url) = &health.mcp_server_url {
        println!("  {}  {}", Style::label("mcp server"), Style::secondary(url));
    }
    println!();
}
