use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use medchat::cli::commands::{ask, chat, configure, format, health};
use medchat::cli::{Args, BackendArgs, Command};
use medchat::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || OutputConfig::default().no_color,
    });

    let filter = match args.verbose {
        0 if args.quiet => "error",
        0 => "warn",
        1 => "info,medchat=debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match args.command {
        None => chat::run_chat(&BackendArgs::default()).await?,
        Some(Command::Chat { backend }) => chat::run_chat(&backend).await?,
        Some(Command::Ask {
            message,
            html,
            backend,
        }) => {
            let options = ask::AskOptions {
                message: message.join(" "),
                html,
                backend,
            };
            ask::run_ask(options).await?;
        }
        Some(Command::Health { backend }) => health::run_health(&backend).await?,
        Some(Command::Format { file, table }) => format::run_format(file.as_deref(), table)?,
        Some(Command::Configure { show }) => configure::run_configure(show)?,
    }

    Ok(())
}
