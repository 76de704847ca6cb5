use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "medchat")]
#[command(about = "Terminal chat client for the MCP Medical Assistant")]
#[command(version)]
pub struct Args {
    /// Suppress status output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Backend connection options shared by the networked commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BackendArgs {
    /// Chat backend URL (e.g. http://localhost:3000)
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat session (default)
    Chat {
        #[command(flatten)]
        backend: BackendArgs,
    },
    /// Send one message and print the reply
    Ask {
        /// Message to send
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,

        /// Print the reply as bubble HTML instead of terminal text
        #[arg(long)]
        html: bool,

        #[command(flatten)]
        backend: BackendArgs,
    },
    /// Check the backend's health
    Health {
        #[command(flatten)]
        backend: BackendArgs,
    },
    /// Format text from a file or stdin as bubble HTML
    Format {
        /// File to format (reads from stdin if not provided)
        file: Option<String>,

        /// Convert markdown pipe tables instead of inline markup
        #[arg(long)]
        table: bool,
    },
    /// Configure medchat settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
