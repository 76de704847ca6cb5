use anyhow::{Result, bail};

use super::load_config;
use crate::cli::BackendArgs;
use crate::controller::{ChatController, ControllerOptions, SendOutcome};
use crate::transport::HttpTransport;
use crate::ui::{Spinner, print_message};

pub struct AskOptions {
    pub message: String,
    pub html: bool,
    pub backend: BackendArgs,
}

/// Sends one message and prints the rendered reply.
///
/// Failure replies are printed like any other bot message; the command
/// still exits non-zero so scripts can tell them apart.
pub async fn run_ask(options: AskOptions) -> Result<()> {
    let config = load_config(&options.backend)?;
    let transport = HttpTransport::new(config.endpoint.clone(), config.timeout);
    let controller = ChatController::new(
        transport,
        ControllerOptions {
            timeout: config.timeout,
            greeting_delay: config.greeting_delay,
        },
    );

    let spinner = Spinner::new("Thinking...");
    let outcome = controller.send_quick_message(&options.message).await;
    spinner.stop();

    // a fresh controller is never busy, so an ignored send means empty input
    if !outcome.was_sent() {
        bail!("Error: Message is empty");
    }

    let transcript = controller.transcript();
    if let Some(reply) = transcript.last_message() {
        if options.html {
            print!("{}", reply.to_html());
        } else {
            print_message(reply);
        }
    }

    match outcome {
        SendOutcome::Failed(kind) => bail!("Request failed ({kind:?})"),
        _ => Ok(()),
    }
}
