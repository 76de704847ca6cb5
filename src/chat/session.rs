use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::path::Path;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::config::ResolvedConfig;
use crate::controller::{ChatController, ControllerOptions, KeyDisposition, KeyEvent};
use crate::fs::atomic_write;
use crate::render::Sender;
use crate::transport::HttpTransport;
use crate::ui::{Spinner, Style, is_prompt_cancelled, print_error, print_message};

const TRANSCRIPT_TITLE: &str = "MCP Medical Assistant";

/// An interactive chat session against one backend.
pub struct ChatSession {
    config: ResolvedConfig,
    controller: ChatController<HttpTransport>,
    printed: usize,
}

impl ChatSession {
    pub fn new(config: ResolvedConfig) -> Self {
        let transport = HttpTransport::new(config.endpoint.clone(), config.timeout);
        let controller = ChatController::new(
            transport,
            ControllerOptions {
                timeout: config.timeout,
                greeting_delay: config.greeting_delay,
            },
        );

        Self {
            config,
            controller,
            printed: 0,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.config);

        self.controller.greet().await;
        self.print_new_messages();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Ask about patients, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.controller.set_input(text);
                        self.submit().await;
                    }
                },
                Err(ref e) if is_prompt_cancelled(e) => {
                    println!();
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => ui::print_config(&self.config),
            SlashCommand::Health => self.print_health().await,
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quick(None) => ui::print_quick_messages(&self.config.quick_messages),
            SlashCommand::Quick(Some(arg)) => self.send_quick(&arg).await,
            SlashCommand::Quit => return false,
            SlashCommand::Save(None) => print_error("Usage: /save <path>"),
            SlashCommand::Save(Some(path)) => self.save_transcript(Path::new(&path)),
            SlashCommand::Unknown(cmd) => print_error(&format!("Unknown command: /{cmd}")),
        }
        true
    }

    /// Submits the input field the way the Enter key does.
    async fn submit(&mut self) {
        let spinner = Spinner::new("Thinking...");
        let disposition = self.controller.handle_key(KeyEvent::enter()).await;
        spinner.stop();

        if let KeyDisposition::Submitted(outcome) = disposition {
            tracing::debug!(?outcome, "message submitted");
        }
        self.print_new_messages();
    }

    async fn send_quick(&mut self, arg: &str) {
        let Some(quick) = arg
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| self.config.quick_messages.get(index))
        else {
            print_error(&format!(
                "No quick message '{arg}'. Use /quick to list them (1-{}).",
                self.config.quick_messages.len()
            ));
            return;
        };

        let text = quick.text.clone();
        println!("{} {}", Style::command("❯"), Style::user(&text));

        let spinner = Spinner::new("Thinking...");
        let outcome = self.controller.send_quick_message(&text).await;
        spinner.stop();

        tracing::debug!(?outcome, "quick message submitted");
        self.print_new_messages();
    }

    async fn print_health(&self) {
        let spinner = Spinner::new("Checking backend...");
        let result = self.controller.transport().health().await;
        spinner.stop();

        match result {
            Ok(health) => ui::print_health(self.controller.transport().endpoint(), &health),
            Err(e) => print_error(&format!("Health check failed: {e}")),
        }
    }

    fn save_transcript(&self, path: &Path) {
        let page = self.controller.transcript().to_html_page(TRANSCRIPT_TITLE);
        match atomic_write(path, &page) {
            Ok(()) => crate::status!(
                "{} Transcript saved to {}\n",
                Style::success("✓"),
                Style::value(path.display())
            ),
            Err(e) => print_error(&format!("{e:#}")),
        }
    }

    /// Prints bot messages added since the last call. User messages are
    /// already on screen as the answered prompt.
    fn print_new_messages(&mut self) {
        let transcript = self.controller.transcript();
        for message in transcript
            .messages()
            .skip(self.printed)
            .filter(|m| m.sender() == Sender::Bot)
        {
            print_message(message);
        }
        self.printed = transcript.message_count();
    }
}
