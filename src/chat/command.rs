use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show current configuration"),
    ("/health", "Check the backend's health"),
    ("/help", "Show available commands"),
    ("/quick", "List or send a quick message"),
    ("/quit", "Exit chat mode"),
    ("/save", "Save the transcript as HTML"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') || input.contains(' ') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Health,
    Help,
    /// `/quick` lists the quick messages, `/quick N` sends the Nth.
    Quick(Option<String>),
    Quit,
    /// `/save PATH` writes the transcript page.
    Save(Option<String>),
    Unknown(String),
}

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let (name, rest) = cmd
        .split_once(char::is_whitespace)
        .map_or((cmd, ""), |(name, rest)| (name, rest.trim()));
    let argument = (!rest.is_empty()).then(|| rest.to_string());

    match name {
        "config" => Input::Command(SlashCommand::Config),
        "health" => Input::Command(SlashCommand::Health),
        "help" => Input::Command(SlashCommand::Help),
        "quick" => Input::Command(SlashCommand::Quick(argument)),
        "quit" | "exit" | "q" => Input::Command(SlashCommand::Quit),
        "save" => Input::Command(SlashCommand::Save(argument)),
        _ => Input::Command(SlashCommand::Unknown(cmd.to_string())),
    }
}
