use anyhow::Result;
use inquire::InquireError;

use crate::render::{RenderedMessage, Sender, plain_text};

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Check if the inquire error is a user cancellation/interruption.
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs a function that uses interactive prompts, treating Ctrl+C or
/// Escape as a clean exit rather than an error.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Ok(()) => Ok(()),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Prints a rendered message as terminal text with its avatar.
pub fn print_message(message: &RenderedMessage) {
    let avatar = message.sender().avatar();
    let text = plain_text(message.body());
    let text = match message.sender() {
        Sender::User => Style::user(text),
        Sender::Bot => Style::bot(text),
    };
    println!("{avatar} {text}");
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_prompt_cancellation_ok() {
        assert!(handle_prompt_cancellation(|| Ok(())).is_ok());
    }

    #[test]
    fn test_handle_prompt_cancellation_interrupted() {
        let result = handle_prompt_cancellation(|| Err(InquireError::OperationInterrupted.into()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_prompt_cancellation_other_error() {
        let result = handle_prompt_cancellation(|| Err(anyhow::anyhow!("endpoint unreachable")));
        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("endpoint unreachable"));
    }

    #[test]
    fn test_is_prompt_cancelled() {
        assert!(is_prompt_cancelled(&InquireError::OperationCanceled));
        assert!(!is_prompt_cancelled(&InquireError::Custom("test".into())));
    }
}
