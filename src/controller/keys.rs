use super::outcome::SendOutcome;

/// A key press in the message input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub shift: bool,
}

impl KeyEvent {
    pub const fn new(key: Key) -> Self {
        Self { key, shift: false }
    }

    pub const fn enter() -> Self {
        Self::new(Key::Enter)
    }

    pub const fn shift_enter() -> Self {
        Self {
            key: Key::Enter,
            shift: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Char(char),
}

/// What the controller did with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Enter submitted the message; the newline was suppressed.
    Submitted(SendOutcome),
    /// The key edited the input as usual.
    Default,
}
