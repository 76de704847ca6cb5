//! Message rendering and the append-only transcript.
//!
//! Each message becomes an avatar + bubble node. The transcript is the
//! in-memory stand-in for the page's `chatMessages` container and can be
//! exported as a standalone HTML page.

mod message;
mod plain;
mod transcript;

pub use message::{BubbleWidth, RenderedMessage, Sender};
pub use plain::plain_text;
pub use transcript::{Transcript, TypingHandle};
