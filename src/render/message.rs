use std::fmt;

use crate::format::{TABLE_MARKER, escape_html, format_message};

/// Who sent a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub const fn avatar(self) -> &'static str {
        match self {
            Self::User => "👤",
            Self::Bot => "🤖",
        }
    }

    const fn avatar_background(self) -> &'static str {
        match self {
            Self::User => "#3182ce",
            Self::Bot => "#4a5568",
        }
    }

    const fn bubble_background(self) -> &'static str {
        match self {
            Self::User => "#3182ce",
            Self::Bot => "#ffffff",
        }
    }

    const fn text_color(self) -> &'static str {
        match self {
            Self::User => "#ffffff",
            Self::Bot => "#2d3748",
        }
    }

    const fn avatar_margin(self) -> &'static str {
        match self {
            Self::User => "margin-left: 12px;",
            Self::Bot => "margin-right: 12px;",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Bot => f.write_str("bot"),
        }
    }
}

/// Bubble width; wide bubbles make room for patient tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleWidth {
    Narrow,
    Wide,
}

impl BubbleWidth {
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Narrow => "70%",
            Self::Wide => "98%",
        }
    }
}

/// A message rendered into its avatar + bubble HTML.
///
/// User text is untrusted and escaped before formatting. Bot payloads come
/// from the backend and may carry HTML tables, so they are formatted raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    sender: Sender,
    text: String,
    body: String,
    width: BubbleWidth,
}

impl RenderedMessage {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        let text = text.into();
        let body = match sender {
            Sender::User => format_message(&escape_html(&text)),
            Sender::Bot => format_message(&text),
        };
        let width = if body.contains(TABLE_MARKER) {
            BubbleWidth::Wide
        } else {
            BubbleWidth::Narrow
        };

        Self {
            sender,
            text,
            body,
            width,
        }
    }

    pub const fn sender(&self) -> Sender {
        self.sender
    }

    /// The message text as submitted or received.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The formatted bubble contents.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub const fn width(&self) -> BubbleWidth {
        self.width
    }

    /// Renders the full message node.
    pub fn to_html(&self) -> String {
        let sender = self.sender;
        let width = self.width.as_css();
        let direction = match sender {
            Sender::User => " style=\"flex-direction: row-reverse;\"",
            Sender::Bot => "",
        };

        format!(
            "<div class=\"message {sender}-message\"{direction}>\n  \
             <div class=\"message-avatar\" style=\"width: 36px; height: 36px; border-radius: 50%; \
             display: flex; align-items: center; justify-content: center; font-size: 16px; \
             background: {avatar_bg}; color: white; {margin} flex-shrink: 0;\">{avatar}</div>\n  \
             <div class=\"message-content\" style=\"max-width: {width}; width: {width}; \
             background: {bubble_bg}; border: 1px solid #e2e8f0; border-radius: 16px; \
             padding: 16px 20px;\">\n    \
             <div class=\"message-bubble\" style=\"color: {text_color}; line-height: 1.5;\">{body}</div>\n  \
             </div>\n\
             </div>\n",
            avatar_bg = sender.avatar_background(),
            margin = sender.avatar_margin(),
            avatar = sender.avatar(),
            bubble_bg = sender.bubble_background(),
            text_color = sender.text_color(),
            body = self.body,
        )
    }
}
