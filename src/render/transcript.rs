use std::fmt::Write;

use super::message::{RenderedMessage, Sender};
use crate::format::escape_html;

/// Identifies one typing indicator in a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingHandle(u64);

#[derive(Debug, Clone)]
enum Entry {
    Message(RenderedMessage),
    Typing(TypingHandle),
}

/// Ordered, append-only list of rendered messages.
///
/// Messages are never edited or removed. The only removable node is a typing
/// indicator, and only through the handle returned by [`Transcript::show_typing`].
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<Entry>,
    next_typing: u64,
    scrolled_to: Option<usize>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders and appends a message, then scrolls to it.
    pub fn push(&mut self, text: impl Into<String>, sender: Sender) {
        self.append(RenderedMessage::new(text, sender));
    }

    pub fn append(&mut self, message: RenderedMessage) {
        self.entries.push(Entry::Message(message));
        self.scroll_to_bottom();
    }

    /// Appends a typing indicator and returns the handle that removes it.
    pub fn show_typing(&mut self) -> TypingHandle {
        let handle = TypingHandle(self.next_typing);
        self.next_typing += 1;
        self.entries.push(Entry::Typing(handle));
        self.scroll_to_bottom();
        handle
    }

    /// Removes the typing indicator for `handle`. Returns `false` if it was
    /// already gone.
    pub fn remove_typing(&mut self, handle: TypingHandle) -> bool {
        let Some(index) = self
            .entries
            .iter()
            .position(|entry| matches!(entry, Entry::Typing(h) if *h == handle))
        else {
            return false;
        };

        self.entries.remove(index);
        if self.scrolled_to.is_some_and(|pos| pos >= self.entries.len()) {
            self.scroll_to_bottom();
        }
        true
    }

    pub fn is_typing(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| matches!(entry, Entry::Typing(_)))
    }

    /// Rendered messages in arrival order.
    pub fn messages(&self) -> impl Iterator<Item = &RenderedMessage> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Message(message) => Some(message),
            Entry::Typing(_) => None,
        })
    }

    pub fn message_count(&self) -> usize {
        self.messages().count()
    }

    pub fn last_message(&self) -> Option<&RenderedMessage> {
        self.messages().last()
    }

    /// Index of the entry currently scrolled into view.
    pub const fn scroll_position(&self) -> Option<usize> {
        self.scrolled_to
    }

    fn scroll_to_bottom(&mut self) {
        self.scrolled_to = self.entries.len().checked_sub(1);
    }

    /// Renders the `chatMessages` container with every node in it.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div id=\"chatMessages\" class=\"chat-messages\">\n");
        for entry in &self.entries {
            match entry {
                Entry::Message(message) => html.push_str(&message.to_html()),
                Entry::Typing(_) => html.push_str(TYPING_INDICATOR),
            }
        }
        html.push_str("</div>\n");
        html
    }

    /// Renders the transcript as a standalone HTML document.
    pub fn to_html_page(&self, title: &str) -> String {
        let mut page = String::new();
        let _ = write!(
            page,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
             <meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{PAGE_STYLE}</style>\n\
             </head>\n<body>\n",
            escape_html(title)
        );
        page.push_str(&self.to_html());
        page.push_str("</body>\n</html>\n");
        page
    }
}

const TYPING_INDICATOR: &str = "<div class=\"message bot-message typing-indicator\">\n  \
    <div class=\"message-avatar\">🤖</div>\n  \
    <div class=\"message-content\"><div class=\"message-bubble\">\
    <div class=\"typing-dots\"><span></span><span></span><span></span></div>\
    </div></div>\n</div>\n";

const PAGE_STYLE: &str = "body { font-family: sans-serif; background: #f7fafc; }
.chat-messages { display: flex; flex-direction: column; gap: 16px; padding: 24px; }
.message { display: flex; align-items: flex-start; animation: fadeIn 0.3s ease-in; }
.message-bubble code { background: #edf2f7; padding: 2px 4px; border-radius: 4px; }
.patient-table { border-collapse: collapse; width: 100%; font-size: 13px; }
.patient-table th, .patient-table td { border: 1px solid #e2e8f0; padding: 6px 8px; text-align: left; }
.patient-table th { background: #edf2f7; }
@keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
";
