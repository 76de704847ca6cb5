//! Chat controller: input handling, request dispatch, and transcript updates.
//!
//! A controller owns one busy flag. While a request is outstanding every
//! further submit is ignored, so at most one request is in flight per
//! controller.

mod keys;
mod outcome;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, warn};

pub use keys::{Key, KeyDisposition, KeyEvent};
pub use outcome::{EMPTY_RESPONSE_MESSAGE, FailureKind, IgnoreReason, SendOutcome};

use crate::render::{Sender, Transcript, TypingHandle};
use crate::transport::{ChatTransport, DEFAULT_TIMEOUT, TransportError};

/// Scripted bot greeting shown once the chat opens.
pub const GREETING: &str = "Hello! I'm your MCP Medical Assistant connected to the live database.

I can help you with:
• **Search patients**: \"Show all patients\" or \"Find patient John Smith\"
• **Patient details**: \"Get details for patient 123\"
• **Filtered searches**: \"Find patients by Dr. Johnson\"

Try asking: \"Show all patients\" to see all patients in the database!";

/// Timing knobs for a [`ChatController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Upper bound on one request; the request is cancelled when it elapses.
    pub timeout: Duration,
    /// Delay before the greeting is shown.
    pub greeting_delay: Duration,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            greeting_delay: Duration::from_millis(500),
        }
    }
}

pub struct ChatController<T> {
    transport: T,
    options: ControllerOptions,
    busy: AtomicBool,
    input: Mutex<String>,
    transcript: Mutex<Transcript>,
}

impl<T: ChatTransport> ChatController<T> {
    pub fn new(transport: T, options: ControllerOptions) -> Self {
        Self {
            transport,
            options,
            busy: AtomicBool::new(false),
            input: Mutex::new(String::new()),
            transcript: Mutex::new(Transcript::new()),
        }
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Whether a request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Current contents of the input field.
    pub fn input(&self) -> String {
        lock(&self.input).clone()
    }

    pub fn set_input(&self, text: impl Into<String>) {
        *lock(&self.input) = text.into();
    }

    /// A snapshot of the transcript.
    pub fn transcript(&self) -> Transcript {
        lock(&self.transcript).clone()
    }

    /// Sends the input field's contents to the backend.
    ///
    /// Does nothing while a request is outstanding or when the input is
    /// blank. Otherwise the trimmed text is rendered as a user message, the
    /// input is cleared and a typing indicator is shown until the reply (or
    /// an error message) replaces it. The busy flag is released on every
    /// path, including when this future is dropped mid-request.
    pub async fn send_message(&self) -> SendOutcome {
        let Some(mut in_flight) = self.claim() else {
            debug!("request already in flight; ignoring submit");
            return SendOutcome::Ignored(IgnoreReason::Busy);
        };

        let message = {
            let mut input = lock(&self.input);
            let message = input.trim().to_string();
            if message.is_empty() {
                return SendOutcome::Ignored(IgnoreReason::EmptyInput);
            }
            input.clear();
            message
        };

        {
            let mut transcript = lock(&self.transcript);
            transcript.push(message.as_str(), Sender::User);
            in_flight.typing = Some(transcript.show_typing());
        }

        let result = tokio::time::timeout(self.options.timeout, self.transport.send(&message))
            .await
            .unwrap_or(Err(TransportError::Timeout));

        let mut transcript = lock(&self.transcript);
        if let Some(handle) = in_flight.typing.take() {
            transcript.remove_typing(handle);
        }

        match result {
            Ok(reply) => match reply.response.filter(|response| !response.is_empty()) {
                Some(response) => {
                    transcript.push(response, Sender::Bot);
                    SendOutcome::Replied
                }
                None => {
                    transcript.push(EMPTY_RESPONSE_MESSAGE, Sender::Bot);
                    SendOutcome::EmptyResponse
                }
            },
            Err(err) => {
                warn!(error = %err, "chat request failed");
                let kind = FailureKind::classify(&err);
                transcript.push(kind.message(), Sender::Bot);
                SendOutcome::Failed(kind)
            }
        }
    }

    /// Puts `text` in the input field and sends it.
    pub async fn send_quick_message(&self, text: &str) -> SendOutcome {
        if self.is_busy() {
            return SendOutcome::Ignored(IgnoreReason::Busy);
        }

        self.set_input(text);
        self.send_message().await
    }

    /// Applies a key press to the input field.
    ///
    /// Enter without Shift submits instead of inserting a newline.
    pub async fn handle_key(&self, event: KeyEvent) -> KeyDisposition {
        match event.key {
            Key::Enter if !event.shift => KeyDisposition::Submitted(self.send_message().await),
            Key::Enter => {
                lock(&self.input).push('\n');
                KeyDisposition::Default
            }
            Key::Backspace => {
                lock(&self.input).pop();
                KeyDisposition::Default
            }
            Key::Char(c) => {
                lock(&self.input).push(c);
                KeyDisposition::Default
            }
        }
    }

    /// Waits for the greeting delay, then shows the scripted greeting.
    pub async fn greet(&self) {
        tokio::time::sleep(self.options.greeting_delay).await;
        lock(&self.transcript).push(GREETING, Sender::Bot);
    }

    fn claim(&self) -> Option<InFlight<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight {
                busy: &self.busy,
                transcript: &self.transcript,
                typing: None,
            })
    }
}

/// Holds the busy flag for one request and clears it on drop, along with
/// any typing indicator the request left behind.
struct InFlight<'a> {
    busy: &'a AtomicBool,
    transcript: &'a Mutex<Transcript>,
    typing: Option<TypingHandle>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(handle) = self.typing.take() {
            lock(self.transcript).remove_typing(handle);
        }
        self.busy.store(false, Ordering::Release);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
