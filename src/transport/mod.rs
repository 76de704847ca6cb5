//! Transport to the chat backend.
//!
//! The controller talks to the backend through [`ChatTransport`], one request
//! per user message. [`HttpTransport`] is the production implementation: a
//! JSON `POST /chat` plus a `GET /health` probe.

mod error;
mod http;

use serde::{Deserialize, Serialize};
use std::future::Future;

pub use error::TransportError;
pub use http::{DEFAULT_TIMEOUT, HttpTransport};

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Body returned by `POST /chat`.
///
/// `response` may carry literal HTML. A missing or `null` field is not an
/// error; the controller shows its empty-response message instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub response: Option<String>,
}

/// Body returned by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub mcp_server_url: Option<String>,
    #[serde(default)]
    pub llm_initialized: bool,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Sends one user message and waits for the backend's reply.
pub trait ChatTransport: Send + Sync {
    fn send(&self, message: &str) -> impl Future<Output = Result<ChatReply, TransportError>> + Send;
}
