use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::{ChatReply, ChatRequest, ChatTransport, HealthStatus, TransportError};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// [`ChatTransport`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Creates a transport for the backend rooted at `endpoint`
    /// (e.g. `http://localhost:3000`).
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.endpoint.trim_end_matches('/'))
    }

    /// Queries the backend's `/health` route.
    pub async fn health(&self) -> Result<HealthStatus, TransportError> {
        let url = self.url("/health");
        debug!(%url, "checking backend health");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl ChatTransport for HttpTransport {
    async fn send(&self, message: &str) -> Result<ChatReply, TransportError> {
        let url = self.url("/chat");
        debug!(%url, chars = message.chars().count(), "posting chat message");

        let response = self
            .client
            .post(&url)
            .json(&ChatRequest { message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let reply: ChatReply = serde_json::from_str(&body)?;
        debug!(
            has_response = reply.response.is_some(),
            "received chat reply"
        );
        Ok(reply)
    }
}
