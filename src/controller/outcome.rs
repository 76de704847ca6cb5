use crate::transport::TransportError;

const ERROR_PREFIX: &str = "❌ Sorry, I encountered an error. ";

/// Shown when the backend replies without a `response` payload.
pub const EMPTY_RESPONSE_MESSAGE: &str = "❌ Sorry, I received an empty response. Please try again.";

/// What a call to `send_message` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing was sent.
    Ignored(IgnoreReason),
    /// The backend's reply was rendered.
    Replied,
    /// The backend replied without a payload.
    EmptyResponse,
    /// The request failed and an error bubble was rendered.
    Failed(FailureKind),
}

impl SendOutcome {
    pub const fn was_sent(self) -> bool {
        !matches!(self, Self::Ignored(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Busy,
    EmptyInput,
}

/// User-facing classes of request failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Unavailable,
    TimedOut,
    Other,
}

impl FailureKind {
    pub fn classify(err: &TransportError) -> Self {
        if err.status() == Some(502) {
            Self::Unavailable
        } else if err.is_timeout() {
            Self::TimedOut
        } else {
            Self::Other
        }
    }

    /// The text of the error bubble.
    pub fn message(self) -> String {
        let detail = match self {
            Self::Unavailable => {
                "The server is temporarily unavailable. Please try again in a moment."
            }
            Self::TimedOut => "The request timed out. Please try a simpler question.",
            Self::Other => "Please try again.",
        };
        format!("{ERROR_PREFIX}{detail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_bad_gateway() {
        let kind = FailureKind::classify(&TransportError::Status(502));
        assert_eq!(kind, FailureKind::Unavailable);
        assert!(kind.message().contains("temporarily unavailable"));
    }

    #[test]
    fn test_classify_timeout() {
        let kind = FailureKind::classify(&TransportError::Timeout);
        assert_eq!(kind, FailureKind::TimedOut);
        assert!(kind.message().contains("timed out"));
    }

    #[test]
    fn test_classify_other_statuses() {
        for code in [400, 404, 500, 503, 504] {
            assert_eq!(
                FailureKind::classify(&TransportError::Status(code)),
                FailureKind::Other
            );
        }
        assert_eq!(FailureKind::Other.message(), "❌ Sorry, I encountered an error. Please try again.");
    }

    #[test]
    fn test_was_sent() {
        assert!(!SendOutcome::Ignored(IgnoreReason::Busy).was_sent());
        assert!(SendOutcome::Replied.was_sent());
        assert!(SendOutcome::Failed(FailureKind::Other).was_sent());
    }
}
