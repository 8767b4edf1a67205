/// Errors from the HTTP exchange with the storage service mock.
use reqwest::StatusCode;
use thiserror::Error;

/// Failure of the single request/response exchange.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection refused, DNS failure, timeout, or another I/O-level fault.
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("{diagnostic}")]
    Protocol {
        /// HTTP status code.
        status: u16,
        /// Response body text, or the reason phrase when the body is empty.
        diagnostic: String,
    },

    /// A 2xx response whose body is not a JSON object.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Build a `Transport` error from `err` and its source chain, joined by `": "`.
    #[must_use]
    pub fn transport(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut description = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !description.contains(&text) {
                description.push_str(": ");
                description.push_str(&text);
            }
            source = cause.source();
        }
        Self::Transport(description)
    }

    /// Build a `Protocol` error from a non-2xx response.
    #[must_use]
    pub fn protocol(status: StatusCode, body: &str) -> Self {
        Self::Protocol {
            status: status.as_u16(),
            diagnostic: protocol_diagnostic(status, body),
        }
    }
}

/// Body text if non-empty, else the reason phrase, else the bare status code.
#[must_use]
pub fn protocol_diagnostic(status: StatusCode, body: &str) -> String {
    if !body.is_empty() {
        return body.to_owned();
    }
    status
        .canonical_reason()
        .map_or_else(|| status.as_str().to_owned(), str::to_owned)
}
