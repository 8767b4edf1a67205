/// Blocking `reqwest` implementation of [`Replicator`].
use reqwest::blocking::Client;
use tracing::debug;

use super::Replicator;
use super::errors::ClientError;
use crate::config::Config;
use crate::types::{ReplicationRequest, ReplicationResponse};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Sends replication requests to `<base_url>/_internal/replicate`.
#[derive(Debug)]
pub struct HttpReplicator {
    client: Client,
    url: String,
}

impl HttpReplicator {
    /// Build a client honouring the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Transport` if the HTTP client cannot be initialised.
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::transport(&e))?;

        Ok(Self {
            client,
            url: config.replicate_url(),
        })
    }

    /// Endpoint this replicator posts to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Replicator for HttpReplicator {
    fn replicate(&self, request: &ReplicationRequest) -> Result<ReplicationResponse, ClientError> {
        debug!(url = %self.url, aip_uuid = %request.aip_uuid, "sending replicate request");

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .map_err(|e| ClientError::transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "server rejected request");
            let body = response.text().unwrap_or_default();
            return Err(ClientError::protocol(status, &body));
        }

        let body = response.bytes().map_err(|e| ClientError::transport(&e))?;
        Ok(ReplicationResponse::from_slice(&body)?)
    }
}
