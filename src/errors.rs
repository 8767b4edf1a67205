/// Top-level error taxonomy and its mapping to stderr text and exit codes.
use thiserror::Error;

use crate::client::ClientError;
use crate::config::ConfigError;

/// Fallback text for an unrecognised status without a `message`.
pub const REPLICATION_FAILED: &str = "replication failed";

/// Everything that can make `ssmock-manage` exit non-zero.
#[derive(Debug, Error)]
pub enum ManageError {
    /// Required configuration absent or invalid. Raised before any network call.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// Connection, DNS, timeout, or body-decoding failure.
    #[error("{0}")]
    Transport(String),

    /// Non-2xx HTTP response.
    #[error("{diagnostic}")]
    Protocol { status: u16, diagnostic: String },

    /// The server has no such AIP in the source location.
    #[error("No AIPs to replicate in location {location}")]
    Missing { location: String },

    /// The server answered with a status this tool does not recognise.
    #[error("{message}")]
    Failed { message: String },
}

impl From<ClientError> for ManageError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Protocol { status, diagnostic } => Self::Protocol { status, diagnostic },
            ClientError::Transport(_) | ClientError::Decode(_) => Self::Transport(err.to_string()),
        }
    }
}

impl ManageError {
    /// Return the process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_)
            | Self::Transport(_)
            | Self::Protocol { .. }
            | Self::Missing { .. }
            | Self::Failed { .. } => 1,
        }
    }

    /// Whether stderr output carries the `CommandError:` prefix.
    #[must_use]
    pub fn is_command_error(&self) -> bool {
        !matches!(self, Self::Configuration(_))
    }
}
