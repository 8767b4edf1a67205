/// HTTP layer: talks to the storage service mock's internal replicate endpoint.
pub mod errors;
pub mod http;

pub use errors::ClientError;
pub use http::HttpReplicator;

use crate::types::{ReplicationRequest, ReplicationResponse};

/// Something that can ask the storage service to replicate an AIP.
pub trait Replicator {
    /// Send one replication request and classify the answer.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` on transport failure, a non-2xx status, or an
    /// undecodable body.
    fn replicate(&self, request: &ReplicationRequest) -> Result<ReplicationResponse, ClientError>;
}
