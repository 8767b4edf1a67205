/// Wire types exchanged with the storage service mock.
///
/// The raw response is decoded as a JSON object and classified exactly once into
/// [`ReplicationResponse`]; nothing downstream inspects raw fields.
use serde::Serialize;
use serde_json::{Map, Value};

/// Body of `POST /_internal/replicate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplicationRequest {
    /// AIP to replicate.
    pub aip_uuid: String,
    /// Location the AIP is currently stored in.
    pub source_location_uuid: String,
    /// Location that receives the replica.
    pub replica_location_uuid: String,
}

/// Response body as sent by the server: any JSON object.
pub type RawReplicationResponse = Map<String, Value>;

/// Identity of a replica package, when the server reports one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicaInfo {
    pub uuid: Option<String>,
    pub uri: Option<String>,
}

impl ReplicaInfo {
    fn from_raw(raw: &mut RawReplicationResponse) -> Option<Self> {
        let uuid = value_text(raw.remove("replica_uuid"));
        let uri = value_text(raw.remove("replica_uri"));
        if uuid.is_none() && uri.is_none() {
            return None;
        }
        Some(Self { uuid, uri })
    }
}

/// Classified replication outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplicationResponse {
    /// A new replica was created.
    Success { replica: Option<ReplicaInfo> },
    /// A replica already exists in the target location.
    Noop { replica: Option<ReplicaInfo> },
    /// The AIP is unknown or not stored in the source location.
    Missing { message: Option<String> },
    /// Unrecognised or absent `status`.
    Other { message: Option<String> },
}

impl From<RawReplicationResponse> for ReplicationResponse {
    fn from(mut raw: RawReplicationResponse) -> Self {
        let status = raw.remove("status");
        match status.as_ref().and_then(Value::as_str) {
            Some("success") => Self::Success {
                replica: ReplicaInfo::from_raw(&mut raw),
            },
            Some("noop") => Self::Noop {
                replica: ReplicaInfo::from_raw(&mut raw),
            },
            Some("missing") => Self::Missing {
                message: value_text(raw.remove("message")),
            },
            _ => Self::Other {
                message: value_text(raw.remove("message")),
            },
        }
    }
}

/// Strings as-is, `null` as absent, anything else as its JSON text.
fn value_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

impl ReplicationResponse {
    /// Decode and classify a response body.
    ///
    /// # Errors
    ///
    /// Returns the decoder error when the body is not a JSON object.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice::<RawReplicationResponse>(body).map(Self::from)
    }

    /// Lowercase status label, used in logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::Noop { .. } => "noop",
            Self::Missing { .. } => "missing",
            Self::Other { .. } => "other",
        }
    }
}

/// Result of a successful `create_aip_replicas` run, rendered to stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicationReport {
    /// AIP that was replicated.
    pub aip_uuid: String,
    /// Location holding the replica.
    pub replica_location: String,
    /// `false` when the replica already existed.
    pub created: bool,
}
