/// `create_aip_replicas` command: ask the storage service to replicate one AIP.
use tracing::debug;

use crate::cli::args::CreateAipReplicasArgs;
use crate::cli::write_report;
use crate::client::Replicator;
use crate::errors::{ManageError, REPLICATION_FAILED};
use crate::logging::DebugTimer;
use crate::types::{ReplicationReport, ReplicationRequest, ReplicationResponse};

impl From<&CreateAipReplicasArgs> for ReplicationRequest {
    fn from(args: &CreateAipReplicasArgs) -> Self {
        Self {
            aip_uuid: args.aip_uuid.clone(),
            source_location_uuid: args.aip_store_location.clone(),
            replica_location_uuid: args.replicator_location.clone(),
        }
    }
}

/// Run `ssmock-manage create_aip_replicas`.
///
/// # Errors
///
/// Returns `ManageError` on transport or HTTP failure, a `missing` status, or
/// an unrecognised status.
pub fn run(args: &CreateAipReplicasArgs, replicator: &dyn Replicator) -> Result<(), ManageError> {
    let report = execute(args, replicator)?;
    write_report(&report);
    Ok(())
}

/// Send the request and map the classified response to a report or an error.
///
/// # Errors
///
/// See [`run`].
pub fn execute(
    args: &CreateAipReplicasArgs,
    replicator: &dyn Replicator,
) -> Result<ReplicationReport, ManageError> {
    let request = ReplicationRequest::from(args);

    let timer = DebugTimer::new("replicate");
    let response = replicator.replicate(&request)?;
    drop(timer);

    debug!(status = response.label(), "classified response");
    let created = matches!(response, ReplicationResponse::Success { .. });

    match response {
        ReplicationResponse::Success { replica } | ReplicationResponse::Noop { replica } => {
            if let Some(replica) = replica {
                debug!(
                    replica_uuid = replica.uuid.as_deref().unwrap_or(""),
                    replica_uri = replica.uri.as_deref().unwrap_or(""),
                    created,
                    "replica"
                );
            }
            Ok(ReplicationReport {
                aip_uuid: request.aip_uuid,
                replica_location: request.replica_location_uuid,
                created,
            })
        }
        ReplicationResponse::Missing { message } => {
            if let Some(message) = message {
                debug!(reason = %message, "server reported missing AIP");
            }
            Err(ManageError::Missing {
                location: request.source_location_uuid,
            })
        }
        ReplicationResponse::Other { message } => Err(ManageError::Failed {
            message: message.unwrap_or_else(|| REPLICATION_FAILED.to_owned()),
        }),
    }
}
