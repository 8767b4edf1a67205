/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod create_aip_replicas;

use crate::cli::args::Command;
use crate::client::Replicator;
use crate::errors::ManageError;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `ManageError` on any command failure.
pub fn dispatch(command: &Command, replicator: &dyn Replicator) -> Result<(), ManageError> {
    match command {
        Command::CreateAipReplicas(args) => create_aip_replicas::run(args, replicator),
    }
}
