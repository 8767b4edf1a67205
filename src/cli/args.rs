/// CLI argument definitions via clap derive.
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};

/// ssmock-manage — storage service management commands for the storage service mock.
#[derive(Debug, Parser)]
#[command(
    name = "ssmock-manage",
    about = "Forward storage service management commands to the storage service mock",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Print debug logs (request target, timings, replica details) to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Request timeout in seconds. Overrides `SSMOCK_TIMEOUT`.
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replicate an AIP from its store location into a replicator location.
    #[command(name = "create_aip_replicas")]
    CreateAipReplicas(CreateAipReplicasArgs),
}

/// Arguments for `ssmock-manage create_aip_replicas`.
#[derive(Debug, Parser)]
pub struct CreateAipReplicasArgs {
    /// UUID of the AIP to replicate.
    #[arg(long, value_name = "UUID", value_parser = NonEmptyStringValueParser::new())]
    pub aip_uuid: String,

    /// UUID of the location currently storing the AIP.
    #[arg(long, value_name = "UUID", value_parser = NonEmptyStringValueParser::new())]
    pub aip_store_location: String,

    /// UUID of the replicator location that receives the copy.
    #[arg(long, value_name = "UUID", value_parser = NonEmptyStringValueParser::new())]
    pub replicator_location: String,
}
