/// Output formatting: report lines to stdout, errors to stderr.
use std::io::Write;

use crate::errors::ManageError;
use crate::types::ReplicationReport;

/// Prefix for every error line except configuration errors.
pub const COMMAND_ERROR_PREFIX: &str = "CommandError: ";

/// Lines printed for a successful replication. The noop summary keeps its
/// trailing period.
#[must_use]
pub fn report_lines(report: &ReplicationReport) -> [String; 2] {
    if report.created {
        [
            format!("INFO: Starting replication for {}", report.aip_uuid),
            format!(
                "New replicas created for 1 of 1 AIPs in location {}",
                report.replica_location
            ),
        ]
    } else {
        [
            format!("INFO: Replication already exists for {}", report.aip_uuid),
            format!(
                "New replicas created for 0 of 1 AIPs in location {}.",
                report.replica_location
            ),
        ]
    }
}

/// The single stderr line for an error.
#[must_use]
pub fn error_line(err: &ManageError) -> String {
    if err.is_command_error() {
        format!("{COMMAND_ERROR_PREFIX}{err}")
    } else {
        err.to_string()
    }
}

/// Write a replication report to stdout.
pub fn write_report(report: &ReplicationReport) {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in report_lines(report) {
        let _ = writeln!(out, "{line}");
    }
}

/// Write an error to stderr.
pub fn write_error(err: &ManageError) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "{}", error_line(err));
}
