//! Error types for board detection

use thiserror::Error;

/// Errors that can occur while querying the USB topology
///
/// The device-file scanner has no failure path; everything here comes
/// from the external USB-info command.
#[derive(Debug, Error)]
pub enum DetectError {
    /// Failed to start the USB-info command
    #[error("failed to run {command}: {source}")]
    CommandSpawn {
        command: String,
        source: std::io::Error,
    },

    /// USB-info command ran but reported failure
    #[error("{command} exited with {status}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
    },

    /// USB-info command produced output that is not a USB topology
    #[error("unparsable USB topology: {0}")]
    TopologyParse(#[from] serde_json::Error),
}
