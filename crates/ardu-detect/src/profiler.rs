//! USB topology acquisition via the host's USB-info command
//!
//! The detector never talks to USB hardware itself; it asks the OS for
//! its view of the bus and classifies what comes back. On macOS that
//! view is `system_profiler SPUSBDataType -json`, which emits the
//! topology as nested JSON items mapping directly onto
//! [`UsbDeviceNode`]. Anything producing that shape is substitutable
//! through [`TopologySource`].

use std::process::Command;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::DetectError;
use crate::topology::{self, CandidateDevice, UsbDeviceNode};

const PROFILER_COMMAND: &str = "system_profiler";
const PROFILER_ARGS: &[&str] = &["SPUSBDataType", "-json"];

/// Supplies a USB topology, or fails
///
/// Implemented by [`SystemProfiler`] in production; tests substitute
/// synthetic trees.
pub trait TopologySource {
    /// Return the root device nodes of the host USB topology
    fn usb_topology(&self) -> Result<Vec<UsbDeviceNode>, DetectError>;
}

/// Top-level shape of the profiler's JSON output
#[derive(Debug, Deserialize)]
struct ProfilerReport {
    #[serde(rename = "SPUSBDataType", default)]
    buses: Vec<ProfilerBus>,
}

/// One bus record: a container for devices, never itself a device
#[derive(Debug, Deserialize)]
struct ProfilerBus {
    #[serde(rename = "_items", default)]
    items: Vec<UsbDeviceNode>,
}

/// The real USB-info collaborator
#[derive(Debug, Default)]
pub struct SystemProfiler;

impl SystemProfiler {
    pub fn new() -> Self {
        Self
    }
}

impl TopologySource for SystemProfiler {
    fn usb_topology(&self) -> Result<Vec<UsbDeviceNode>, DetectError> {
        let output = Command::new(PROFILER_COMMAND)
            .args(PROFILER_ARGS)
            .output()
            .map_err(|source| DetectError::CommandSpawn {
                command: PROFILER_COMMAND.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(DetectError::CommandFailed {
                command: PROFILER_COMMAND.to_string(),
                status: output.status,
            });
        }

        parse_topology(&output.stdout)
    }
}

/// Parse profiler JSON into root device nodes
///
/// Bus records are unwrapped here: their `_items` are the roots the
/// classifier walks.
pub fn parse_topology(json: &[u8]) -> Result<Vec<UsbDeviceNode>, DetectError> {
    let report: ProfilerReport = serde_json::from_slice(json)?;
    let roots: Vec<UsbDeviceNode> = report
        .buses
        .into_iter()
        .flat_map(|bus| bus.items)
        .collect();

    debug!("USB topology reports {} root device(s)", roots.len());
    Ok(roots)
}

/// Classify the topology supplied by `source`, degrading to an empty
/// candidate list if the collaborator fails
///
/// A missing or broken USB-info command must not abort the scan: the
/// failure is logged and the caller continues on device-file results
/// alone.
pub fn usb_candidates(source: &dyn TopologySource) -> Vec<CandidateDevice> {
    match source.usb_topology() {
        Ok(nodes) => topology::collect_candidates(&nodes),
        Err(e) => {
            warn!("USB topology unavailable: {}", e);
            Vec::new()
        }
    }
}
