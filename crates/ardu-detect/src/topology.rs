//! USB topology model and the candidate search engine
//!
//! The host reports its USB topology as a tree: hubs and devices nest
//! under the `_items` of their parent, to the depth physical hub
//! chaining allows. This module owns the depth-first search that
//! flattens that tree into the ordered candidate list.

use serde::Deserialize;

use crate::usb_ids;

/// Attribute value reported when the topology omits a field
pub const UNKNOWN: &str = "Unknown";

/// One node of the host USB topology
///
/// Field names follow the `system_profiler SPUSBDataType -json` item
/// shape. Every attribute is optional; hubs in particular omit most of
/// them. The tree is externally constructed and never mutated here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsbDeviceNode {
    /// Display name
    #[serde(rename = "_name")]
    pub name: Option<String>,
    /// Vendor ID, e.g. "0x1a86"
    pub vendor_id: Option<String>,
    /// Product ID, e.g. "0x7523"
    pub product_id: Option<String>,
    /// Device firmware revision
    #[serde(rename = "bcd_device")]
    pub version: Option<String>,
    /// Negotiated link speed
    pub speed: Option<String>,
    /// Bus location identifier
    pub location_id: Option<String>,
    /// Device serial number
    #[serde(rename = "serial_num")]
    pub serial_number: Option<String>,
    /// Attached child devices
    #[serde(rename = "_items", default)]
    pub children: Vec<UsbDeviceNode>,
}

/// A USB node that passed the classification predicate, flattened for
/// reporting
///
/// Absent source attributes are substituted with [`UNKNOWN`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDevice {
    pub name: String,
    pub vendor_id: String,
    pub product_id: String,
    pub version: String,
    pub speed: String,
    pub location_id: String,
    /// Resolved via [`usb_ids::KNOWN_VENDORS`], [`UNKNOWN`] when the
    /// vendor is absent or not in the table
    pub manufacturer: String,
    pub serial_number: String,
}

impl CandidateDevice {
    fn from_node(node: &UsbDeviceNode, manufacturer: Option<&'static str>) -> Self {
        Self {
            name: attr(&node.name),
            vendor_id: attr(&node.vendor_id),
            product_id: attr(&node.product_id),
            version: attr(&node.version),
            speed: attr(&node.speed),
            location_id: attr(&node.location_id),
            manufacturer: manufacturer.unwrap_or(UNKNOWN).to_string(),
            serial_number: attr(&node.serial_number),
        }
    }

    /// Whether the source node reported a serial number
    pub fn has_serial_number(&self) -> bool {
        self.serial_number != UNKNOWN
    }
}

fn attr(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| UNKNOWN.to_string())
}

/// Search a USB topology for candidate boards
///
/// Depth-first, pre-order: a matching parent is listed immediately
/// before its matching descendants, and siblings stay in the bus
/// enumeration order the topology source reported. Nodes failing the
/// predicate contribute no entry themselves, but their subtrees are
/// still searched.
pub fn collect_candidates(nodes: &[UsbDeviceNode]) -> Vec<CandidateDevice> {
    let mut candidates = Vec::new();
    for node in nodes {
        visit(node, &mut candidates);
    }
    candidates
}

fn visit(node: &UsbDeviceNode, candidates: &mut Vec<CandidateDevice>) {
    let vendor_id = node.vendor_id.as_deref().map(usb_ids::normalize_vendor_id);
    let name = node.name.as_deref().map(str::to_lowercase);
    let (matched, manufacturer) = usb_ids::classify(vendor_id.as_deref(), name.as_deref());

    if matched {
        candidates.push(CandidateDevice::from_node(node, manufacturer));
    }

    for child in &node.children {
        visit(child, candidates);
    }
}
