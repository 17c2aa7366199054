//! Arduino Board Detection Library
//!
//! This crate enumerates USB-attached Arduino and compatible boards by
//! combining two independent evidence sources:
//!
//! - a filesystem scan for serial device files ([`PortScanner`])
//! - a classification pass over the host's USB topology
//!   ([`collect_candidates`]), fed by an external USB-info command
//!   ([`SystemProfiler`])
//!
//! Both feed a single [`ScanResult`], which renders the human-readable
//! report.
//!
//! # Example
//!
//! ```rust,no_run
//! use ardu_detect::{usb_candidates, PortScanner, ScanResult, SystemProfiler};
//!
//! let ports = PortScanner::new().scan();
//! let candidates = usb_candidates(&SystemProfiler::new());
//!
//! print!("{}", ScanResult::assemble(ports, candidates));
//! ```

pub mod error;
pub mod profiler;
pub mod report;
pub mod scanner;
pub mod topology;
pub mod usb_ids;

pub use error::DetectError;
pub use profiler::{usb_candidates, SystemProfiler, TopologySource};
pub use report::ScanResult;
pub use scanner::{PortScanner, DEVICE_FILE_PATTERNS};
pub use topology::{collect_candidates, CandidateDevice, UsbDeviceNode};
