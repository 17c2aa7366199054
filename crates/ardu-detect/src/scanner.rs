//! Device-file scanner
//!
//! Serial bridges surface as character devices under `/dev`, following
//! a handful of driver naming conventions. This module expands those
//! patterns against the filesystem and reports the matching paths.

use std::collections::BTreeSet;

use tracing::{debug, warn};

/// Device-file patterns covering the common serial-bridge drivers
///
/// Each convention appears in both namespaces: `cu.*` (call-out, used
/// for initiating connections) and `tty.*` (call-in).
pub const DEVICE_FILE_PATTERNS: &[&str] = &[
    "/dev/cu.usbserial*",
    "/dev/cu.usbmodem*",
    "/dev/cu.wchusbserial*",
    "/dev/tty.usbserial*",
    "/dev/tty.usbmodem*",
    "/dev/tty.wchusbserial*",
];

/// Device-file scanner
pub struct PortScanner {
    patterns: Vec<String>,
}

impl PortScanner {
    /// Create a scanner over the default pattern set
    pub fn new() -> Self {
        Self::with_patterns(DEVICE_FILE_PATTERNS.iter().map(|p| p.to_string()).collect())
    }

    /// Create a scanner over custom patterns
    pub fn with_patterns(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    /// Expand every pattern and return the matches, deduplicated and
    /// sorted ascending
    ///
    /// A pattern that matches nothing contributes no entries. Invalid
    /// patterns and unreadable paths are logged and skipped; scanning
    /// never fails. Two scans of an unchanged filesystem return
    /// identical output.
    pub fn scan(&self) -> Vec<String> {
        let mut found = BTreeSet::new();

        for pattern in &self.patterns {
            let paths = match glob::glob(pattern) {
                Ok(paths) => paths,
                Err(e) => {
                    warn!("skipping invalid device pattern {}: {}", pattern, e);
                    continue;
                }
            };

            for entry in paths {
                match entry {
                    Ok(path) => {
                        found.insert(path.to_string_lossy().into_owned());
                    }
                    Err(e) => warn!("skipping unreadable path under {}: {}", pattern, e),
                }
            }
        }

        debug!("matched {} device file(s)", found.len());
        found.into_iter().collect()
    }
}

impl Default for PortScanner {
    fn default() -> Self {
        Self::new()
    }
}
