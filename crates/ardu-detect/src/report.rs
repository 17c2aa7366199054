//! Scan result assembly and report rendering

use std::fmt;

use crate::topology::CandidateDevice;

/// Substring marking the call-out device namespace preferred for
/// interactive use
///
/// Fixed for now; needs to become configurable if a host with a
/// different naming convention is ever targeted.
const CALL_OUT_MARKER: &str = "cu.";

const RULE_WIDTH: usize = 60;

/// Merged output of one scan invocation
///
/// Holds the two evidence sources side by side; nothing is persisted
/// across scans. Rendering is the `Display` impl.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Matched device-file paths, deduplicated and sorted
    pub device_files: Vec<String>,
    /// Classified USB devices in bus enumeration order
    pub candidates: Vec<CandidateDevice>,
}

impl ScanResult {
    /// Merge the device-file scan and the topology classification
    pub fn assemble(device_files: Vec<String>, candidates: Vec<CandidateDevice>) -> Self {
        Self {
            device_files,
            candidates,
        }
    }

    /// Total number of device files found
    pub fn total_devices(&self) -> usize {
        self.device_files.len()
    }

    /// Device files in the call-out namespace, the ones to select in
    /// the Arduino IDE
    pub fn call_out_ports(&self) -> impl Iterator<Item = &String> {
        self.device_files
            .iter()
            .filter(|path| path.contains(CALL_OUT_MARKER))
    }
}

impl fmt::Display for ScanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "ARDUINO DEVICE DETECTION RESULTS")?;
        writeln!(f, "{rule}")?;

        if self.device_files.is_empty() {
            writeln!(f, "No Arduino devices found.")?;
            writeln!(f)?;
            writeln!(f, "Tips:")?;
            writeln!(f, "  - Make sure the board is connected via USB")?;
            writeln!(f, "  - Check that the USB cable supports data transfer")?;
            writeln!(f, "  - Try a different USB port")?;
            return Ok(());
        }

        writeln!(f, "Found {} potential Arduino device(s)", self.total_devices())?;

        writeln!(f)?;
        writeln!(f, "Serial ports ({}):", self.device_files.len())?;
        for (i, port) in self.device_files.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, port)?;
        }

        if !self.candidates.is_empty() {
            writeln!(f)?;
            writeln!(f, "USB device details ({}):", self.candidates.len())?;
            for (i, device) in self.candidates.iter().enumerate() {
                writeln!(f)?;
                writeln!(f, "  Device {}:", i + 1)?;
                writeln!(f, "    Name: {}", device.name)?;
                writeln!(f, "    Manufacturer: {}", device.manufacturer)?;
                writeln!(f, "    Vendor ID: {}", device.vendor_id)?;
                writeln!(f, "    Product ID: {}", device.product_id)?;
                writeln!(f, "    Version: {}", device.version)?;
                writeln!(f, "    Speed: {}", device.speed)?;
                writeln!(f, "    Location: {}", device.location_id)?;
                if device.has_serial_number() {
                    writeln!(f, "    Serial Number: {}", device.serial_number)?;
                }
            }
        }

        let call_out: Vec<&String> = self.call_out_ports().collect();
        if !call_out.is_empty() {
            writeln!(f)?;
            writeln!(f, "Arduino IDE ports (Tools > Port):")?;
            for port in call_out {
                writeln!(f, "  - {}", port)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, manufacturer: &str, serial_number: &str) -> CandidateDevice {
        CandidateDevice {
            name: name.to_string(),
            vendor_id: "0x1a86".to_string(),
            product_id: "0x7523".to_string(),
            version: "2.64".to_string(),
            speed: "Up to 12 Mb/s".to_string(),
            location_id: "0x00100000 / 1".to_string(),
            manufacturer: manufacturer.to_string(),
            serial_number: serial_number.to_string(),
        }
    }

    #[test]
    fn zero_device_files_render_the_no_devices_branch() {
        let report = ScanResult::assemble(vec![], vec![]).to_string();

        assert!(report.contains("No Arduino devices found."));
        assert!(report.contains("Try a different USB port"));
        assert!(!report.contains("Serial ports"));
        assert!(!report.contains("USB device details"));
    }

    #[test]
    fn device_files_are_enumerated_from_one() {
        let report = ScanResult::assemble(
            vec![
                "/dev/cu.usbserial-1420".to_string(),
                "/dev/tty.usbserial-1420".to_string(),
            ],
            vec![],
        )
        .to_string();

        assert!(report.contains("Found 2 potential Arduino device(s)"));
        assert!(report.contains("Serial ports (2):"));
        assert!(report.contains("  1. /dev/cu.usbserial-1420"));
        assert!(report.contains("  2. /dev/tty.usbserial-1420"));
    }

    #[test]
    fn candidate_attributes_are_all_listed() {
        let report = ScanResult::assemble(
            vec!["/dev/cu.usbserial-1420".to_string()],
            vec![candidate("USB2.0-Serial", "CH340/CH341", "5&2cd0ce3")],
        )
        .to_string();

        assert!(report.contains("USB device details (1):"));
        assert!(report.contains("    Name: USB2.0-Serial"));
        assert!(report.contains("    Manufacturer: CH340/CH341"));
        assert!(report.contains("    Vendor ID: 0x1a86"));
        assert!(report.contains("    Product ID: 0x7523"));
        assert!(report.contains("    Version: 2.64"));
        assert!(report.contains("    Speed: Up to 12 Mb/s"));
        assert!(report.contains("    Location: 0x00100000 / 1"));
        assert!(report.contains("    Serial Number: 5&2cd0ce3"));
    }

    #[test]
    fn unknown_serial_number_is_suppressed() {
        let report = ScanResult::assemble(
            vec!["/dev/cu.usbserial-1420".to_string()],
            vec![candidate("USB2.0-Serial", "CH340/CH341", "Unknown")],
        )
        .to_string();

        assert!(!report.contains("Serial Number:"));
    }

    #[test]
    fn usage_section_lists_only_call_out_ports() {
        let report = ScanResult::assemble(
            vec![
                "/dev/cu.usbmodem14101".to_string(),
                "/dev/tty.usbmodem14101".to_string(),
            ],
            vec![],
        )
        .to_string();

        let usage = report.split("Arduino IDE ports").nth(1).unwrap();
        assert!(usage.contains("- /dev/cu.usbmodem14101"));
        assert!(!usage.contains("- /dev/tty.usbmodem14101"));
    }

    #[test]
    fn usage_section_is_omitted_without_call_out_ports() {
        let report = ScanResult::assemble(
            vec!["/dev/tty.usbmodem14101".to_string()],
            vec![],
        )
        .to_string();

        assert!(!report.contains("Arduino IDE ports"));
    }
}
