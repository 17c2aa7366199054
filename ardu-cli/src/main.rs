//! arduscan - enumerate USB-attached Arduino and compatible boards
//!
//! Thin wiring around [`ardu_detect`]: parse flags, initialize logging,
//! run the two independent scans, print the merged report. All decision
//! logic lives in the library.

use anyhow::Result;
use ardu_detect::{usb_candidates, PortScanner, ScanResult, SystemProfiler};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "arduscan",
    version,
    about = "Enumerate USB-attached Arduino and compatible boards"
)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "arduscan=debug,ardu_detect=debug"
    } else {
        "arduscan=info,ardu_detect=info"
    };

    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Scanning for Arduino devices...");

    let device_files = PortScanner::new().scan();
    let candidates = usb_candidates(&SystemProfiler::new());

    // No devices is a normal, reportable outcome, not an error
    print!("{}", ScanResult::assemble(device_files, candidates));

    Ok(())
}
