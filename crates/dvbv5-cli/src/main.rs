//! DVBv5 channel refresh CLI
//!
//! Updates a DVBv5 channel file from a fresh scan, preserving previous
//! video/audio PIDs for channels that were off-air while scanning.

use clap::Parser;
use dvbv5_core::{merge_files, write_file};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dvbv5-refresh")]
#[command(about = "Update DVBV5 channel files, preserving previous video/audio PIDs for channels that were offline while scanning", long_about = None)]
#[command(version)]
struct Cli {
    /// Previous known-good channel file
    #[arg(value_name = "PREVIOUS")]
    previous: PathBuf,

    /// Freshly scanned channel file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Merged channel file to write
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> dvbv5_core::Result<()> {
    let cli = Cli::parse();

    // Both inputs must parse before the output file is touched
    let merged = merge_files(&cli.previous, &cli.input)?;
    write_file(&merged, &cli.output)?;

    Ok(())
}
