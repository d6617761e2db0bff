//! qrsnap - text in, scannable bitmap out
//!
//! A CLI for rendering text payloads as QR images of an exact pixel size
//! and scanning frame sequences back into payloads.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{CommandExecutor, EncodeCommand, InfoCommand, ReadCommand, ScanCommand};

/// qrsnap - text in, scannable bitmap out
///
/// Renders text payloads as QR bitmaps of an exact pixel size, and scans
/// frame sequences back into payloads.
#[derive(Parser)]
#[command(name = "qrsnap")]
#[command(version)]
#[command(about = "Render text as QR images and scan them back")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render text as a QR code image
    Encode(EncodeCommand),

    /// Read a QR code from a single image
    Read(ReadCommand),

    /// Scan a sequence of frames and act on the first decode
    Scan(ScanCommand),

    /// Show symbol size facts for a payload
    Info(InfoCommand),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(cmd) => cmd.execute(),
        Commands::Read(cmd) => cmd.execute(),
        Commands::Scan(cmd) => cmd.execute(),
        Commands::Info(cmd) => cmd.execute(),
    }
}
