//! QR read command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use qrsnap::decode_frame;

use super::CommandExecutor;

/// Read a QR code from a single image and print its payload.
#[derive(Args, Debug)]
pub struct ReadCommand {
    /// Path to image containing a QR code
    #[arg(short, long)]
    pub input: PathBuf,
}

impl CommandExecutor for ReadCommand {
    fn execute(&self) -> Result<()> {
        let image = image::open(&self.input)
            .with_context(|| format!("Failed to open {}", self.input.display()))?;

        let payload = decode_frame(&image.to_luma8())
            .with_context(|| format!("Failed to read QR code from {}", self.input.display()))?;

        match payload {
            Some(payload) => println!("{}", payload),
            None => anyhow::bail!("No QR code found in {}", self.input.display()),
        }

        Ok(())
    }
}
