//! Scan command - run a scan session over a sequence of frames.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use qrsnap::{ActionDispatcher, FnDispatcher, ImageFileSource, ScanError, ScanSession};

use super::CommandExecutor;

/// Scan a sequence of frame images and act on the first decoded payload.
#[derive(Args, Debug)]
pub struct ScanCommand {
    /// Frame images in capture order
    #[arg(required = true)]
    pub frames: Vec<PathBuf>,
}

impl CommandExecutor for ScanCommand {
    fn execute(&self) -> Result<()> {
        let source = match ImageFileSource::new(self.frames.clone()) {
            Ok(source) => source,
            Err(ScanError::CaptureUnavailable) => {
                // One-time notice; the scan path stays disabled.
                eprintln!("Scanning not supported: no readable capture source.");
                return Ok(());
            }
            Err(e) => return Err(e).context("Failed to open capture source"),
        };

        let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
        rt.block_on(async {
            let mut session = ScanSession::new(source);
            let mut subscription = session.start().context("Failed to start scan session")?;

            let mut dispatcher = FnDispatcher(|payload: &str| println!("{}", payload));
            match subscription.recv().await {
                Some(result) => dispatcher.dispatch(&result.payload),
                None => eprintln!("No QR code found in {} frame(s)", self.frames.len()),
            }

            session.dispose().await.context("Failed to dispose scan session")?;
            Ok(())
        })
    }
}
