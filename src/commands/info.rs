//! Symbol info command.

use anyhow::{Context, Result};
use clap::Args;

use qrsnap::{symbol_info, RenderConfig};

use super::{parse_ec_level, CommandExecutor};

/// Show symbol size facts for a payload.
#[derive(Args, Debug)]
pub struct InfoCommand {
    /// Text payload to analyze
    #[arg(short, long)]
    pub text: String,

    /// Error correction level: l, m, q, or h
    #[arg(long, default_value = "m")]
    pub ec_level: String,
}

impl CommandExecutor for InfoCommand {
    fn execute(&self) -> Result<()> {
        let config = RenderConfig {
            ec_level: parse_ec_level(&self.ec_level)?,
            ..Default::default()
        };

        let info = symbol_info(&self.text, &config).context("Failed to analyze payload")?;

        println!("QR Symbol Analysis");
        println!("==================");
        println!("  Payload: {} bytes", info.payload_bytes);
        println!("  Version: {} (of 40)", info.version);
        println!("  Modules: {}x{}", info.modules, info.modules);
        println!("  Native size: {}x{} px", info.native_side, info.native_side);

        Ok(())
    }
}
