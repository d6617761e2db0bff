//! QR encode command.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use qrsnap::{render_to_file, RenderConfig, SymbolFormat, DEFAULT_TARGET_SIZE};

use super::{parse_ec_level, parse_format, CommandExecutor};

/// Render text as a QR code image of an exact pixel size.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Text payload - reads from stdin if not provided
    #[arg(short, long)]
    pub text: Option<String>,

    /// Output file path (PNG, SVG, or TXT for ASCII)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output width in pixels (PNG only)
    #[arg(long, default_value_t = DEFAULT_TARGET_SIZE)]
    pub width: u32,

    /// Output height in pixels (PNG only)
    #[arg(long, default_value_t = DEFAULT_TARGET_SIZE)]
    pub height: u32,

    /// Output format: png (default), svg, or ascii
    #[arg(short, long, default_value = "png")]
    pub format: String,

    /// Error correction level: l, m, q, or h
    #[arg(long, default_value = "m")]
    pub ec_level: String,

    /// Render without the 4-module quiet zone
    #[arg(long)]
    pub no_quiet_zone: bool,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self) -> Result<()> {
        // Get the payload from argument or stdin
        let text = match &self.text {
            Some(t) => t.clone(),
            None => {
                eprintln!("Reading payload from stdin (Ctrl+D to finish):");
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read payload from stdin")?;
                buffer.trim().to_string()
            }
        };

        if text.is_empty() {
            anyhow::bail!("Payload cannot be empty");
        }

        let format = parse_format(&self.format)?;
        let config = RenderConfig {
            ec_level: parse_ec_level(&self.ec_level)?,
            quiet_zone: !self.no_quiet_zone,
        };

        render_to_file(&text, &self.output, self.width, self.height, format, &config)
            .context("Failed to render QR code")?;

        println!("QR code written: {}", self.output.display());
        if format == SymbolFormat::Png {
            println!("  Size: {}x{} px", self.width, self.height);
        }
        println!("  Payload: {} bytes", text.len());

        Ok(())
    }
}
