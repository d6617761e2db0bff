//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor`
//! trait.

mod encode;
mod info;
mod read;
mod scan;

pub use encode::EncodeCommand;
pub use info::InfoCommand;
pub use read::ReadCommand;
pub use scan::ScanCommand;

use anyhow::Result;

use qrsnap::{EcLevel, SymbolFormat};

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements this trait
/// to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Parses an error correction level flag.
pub(crate) fn parse_ec_level(s: &str) -> Result<EcLevel> {
    match s.to_lowercase().as_str() {
        "l" => Ok(EcLevel::L),
        "m" => Ok(EcLevel::M),
        "q" => Ok(EcLevel::Q),
        "h" => Ok(EcLevel::H),
        _ => anyhow::bail!("Unknown error correction level: {}. Use: l, m, q, or h", s),
    }
}

/// Parses an output format flag.
pub(crate) fn parse_format(s: &str) -> Result<SymbolFormat> {
    match s.to_lowercase().as_str() {
        "png" => Ok(SymbolFormat::Png),
        "svg" => Ok(SymbolFormat::Svg),
        "ascii" | "txt" => Ok(SymbolFormat::Ascii),
        _ => anyhow::bail!("Unknown format: {}. Use: png, svg, or ascii", s),
    }
}
