//! Native QR symbol construction.
//!
//! Wraps the `qrcode` generator behind a typed configuration and explicit
//! payload validation. The generator owns mode selection, error correction,
//! and masking; this module owns deciding whether a payload is representable
//! at all.

use image::{GrayImage, Luma};
use qrcode::{QrCode, Version};
use thiserror::Error;

pub use qrcode::EcLevel;

/// Errors that can occur during symbol rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The payload was empty.
    #[error("Payload is empty")]
    EmptyPayload,

    /// The payload contains a character outside the supported ASCII set.
    #[error("Payload not representable: {ch:?} at byte {index}")]
    Unencodable {
        /// First character outside the supported set.
        ch: char,
        /// Byte index of that character in the payload.
        index: usize,
    },

    /// A requested target dimension was zero.
    #[error("Invalid target size: {width}x{height}")]
    InvalidTargetSize {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The underlying symbol generator rejected the payload.
    #[error("Symbol generation failed: {0}")]
    Symbol(String),

    /// Image save error.
    #[error("Image save error: {0}")]
    ImageSave(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for symbol generation.
///
/// Replaces the stringly-keyed configuration of platform filter objects with
/// named fields.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Error correction level (default: Medium, the generator's own default)
    pub ec_level: EcLevel,
    /// Surround the symbol with the standard 4-module quiet zone (default: true)
    pub quiet_zone: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ec_level: EcLevel::M,
            quiet_zone: true,
        }
    }
}

/// Quiet zone width in modules mandated by the symbol standard.
const QUIET_ZONE_MODULES: u32 = 4;

/// Checks that a payload is representable in the symbol byte encoding.
///
/// The accepted character set is ASCII. An empty payload and the first
/// character outside the set are surfaced as distinct errors rather than
/// silently coerced.
pub fn supported_payload(text: &str) -> Result<(), RenderError> {
    if text.is_empty() {
        return Err(RenderError::EmptyPayload);
    }
    if let Some((index, ch)) = text.char_indices().find(|(_, c)| !c.is_ascii()) {
        return Err(RenderError::Unencodable { ch, index });
    }
    Ok(())
}

/// Generates the native-resolution symbol, one module per pixel.
///
/// The output side length is the module count plus the quiet zone. Identical
/// payload and configuration produce a bit-identical image.
pub fn native_symbol(text: &str, config: &RenderConfig) -> Result<GrayImage, RenderError> {
    supported_payload(text)?;

    let qr = QrCode::with_error_correction_level(text.as_bytes(), config.ec_level)
        .map_err(|e| RenderError::Symbol(e.to_string()))?;

    let image = qr
        .render::<Luma<u8>>()
        .quiet_zone(config.quiet_zone)
        .module_dimensions(1, 1)
        .build();

    Ok(image)
}

/// Size facts about the symbol a payload produces.
#[derive(Debug, Clone, Copy)]
pub struct SymbolInfo {
    /// Payload length in bytes.
    pub payload_bytes: usize,
    /// Symbol version (1-40; negative for micro symbols).
    pub version: i16,
    /// Modules per side, quiet zone excluded.
    pub modules: usize,
    /// Native bitmap side in pixels, quiet zone included.
    pub native_side: u32,
}

/// Reports the version and native size the payload would render at.
///
/// Builds the symbol and reads the version it actually uses, so the report
/// stays correct across error correction levels.
pub fn symbol_info(text: &str, config: &RenderConfig) -> Result<SymbolInfo, RenderError> {
    supported_payload(text)?;

    let qr = QrCode::with_error_correction_level(text.as_bytes(), config.ec_level)
        .map_err(|e| RenderError::Symbol(e.to_string()))?;

    let version = match qr.version() {
        Version::Normal(v) => v,
        Version::Micro(v) => -v,
    };
    let modules = qr.width();
    let quiet = if config.quiet_zone {
        2 * QUIET_ZONE_MODULES
    } else {
        0
    };

    Ok(SymbolInfo {
        payload_bytes: text.len(),
        version,
        modules,
        native_side: modules as u32 + quiet,
    })
}
