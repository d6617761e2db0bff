//! QR symbol rendering.
//!
//! Turns a text payload into a monochrome bitmap of an exact pixel size.
//! Symbol construction is delegated to the `qrcode` crate; this module owns
//! payload validation, the typed configuration, and scaling to the display
//! size. Encoding is synchronous, allocation-per-call, and free of shared
//! state: identical inputs produce bit-identical bitmaps.

mod scale;
mod symbol;

pub use scale::scale_to_target;
pub use symbol::{
    native_symbol, supported_payload, symbol_info, EcLevel, RenderConfig, RenderError, SymbolInfo,
};

use std::path::Path;

use image::GrayImage;
use qrcode::render::svg;
use qrcode::QrCode;

/// Output format for rendered symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolFormat {
    /// PNG image (default)
    Png,
    /// SVG vector image
    Svg,
    /// ASCII art (for terminal display)
    Ascii,
}

impl Default for SymbolFormat {
    fn default() -> Self {
        Self::Png
    }
}

/// Renders `text` as a bitmap of exactly `width` x `height` pixels using the
/// default configuration.
///
/// The bitmap is produced fresh per call and owned exclusively by the
/// caller. Failure leaves nothing half-rendered; callers that display the
/// result keep showing their previous image.
pub fn encode(text: &str, width: u32, height: u32) -> Result<GrayImage, RenderError> {
    encode_with_config(text, width, height, &RenderConfig::default())
}

/// Renders `text` as a bitmap of exactly `width` x `height` pixels.
pub fn encode_with_config(
    text: &str,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> Result<GrayImage, RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidTargetSize { width, height });
    }

    let native = native_symbol(text, config)?;
    scale_to_target(&native, width, height)
}

/// Renders `text` as an SVG document.
///
/// Vector output scales on the display side, so only a minimum edge is
/// requested here.
pub fn render_svg(text: &str, min_side: u32, config: &RenderConfig) -> Result<String, RenderError> {
    supported_payload(text)?;

    let qr = QrCode::with_error_correction_level(text.as_bytes(), config.ec_level)
        .map_err(|e| RenderError::Symbol(e.to_string()))?;

    let svg_string = qr
        .render()
        .min_dimensions(min_side, min_side)
        .quiet_zone(config.quiet_zone)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    Ok(svg_string)
}

/// Renders `text` as ASCII art for terminal display.
pub fn render_ascii(text: &str, config: &RenderConfig) -> Result<String, RenderError> {
    supported_payload(text)?;

    let qr = QrCode::with_error_correction_level(text.as_bytes(), config.ec_level)
        .map_err(|e| RenderError::Symbol(e.to_string()))?;

    let ascii = qr
        .render::<char>()
        .quiet_zone(config.quiet_zone)
        .module_dimensions(2, 1)
        .build();

    Ok(ascii)
}

/// Renders `text` to a file in the requested format.
///
/// PNG output is scaled to exactly `width` x `height`; SVG and ASCII use the
/// generator's own sizing.
pub fn render_to_file<P: AsRef<Path>>(
    text: &str,
    path: P,
    width: u32,
    height: u32,
    format: SymbolFormat,
    config: &RenderConfig,
) -> Result<(), RenderError> {
    let path = path.as_ref();

    match format {
        SymbolFormat::Png => {
            let bitmap = encode_with_config(text, width, height, config)?;
            bitmap
                .save(path)
                .map_err(|e| RenderError::ImageSave(e.to_string()))?;
        }
        SymbolFormat::Svg => {
            let svg = render_svg(text, width.min(height), config)?;
            std::fs::write(path, svg)?;
        }
        SymbolFormat::Ascii => {
            let ascii = render_ascii(text, config)?;
            std::fs::write(path, ascii)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_size_contract() {
        let bitmap = encode("https://example.com", 200, 200).unwrap();
        assert_eq!(bitmap.width(), 200);
        assert_eq!(bitmap.height(), 200);
    }

    #[test]
    fn test_encode_rejects_zero_target() {
        assert!(matches!(
            encode("hello", 0, 0),
            Err(RenderError::InvalidTargetSize { .. })
        ));
    }

    #[test]
    fn test_render_svg() {
        let svg = render_svg("SVG test", 200, &RenderConfig::default()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_render_ascii() {
        let ascii = render_ascii("Test", &RenderConfig::default()).unwrap();
        assert!(ascii.contains("█") || ascii.contains("#") || ascii.contains(" "));
    }

    #[test]
    fn test_render_to_file_png() {
        let path = std::env::temp_dir().join("qrsnap_render_to_file.png");
        render_to_file(
            "file test",
            &path,
            120,
            120,
            SymbolFormat::Png,
            &RenderConfig::default(),
        )
        .unwrap();

        let saved = image::open(&path).unwrap();
        assert_eq!(saved.width(), 120);
        assert_eq!(saved.height(), 120);
        std::fs::remove_file(&path).ok();
    }
}
