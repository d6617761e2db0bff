//! Per-frame payload decode.

use image::GrayImage;
use rqrr::PreparedImage;
use tracing::debug;

use super::ScanError;

/// Attempts to decode a QR payload from a single frame.
///
/// Returns `Ok(None)` when no symbol is visible, leaving the session to wait
/// for the next frame. When several symbols are visible the first grid the
/// detector reports wins; that ordering is library-defined and not stable.
pub fn decode_frame(frame: &GrayImage) -> Result<Option<String>, ScanError> {
    // prepare_from_greyscale keeps the frame on this crate's image types.
    let mut prepared = PreparedImage::prepare_from_greyscale(
        frame.width() as usize,
        frame.height() as usize,
        |x, y| frame.get_pixel(x as u32, y as u32).0[0],
    );

    let grids = prepared.detect_grids();
    if grids.is_empty() {
        return Ok(None);
    }
    if grids.len() > 1 {
        debug!(
            candidates = grids.len(),
            "multiple symbols in frame, taking the first"
        );
    }

    let (_, content) = grids[0]
        .decode()
        .map_err(|e| ScanError::Decode(format!("{:?}", e)))?;

    Ok(Some(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::encode;
    use image::Luma;

    #[test]
    fn test_decode_rendered_symbol() {
        let bitmap = encode("HELLO", 116, 116).unwrap();
        let payload = decode_frame(&bitmap).unwrap();
        assert_eq!(payload.as_deref(), Some("HELLO"));
    }

    #[test]
    fn test_blank_frame_has_no_symbol() {
        let blank = GrayImage::from_pixel(100, 100, Luma([255]));
        assert!(decode_frame(&blank).unwrap().is_none());
    }

    #[test]
    fn test_decode_survives_nonuniform_scale() {
        // 200x200 over a version-2 symbol gives fractional module widths.
        let bitmap = encode("https://example.com", 200, 200).unwrap();
        let payload = decode_frame(&bitmap).unwrap();
        assert_eq!(payload.as_deref(), Some("https://example.com"));
    }
}
