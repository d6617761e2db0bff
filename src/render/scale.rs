//! Bitmap scaling to the caller's display size.

use image::imageops::{self, FilterType};
use image::GrayImage;

use super::RenderError;

/// Scales a native symbol to exactly `width` x `height` pixels.
///
/// X and Y scale factors are computed independently, so a non-square target
/// stretches the symbol instead of letterboxing it. Nearest-neighbor
/// resampling keeps module edges crisp and the output deterministic.
pub fn scale_to_target(
    native: &GrayImage,
    width: u32,
    height: u32,
) -> Result<GrayImage, RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidTargetSize { width, height });
    }

    Ok(imageops::resize(native, width, height, FilterType::Nearest))
}
