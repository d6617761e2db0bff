//! Frame acquisition.
//!
//! A [`FrameSource`] stands in for the capture pipeline: it yields grayscale
//! frames one at a time until the stream ends or the session tears it down.

use std::path::PathBuf;

use async_trait::async_trait;
use image::GrayImage;
use tracing::warn;

use super::ScanError;

/// Trait for asynchronous frame delivery.
#[async_trait]
pub trait FrameSource: Send {
    /// Returns the next frame, or `None` when the stream is exhausted.
    async fn next_frame(&mut self) -> Result<Option<GrayImage>, ScanError>;
}

/// Frame source backed by an ordered list of image files.
///
/// Frames are decoded to grayscale lazily, one per [`next_frame`] call, in
/// the order given.
///
/// [`next_frame`]: FrameSource::next_frame
pub struct ImageFileSource {
    paths: Vec<PathBuf>,
    next: usize,
}

impl ImageFileSource {
    /// Creates a source from image paths in capture order.
    ///
    /// Fails with [`ScanError::CaptureUnavailable`] when there is nothing to
    /// capture from: an empty list, or a path that does not exist.
    pub fn new(paths: Vec<PathBuf>) -> Result<Self, ScanError> {
        if paths.is_empty() {
            return Err(ScanError::CaptureUnavailable);
        }
        if let Some(missing) = paths.iter().find(|p| !p.exists()) {
            warn!(path = %missing.display(), "capture source path does not exist");
            return Err(ScanError::CaptureUnavailable);
        }
        Ok(Self { paths, next: 0 })
    }

    /// Number of frames remaining in the stream.
    pub fn remaining(&self) -> usize {
        self.paths.len().saturating_sub(self.next)
    }
}

#[async_trait]
impl FrameSource for ImageFileSource {
    async fn next_frame(&mut self) -> Result<Option<GrayImage>, ScanError> {
        let Some(path) = self.paths.get(self.next) else {
            return Ok(None);
        };
        self.next += 1;

        let image = image::open(path)
            .map_err(|e| ScanError::Frame(format!("{}: {}", path.display(), e)))?;

        Ok(Some(image.to_luma8()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::encode;

    #[test]
    fn test_empty_source_is_capture_unavailable() {
        assert!(matches!(
            ImageFileSource::new(Vec::new()),
            Err(ScanError::CaptureUnavailable)
        ));
    }

    #[test]
    fn test_missing_path_is_capture_unavailable() {
        let paths = vec![PathBuf::from("/nonexistent/qrsnap-frame.png")];
        assert!(matches!(
            ImageFileSource::new(paths),
            Err(ScanError::CaptureUnavailable)
        ));
    }

    #[tokio::test]
    async fn test_frames_delivered_in_order_then_exhausted() {
        let dir = std::env::temp_dir();
        let path = dir.join("qrsnap_source_frame.png");
        let bitmap = encode("frame", 120, 120).unwrap();
        bitmap.save(&path).unwrap();

        let mut source = ImageFileSource::new(vec![path.clone()]).unwrap();
        assert_eq!(source.remaining(), 1);

        let frame = source.next_frame().await.unwrap();
        assert!(frame.is_some());
        assert_eq!(source.remaining(), 0);

        let end = source.next_frame().await.unwrap();
        assert!(end.is_none());

        std::fs::remove_file(&path).ok();
    }
}
