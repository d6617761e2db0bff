//! Scan session lifecycle.
//!
//! A session owns its frame source and moves through an explicit
//! `Created -> Running -> Stopped -> Disposed` lifecycle instead of ambient
//! mutable fields. Each activation delivers at most one result; scanning
//! again requires an explicit restart after `stop`.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::decoder::decode_frame;
use super::source::FrameSource;
use super::{ScanError, ScanResult};

/// Lifecycle state of a [`ScanSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed, never started.
    Created,
    /// An activation is open. The decode task may already have finished on
    /// its own after a delivery; `stop` closes the activation either way.
    Running,
    /// Torn down after `stop`. May be started again.
    Stopped,
    /// Source released. Terminal.
    Disposed,
}

/// Receiving end of one activation. Yields at most one result.
pub struct Subscription {
    rx: mpsc::Receiver<ScanResult>,
}

impl Subscription {
    /// Waits for the activation's result.
    ///
    /// Returns `None` when the activation closed without a decode: the frame
    /// stream ended, frame acquisition failed, or `stop` came first. A
    /// result decoded before teardown was requested may still be observed
    /// here afterwards, like a callback already marshaled to its queue.
    pub async fn recv(&mut self) -> Option<ScanResult> {
        self.rx.recv().await
    }
}

/// A scan session over a frame source.
///
/// The decode task pulls frames until the first successful decode, the end
/// of the stream, or cancellation, and never touches another frame after
/// delivering. The source is handed back when the task exits so a stopped
/// session can restart without reacquiring the capture device.
pub struct ScanSession<S: FrameSource + 'static> {
    state: SessionState,
    source: Option<S>,
    cancel: Option<watch::Sender<bool>>,
    task: Option<JoinHandle<S>>,
}

impl<S: FrameSource + 'static> ScanSession<S> {
    /// Creates a session in the `Created` state.
    pub fn new(source: S) -> Self {
        Self {
            state: SessionState::Created,
            source: Some(source),
            cancel: None,
            task: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Opens an activation and returns its result subscription.
    ///
    /// Valid from `Created`, or from `Stopped` for a rescan.
    pub fn start(&mut self) -> Result<Subscription, ScanError> {
        match self.state {
            SessionState::Created | SessionState::Stopped => {}
            state => return Err(ScanError::InvalidState { state }),
        }
        let mut source = self
            .source
            .take()
            .ok_or(ScanError::InvalidState { state: self.state })?;

        let (tx, rx) = mpsc::channel(1);
        let (cancel_tx, mut cancel_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            loop {
                let frame = tokio::select! {
                    biased;
                    _ = cancel_rx.changed() => {
                        debug!("scan session cancelled");
                        break;
                    }
                    frame = source.next_frame() => frame,
                };

                match frame {
                    Ok(Some(frame)) => match decode_frame(&frame) {
                        Ok(Some(payload)) => {
                            debug!(len = payload.len(), "payload decoded, halting capture");
                            let _ = tx.send(ScanResult { payload }).await;
                            break;
                        }
                        Ok(None) => {}
                        Err(e) => warn!("undecodable symbol, waiting for next frame: {e}"),
                    },
                    Ok(None) => {
                        debug!("frame stream exhausted without a decode");
                        break;
                    }
                    Err(e) => {
                        warn!("frame acquisition failed, halting scan: {e}");
                        break;
                    }
                }
            }
            source
        });

        self.cancel = Some(cancel_tx);
        self.task = Some(task);
        self.state = SessionState::Running;
        Ok(Subscription { rx })
    }

    /// Closes the open activation.
    ///
    /// Cancels the decode task and waits for it to finish before returning,
    /// so no frame is processed once `stop` has returned. No-op unless the
    /// session is running.
    pub async fn stop(&mut self) -> Result<(), ScanError> {
        if self.state != SessionState::Running {
            return Ok(());
        }

        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(true);
        }
        if let Some(task) = self.task.take() {
            match task.await {
                Ok(source) => self.source = Some(source),
                Err(e) => return Err(ScanError::Task(e.to_string())),
            }
        }

        self.state = SessionState::Stopped;
        Ok(())
    }

    /// Stops if needed and releases the frame source. Terminal.
    pub async fn dispose(&mut self) -> Result<(), ScanError> {
        self.stop().await?;
        self.source = None;
        self.state = SessionState::Disposed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::encode;
    use async_trait::async_trait;
    use image::{GrayImage, Luma};

    /// In-memory frame source for lifecycle tests.
    struct FrameSeq {
        frames: Vec<GrayImage>,
        next: usize,
    }

    impl FrameSeq {
        fn new(frames: Vec<GrayImage>) -> Self {
            Self { frames, next: 0 }
        }
    }

    #[async_trait]
    impl FrameSource for FrameSeq {
        async fn next_frame(&mut self) -> Result<Option<GrayImage>, ScanError> {
            let frame = self.frames.get(self.next).cloned();
            if frame.is_some() {
                self.next += 1;
            }
            Ok(frame)
        }
    }

    fn blank() -> GrayImage {
        GrayImage::from_pixel(100, 100, Luma([255]))
    }

    fn symbol(text: &str) -> GrayImage {
        encode(text, 116, 116).unwrap()
    }

    #[tokio::test]
    async fn test_first_decode_is_delivered() {
        let mut session = ScanSession::new(FrameSeq::new(vec![blank(), symbol("HELLO")]));
        let mut sub = session.start().unwrap();

        let result = sub.recv().await.unwrap();
        assert_eq!(result.payload, "HELLO");

        session.stop().await.unwrap();
        assert_eq!(session.state(), SessionState::Stopped);
    }

    #[tokio::test]
    async fn test_exhausted_stream_delivers_nothing() {
        let mut session = ScanSession::new(FrameSeq::new(vec![blank(), blank()]));
        let mut sub = session.start().unwrap();

        assert!(sub.recv().await.is_none());
        session.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_start_while_running_is_invalid() {
        let mut session = ScanSession::new(FrameSeq::new(vec![blank()]));
        let _sub = session.start().unwrap();
        assert_eq!(session.state(), SessionState::Running);

        assert!(matches!(
            session.start(),
            Err(ScanError::InvalidState {
                state: SessionState::Running
            })
        ));
        session.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_restart_scans_again() {
        let frames = vec![symbol("FIRST"), symbol("SECOND")];
        let mut session = ScanSession::new(FrameSeq::new(frames));

        let mut sub = session.start().unwrap();
        assert_eq!(sub.recv().await.unwrap().payload, "FIRST");
        session.stop().await.unwrap();

        let mut sub = session.start().unwrap();
        assert_eq!(sub.recv().await.unwrap().payload, "SECOND");
        session.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_disposed_is_terminal() {
        let mut session = ScanSession::new(FrameSeq::new(vec![blank()]));
        session.dispose().await.unwrap();
        assert_eq!(session.state(), SessionState::Disposed);

        assert!(matches!(
            session.start(),
            Err(ScanError::InvalidState {
                state: SessionState::Disposed
            })
        ));
    }

    #[tokio::test]
    async fn test_stop_without_start_is_noop() {
        let mut session = ScanSession::new(FrameSeq::new(vec![blank()]));
        session.stop().await.unwrap();
        assert_eq!(session.state(), SessionState::Created);
    }
}
