//! Scan surface: cancellable decode sessions over a frame stream.
//!
//! The platform capture pipeline is abstracted as a [`FrameSource`]. A
//! [`ScanSession`] pulls frames from it on a background task, attempts a
//! payload decode per frame, and delivers at most one [`ScanResult`] per
//! activation. Stopping the session joins the decode task before returning,
//! so no frame is processed after teardown completes.

mod decoder;
mod session;
mod source;

pub use decoder::decode_frame;
pub use session::{ScanSession, SessionState, Subscription};
pub use source::{FrameSource, ImageFileSource};

use thiserror::Error;

/// A successfully decoded payload, delivered at most once per activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// The decoded text payload.
    pub payload: String,
}

/// Errors that can occur on the scan path.
#[derive(Error, Debug)]
pub enum ScanError {
    /// No capture source is available.
    #[error("No capture source available")]
    CaptureUnavailable,

    /// A frame could not be acquired.
    #[error("Frame acquisition failed: {0}")]
    Frame(String),

    /// A detected symbol could not be decoded.
    #[error("Symbol decode failed: {0}")]
    Decode(String),

    /// The decode task terminated abnormally.
    #[error("Scan task failed: {0}")]
    Task(String),

    /// Operation not valid in the current session state.
    #[error("Operation not valid while session is {state:?}")]
    InvalidState {
        /// The session state at the time of the call.
        state: SessionState,
    },
}
