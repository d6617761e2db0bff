//! # qrsnap - text in, scannable bitmap out
//!
//! qrsnap renders a text payload as a QR bitmap of an exact pixel size and
//! models the reverse direction as a cancellable scan session over a frame
//! stream.
//!
//! ## Overview
//!
//! - Encoding is a pure function: payload plus target size gives a
//!   caller-owned grayscale bitmap, bit-identical for identical inputs. No
//!   caching, no retries, no shared state.
//! - Symbol construction (modes, error correction, masking) is delegated to
//!   the `qrcode` crate and payload decode to `rqrr`; this crate owns
//!   payload validation, scaling, session lifecycle, and dispatch.
//! - A scan activation delivers at most one result, and stopping it joins
//!   the decode task so no frame is processed after teardown returns.
//!
//! ## Example
//!
//! ```rust
//! use qrsnap::{encode, DEFAULT_TARGET_SIZE};
//!
//! let bitmap = encode("https://example.com", DEFAULT_TARGET_SIZE, DEFAULT_TARGET_SIZE).unwrap();
//! assert_eq!((bitmap.width(), bitmap.height()), (200, 200));
//! ```
//!
//! ## Modules
//!
//! - [`render`]: payload validation, symbol generation, scaling
//! - [`scan`]: frame sources, per-frame decode, session lifecycle
//! - [`dispatch`]: downstream consumers of decoded payloads

/// Default display edge in pixels.
pub const DEFAULT_TARGET_SIZE: u32 = 200;

pub mod dispatch;
pub mod render;
pub mod scan;

// Re-export commonly used types at the crate root
pub use dispatch::{ActionDispatcher, FnDispatcher, NullDispatcher};
pub use render::{
    encode, encode_with_config, render_ascii, render_svg, render_to_file, symbol_info, EcLevel,
    RenderConfig, RenderError, SymbolFormat, SymbolInfo,
};
pub use scan::{
    decode_frame, FrameSource, ImageFileSource, ScanError, ScanResult, ScanSession, SessionState,
    Subscription,
};
