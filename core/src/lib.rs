//! Drawing-capture and recognition-protocol core for the Scrawl client.
//!
//! Everything here is headless: stroke capture, surface rasterization,
//! payload encoding, the wire contract with the recognition service, and the
//! displayed-result reducer are plain state that the GUI crate drives and the
//! tests exercise directly.

pub mod canvas;
pub mod prelude;
pub mod protocol;
pub mod results;
pub mod telemetry;

/// Error taxonomy for one recognition attempt.
///
/// Preview-decode failures are deliberately absent: an unusable normalized
/// image only hides the preview and never surfaces as an error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecognizeError {
    /// The drawing surface could not be snapshotted into a payload.
    #[error("drawing surface unavailable: {0}")]
    Surface(String),
    /// The service answered with a non-success HTTP status.
    #[error("Server error: {0}")]
    Service(u16),
    /// The round trip failed below the protocol: unreachable host, timeout,
    /// or a body that does not parse as a recognition response.
    #[error("{0}")]
    Transport(String),
}

pub type RecognizeResult<T> = Result<T, RecognizeError>;
